//! Seller domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A seller record as read from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub id: i64,
    /// Non-negative wallet balance in the display currency.
    pub wallet: Decimal,
}
