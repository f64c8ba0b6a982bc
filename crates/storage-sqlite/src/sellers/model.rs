//! Database model for the `sellers` table.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Wallet balances are stored as decimal text and parsed at the read
/// boundary, so amounts never pass through floating point.
#[derive(Queryable, Identifiable, Selectable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::sellers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SellerDB {
    pub id: i64,
    pub wallet: String,
}
