//! Repository contract for seller reads.

use rust_decimal::Decimal;

use crate::errors::Result;

/// Read-only access to seller records in the external store.
pub trait SellerRepositoryTrait: Send + Sync {
    /// Loads the wallet balance for the given seller. An absent seller record
    /// is not an error: it reads as a zero balance so the render step stays
    /// total.
    fn load_wallet(&self, seller_id: i64) -> Result<Decimal>;
}
