//! Repository contract for package reads.

use crate::errors::Result;

use super::Package;

/// Read-only access to package rows in the external store.
pub trait PackageRepositoryTrait: Send + Sync {
    /// Loads all packages belonging to the given seller, in store-native
    /// order. Consumers must treat the ordering as unspecified. A seller with
    /// no packages (or an unknown seller id) yields an empty vector, never an
    /// error.
    fn load_packages_for_seller(&self, seller_id: i64) -> Result<Vec<Package>>;
}
