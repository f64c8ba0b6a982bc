//! The dashboard refresh service.

use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::packages::PackageRepositoryTrait;
use crate::sellers::SellerRepositoryTrait;

use super::{render_dashboard, DashboardView};

/// Produces the dashboard view for one refresh tick.
pub trait DashboardServiceTrait: Send + Sync {
    /// The fixed seller identity this instance serves.
    fn seller_id(&self) -> i64;

    /// Runs one tick: fetch packages and wallet for the fixed seller, then
    /// render. The two fetches have no required ordering between them, but
    /// both complete before the view is built. Any repository error aborts
    /// the tick and propagates to the caller.
    fn refresh(&self) -> Result<DashboardView>;
}

/// Default implementation backed by the repository traits.
///
/// The seller identity is injected at construction and never changes for the
/// lifetime of the instance; one instance serves exactly one seller. No state
/// carries across ticks.
pub struct DashboardService {
    seller_id: i64,
    package_repository: Arc<dyn PackageRepositoryTrait>,
    seller_repository: Arc<dyn SellerRepositoryTrait>,
}

impl DashboardService {
    pub fn new(
        seller_id: i64,
        package_repository: Arc<dyn PackageRepositoryTrait>,
        seller_repository: Arc<dyn SellerRepositoryTrait>,
    ) -> Self {
        Self {
            seller_id,
            package_repository,
            seller_repository,
        }
    }
}

impl DashboardServiceTrait for DashboardService {
    fn seller_id(&self) -> i64 {
        self.seller_id
    }

    fn refresh(&self) -> Result<DashboardView> {
        let packages = self
            .package_repository
            .load_packages_for_seller(self.seller_id)?;
        let wallet: Decimal = self.seller_repository.load_wallet(self.seller_id)?;

        debug!(
            "refresh tick for seller {}: {} packages, wallet {}",
            self.seller_id,
            packages.len(),
            wallet
        );

        Ok(render_dashboard(&packages, wallet))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::dashboard::DashboardBody;
    use crate::errors::Error;
    use crate::packages::{Package, PackageStatus};

    use super::*;

    struct FakePackageRepository {
        packages: Vec<Package>,
    }

    impl PackageRepositoryTrait for FakePackageRepository {
        fn load_packages_for_seller(&self, seller_id: i64) -> Result<Vec<Package>> {
            Ok(self
                .packages
                .iter()
                .filter(|p| p.seller_id == seller_id)
                .cloned()
                .collect())
        }
    }

    struct FakeSellerRepository {
        wallet: Decimal,
    }

    impl SellerRepositoryTrait for FakeSellerRepository {
        fn load_wallet(&self, _seller_id: i64) -> Result<Decimal> {
            Ok(self.wallet)
        }
    }

    struct FailingPackageRepository;

    impl PackageRepositoryTrait for FailingPackageRepository {
        fn load_packages_for_seller(&self, _seller_id: i64) -> Result<Vec<Package>> {
            Err(Error::storage("connection pool timed out"))
        }
    }

    fn service_with(packages: Vec<Package>, wallet: Decimal) -> DashboardService {
        DashboardService::new(
            1,
            Arc::new(FakePackageRepository { packages }),
            Arc::new(FakeSellerRepository { wallet }),
        )
    }

    fn package(id: i64, seller_id: i64) -> Package {
        Package {
            id,
            seller_id,
            buyer_id: 3,
            courier_id: Some(4),
            fc_id: 2,
            status: PackageStatus::Assigned,
        }
    }

    #[test]
    fn refresh_filters_by_the_fixed_seller_identity() {
        let service = service_with(vec![package(1, 1), package(2, 2)], dec!(100));
        let view = service.refresh().unwrap();
        let table = view.body.as_table().unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].package_id, 1);
    }

    #[test]
    fn refresh_with_no_packages_yields_placeholder() {
        let service = service_with(vec![], dec!(500));
        let view = service.refresh().unwrap();
        assert!(matches!(view.body, DashboardBody::Placeholder { .. }));
        assert_eq!(view.wallet_banner, "Wallet: KES 500");
    }

    #[test]
    fn storage_failure_aborts_the_tick() {
        let service = DashboardService::new(
            1,
            Arc::new(FailingPackageRepository),
            Arc::new(FakeSellerRepository { wallet: dec!(1) }),
        );
        let err = service.refresh().unwrap_err();
        assert!(matches!(err, Error::Storage(_)));
    }
}
