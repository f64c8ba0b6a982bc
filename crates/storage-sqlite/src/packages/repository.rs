//! Read-only repository over the `packages` table.

use std::sync::Arc;

use diesel::prelude::*;
use sokodash_core::packages::{Package, PackageRepositoryTrait};
use sokodash_core::Result;

use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::packages::dsl::*;

use super::model::PackageDB;

pub struct PackageRepository {
    pool: Arc<DbPool>,
}

impl PackageRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        PackageRepository { pool }
    }

    pub fn load_packages_for_seller_impl(&self, seller: i64) -> Result<Vec<Package>> {
        let mut conn = get_connection(&self.pool)?;
        let packages_db = packages
            .filter(seller_id.eq(seller))
            .load::<PackageDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(packages_db.into_iter().map(Package::from).collect())
    }
}

impl PackageRepositoryTrait for PackageRepository {
    fn load_packages_for_seller(&self, seller: i64) -> Result<Vec<Package>> {
        self.load_packages_for_seller_impl(seller)
    }
}
