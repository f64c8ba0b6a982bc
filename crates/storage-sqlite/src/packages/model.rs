//! Database model for the `packages` table.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use sokodash_core::packages::{Package, PackageStatus};

#[derive(Queryable, Identifiable, Selectable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::packages)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PackageDB {
    pub id: i64,
    pub seller_id: i64,
    pub buyer_id: i64,
    pub courier_id: Option<i64>,
    pub fc_id: i64,
    pub status: String,
}

impl From<PackageDB> for Package {
    fn from(db: PackageDB) -> Self {
        Package {
            id: db.id,
            seller_id: db.seller_id,
            buyer_id: db.buyer_id,
            courier_id: db.courier_id,
            fc_id: db.fc_id,
            status: PackageStatus::from(db.status),
        }
    }
}
