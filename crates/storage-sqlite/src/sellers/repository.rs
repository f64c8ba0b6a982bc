//! Read-only repository over the `sellers` table.

use std::str::FromStr;
use std::sync::Arc;

use diesel::prelude::*;
use rust_decimal::Decimal;
use sokodash_core::sellers::SellerRepositoryTrait;
use sokodash_core::Result;

use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::sellers::dsl::*;

use super::model::SellerDB;

pub struct SellerRepository {
    pool: Arc<DbPool>,
}

impl SellerRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SellerRepository { pool }
    }

    pub fn load_wallet_impl(&self, seller: i64) -> Result<Decimal> {
        let mut conn = get_connection(&self.pool)?;
        let seller_db = sellers
            .find(seller)
            .first::<SellerDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        match seller_db {
            Some(record) => parse_wallet(seller, &record.wallet),
            // Absent seller reads as zero so the render step stays total.
            None => Ok(Decimal::ZERO),
        }
    }
}

impl SellerRepositoryTrait for SellerRepository {
    fn load_wallet(&self, seller: i64) -> Result<Decimal> {
        self.load_wallet_impl(seller)
    }
}

fn parse_wallet(seller: i64, raw: &str) -> Result<Decimal> {
    Decimal::from_str(raw.trim()).map_err(|_| {
        StorageError::Corrupted(format!(
            "seller {seller} wallet is not a decimal amount: {raw:?}"
        ))
        .into()
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use sokodash_core::Error;

    use crate::db::run_migrations;
    use crate::schema::sellers;
    use crate::test_support::test_pool;

    use super::*;

    fn insert_seller(pool: &DbPool, seller: i64, wallet_text: &str) {
        let mut conn = get_connection(pool).unwrap();
        diesel::insert_into(sellers::table)
            .values((sellers::id.eq(seller), sellers::wallet.eq(wallet_text)))
            .execute(&mut conn)
            .unwrap();
    }

    #[test]
    fn loads_the_stored_wallet_balance() {
        let pool = test_pool();
        run_migrations(&pool).unwrap();
        insert_seller(&pool, 1, "500");

        let repository = SellerRepository::new(Arc::clone(&pool));
        assert_eq!(repository.load_wallet(1).unwrap(), dec!(500));
    }

    #[test]
    fn absent_seller_reads_as_zero() {
        let pool = test_pool();
        run_migrations(&pool).unwrap();

        let repository = SellerRepository::new(Arc::clone(&pool));
        assert_eq!(repository.load_wallet(1).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn unparseable_wallet_text_is_a_malformed_record() {
        let pool = test_pool();
        run_migrations(&pool).unwrap();
        insert_seller(&pool, 1, "not-a-number");

        let repository = SellerRepository::new(Arc::clone(&pool));
        let err = repository.load_wallet(1).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord(_)));
    }

    #[test]
    fn fractional_balances_parse_exactly() {
        let pool = test_pool();
        run_migrations(&pool).unwrap();
        insert_seller(&pool, 1, "1250.75");

        let repository = SellerRepository::new(Arc::clone(&pool));
        assert_eq!(repository.load_wallet(1).unwrap(), dec!(1250.75));
    }
}
