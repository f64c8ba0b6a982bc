//! SQLite storage for seller reads.

mod model;
mod repository;

pub use model::SellerDB;
pub use repository::SellerRepository;
