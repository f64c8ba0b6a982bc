//! SQLite storage for package reads.

mod model;
mod repository;

pub use model::PackageDB;
pub use repository::PackageRepository;
