//! Package domain models and repository contract.

mod packages_model;
mod packages_traits;

pub use packages_model::*;
pub use packages_traits::*;
