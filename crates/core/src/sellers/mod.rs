//! Seller domain model and repository contract.

mod sellers_model;
mod sellers_traits;

pub use sellers_model::*;
pub use sellers_traits::*;
