//! Core domain models and services for the Sokodash seller dashboard.
//!
//! This crate owns the storage-agnostic pieces of the dashboard: the package
//! and seller domain models, the repository traits the storage layer
//! implements, and the per-tick render transform that turns fetched rows into
//! a display view. The actual store and the HTTP surface live in sibling
//! crates.

pub mod dashboard;
pub mod errors;
pub mod packages;
pub mod sellers;

pub use errors::{Error, Result};
