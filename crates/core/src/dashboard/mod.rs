//! Dashboard view models, the per-tick render transform, and the refresh
//! service.

mod dashboard_model;
mod dashboard_service;
mod render;
mod scheduler;

pub use dashboard_model::*;
pub use dashboard_service::*;
pub use render::*;
pub use scheduler::*;
