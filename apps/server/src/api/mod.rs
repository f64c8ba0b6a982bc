//! HTTP routes.

mod dashboard;

use axum::Router;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    dashboard::router(state)
}
