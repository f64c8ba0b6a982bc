//! Shared state for the HTTP handlers.

use std::time::Duration;

use tokio::sync::watch;

use crate::events::EventBus;
use crate::refresh::{DashboardSnapshot, RefreshStatus};

#[derive(Clone)]
pub struct AppState {
    pub seller_id: i64,
    pub refresh_interval: Duration,
    /// Latest successful snapshot; `None` until the first tick completes.
    pub snapshot_rx: watch::Receiver<Option<DashboardSnapshot>>,
    pub status_rx: watch::Receiver<RefreshStatus>,
    pub event_bus: EventBus,
}
