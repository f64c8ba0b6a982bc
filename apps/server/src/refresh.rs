//! The background refresh controller.
//!
//! One tokio task alternates between waiting for the next timer tick (Idle)
//! and running fetch + transform + publish (Refreshing). A failed tick keeps
//! the previous snapshot in place; the next tick retries by virtue of the
//! polling cadence, with no extra retry or backoff logic.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sokodash_core::dashboard::{DashboardServiceTrait, DashboardView};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error};

use crate::events::{EventBus, ServerEvent, DASHBOARD_REFRESH, SLOT_TABLE, SLOT_WALLET};

/// The output of one successful tick.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub view: DashboardView,
    pub refreshed_at: DateTime<Utc>,
    pub tick: u64,
}

/// Bookkeeping surfaced by `/api/status`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshStatus {
    pub ticks: u64,
    pub last_refreshed_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
    pub consecutive_failures: u32,
}

pub struct RefreshController {
    service: Arc<dyn DashboardServiceTrait>,
    interval: Duration,
    event_bus: EventBus,
    snapshot_tx: watch::Sender<Option<DashboardSnapshot>>,
    status_tx: watch::Sender<RefreshStatus>,
}

impl RefreshController {
    /// Builds the controller plus the receivers the HTTP handlers read from.
    pub fn new(
        service: Arc<dyn DashboardServiceTrait>,
        interval: Duration,
        event_bus: EventBus,
    ) -> (
        Self,
        watch::Receiver<Option<DashboardSnapshot>>,
        watch::Receiver<RefreshStatus>,
    ) {
        let (snapshot_tx, snapshot_rx) = watch::channel(None);
        let (status_tx, status_rx) = watch::channel(RefreshStatus::default());
        let controller = Self {
            service,
            interval,
            event_bus,
            snapshot_tx,
            status_tx,
        };
        (controller, snapshot_rx, status_rx)
    }

    /// Runs the refresh cycle until the process shuts down. The first tick
    /// fires immediately so the dashboard populates at startup.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut tick: u64 = 0;
        loop {
            ticker.tick().await;
            tick += 1;
            self.refresh_once(tick).await;
        }
    }

    /// One Refreshing phase: fetch and render off the async runtime, then
    /// publish. Always returns to Idle, success or not.
    async fn refresh_once(&self, tick: u64) {
        let service = Arc::clone(&self.service);
        let result = match tokio::task::spawn_blocking(move || service.refresh()).await {
            Ok(result) => result,
            Err(join_err) => Err(sokodash_core::Error::unexpected(format!(
                "refresh task failed: {join_err}"
            ))),
        };

        match result {
            Ok(view) => {
                let snapshot = DashboardSnapshot {
                    view,
                    refreshed_at: Utc::now(),
                    tick,
                };
                self.publish_refresh(&snapshot);
                self.status_tx.send_modify(|status| {
                    status.ticks = tick;
                    status.last_refreshed_at = Some(snapshot.refreshed_at);
                    status.last_error = None;
                    status.consecutive_failures = 0;
                });
                let _ = self.snapshot_tx.send(Some(snapshot));
                debug!(tick, "dashboard refreshed");
            }
            Err(err) => {
                error!(tick, error = %err, "refresh tick failed; keeping previous view");
                self.status_tx.send_modify(|status| {
                    status.ticks = tick;
                    status.last_error = Some(err.to_string());
                    status.consecutive_failures += 1;
                });
            }
        }
    }

    /// Both output slots go out in a single event so the table and the wallet
    /// banner always belong to the same tick.
    fn publish_refresh(&self, snapshot: &DashboardSnapshot) {
        let payload = serde_json::json!({
            (SLOT_TABLE): &snapshot.view.body,
            (SLOT_WALLET): &snapshot.view.wallet_banner,
            "refreshedAt": snapshot.refreshed_at,
            "tick": snapshot.tick,
        });
        self.event_bus
            .publish(ServerEvent::with_payload(DASHBOARD_REFRESH, payload));
    }
}
