//! Server event bus for refresh notifications (SSE delivery).

use serde::Serialize;
use serde_json::Value;
use tokio::sync::broadcast;

/// Event published once per successful refresh tick.
pub const DASHBOARD_REFRESH: &str = "dashboard-refresh";

/// Named output slot carrying the table-or-placeholder body.
pub const SLOT_TABLE: &str = "table-div";
/// Named output slot carrying the wallet banner.
pub const SLOT_WALLET: &str = "wallet-div";

#[derive(Debug, Clone, Serialize)]
pub struct ServerEvent {
    pub name: String,
    pub payload: Value,
}

impl ServerEvent {
    pub fn with_payload(name: &str, payload: Value) -> Self {
        Self {
            name: name.to_string(),
            payload,
        }
    }
}

/// Broadcast fan-out to SSE subscribers. Publishing never blocks; events for
/// lagging or absent subscribers are dropped.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ServerEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn publish(&self, event: ServerEvent) {
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.sender.subscribe()
    }
}
