//! Scheduling constants for the dashboard refresh cycle.

/// Poll cadence in milliseconds. Every interval the dashboard re-reads the
/// store and re-renders; there is no push path from the store.
pub const DASHBOARD_REFRESH_INTERVAL_MS: u64 = 5000;

/// Maximum number of table rows shown per page. Rows beyond the page size are
/// paginated by the presentation layer, never dropped.
pub const DASHBOARD_PAGE_SIZE: usize = 10;
