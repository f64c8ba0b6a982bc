//! Per-tick view models produced by the render transform.
//!
//! Everything in this module is ephemeral: built once per refresh tick from
//! the fetched rows and discarded after rendering. Nothing here carries
//! identity or state across ticks.

use serde::{Deserialize, Serialize};

use crate::packages::PackageStatus;

/// Table column labels, in display order.
pub const TABLE_COLUMNS: [&str; 5] = ["Package ID", "Buyer ID", "Courier ID", "FC ID", "Status"];

/// One display row derived from a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRow {
    pub package_id: i64,
    pub buyer_id: i64,
    pub courier_id: Option<i64>,
    pub fc_id: i64,
    pub status: PackageStatus,
    /// Background color resolved from the status lookup table; `None` for
    /// statuses outside the table (row keeps default styling).
    pub background: Option<String>,
}

/// The rendered package table for one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<PackageRow>,
    pub page_size: usize,
}

impl TableView {
    /// Number of pages needed to show every row. An empty table still has one
    /// (empty) page so page arithmetic stays total.
    pub fn page_count(&self) -> usize {
        if self.rows.is_empty() {
            1
        } else {
            self.rows.len().div_ceil(self.page_size)
        }
    }

    /// Rows for the given 1-based page, clamped into range. No page ever
    /// exceeds `page_size` rows.
    pub fn page(&self, page: usize) -> &[PackageRow] {
        let page = page.clamp(1, self.page_count());
        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.rows.len());
        &self.rows[start..end]
    }
}

/// Body of the dashboard: a table when the seller has packages, a placeholder
/// message otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DashboardBody {
    Placeholder { message: String },
    Table(TableView),
}

impl DashboardBody {
    pub fn as_table(&self) -> Option<&TableView> {
        match self {
            DashboardBody::Table(table) => Some(table),
            DashboardBody::Placeholder { .. } => None,
        }
    }
}

/// The complete output of one refresh tick. Body and wallet banner always
/// come from the same tick; they are never emitted separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub body: DashboardBody,
    pub wallet_banner: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(package_id: i64) -> PackageRow {
        PackageRow {
            package_id,
            buyer_id: 1,
            courier_id: None,
            fc_id: 1,
            status: PackageStatus::Created,
            background: None,
        }
    }

    fn table(row_count: i64) -> TableView {
        TableView {
            columns: TABLE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: (0..row_count).map(row).collect(),
            page_size: 10,
        }
    }

    #[test]
    fn pages_cap_at_page_size_and_keep_overflow() {
        let view = table(12);
        assert_eq!(view.page_count(), 2);
        assert_eq!(view.page(1).len(), 10);
        assert_eq!(view.page(2).len(), 2);
        assert_eq!(view.page(2)[1].package_id, 11);
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let view = table(3);
        assert_eq!(view.page_count(), 1);
        assert_eq!(view.page(0).len(), 3);
        assert_eq!(view.page(99).len(), 3);
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_page() {
        let view = table(20);
        assert_eq!(view.page_count(), 2);
        assert_eq!(view.page(2).len(), 10);
    }
}
