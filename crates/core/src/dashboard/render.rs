//! The per-tick render transform.
//!
//! [`render_dashboard`] is a pure function of the two fetch results for a
//! tick: the same packages and wallet balance always produce the same view.

use rust_decimal::Decimal;

use crate::packages::{Package, PackageStatus};

use super::{
    DashboardBody, DashboardView, PackageRow, TableView, DASHBOARD_PAGE_SIZE, TABLE_COLUMNS,
};

/// Fixed prefix of the wallet banner.
pub const WALLET_LABEL: &str = "Wallet: KES ";

/// Body shown when the seller has no packages.
pub const PLACEHOLDER_TEXT: &str = "No packages yet.";

/// Status to row-background lookup. Kept as data so new statuses only need a
/// new entry here; statuses outside the table get no color override.
pub const STATUS_COLORS: &[(&str, &str)] = &[
    ("created", "lightgray"),
    ("assigned", "lightblue"),
    ("delivered", "lightgreen"),
];

/// Resolves the row background for a status, if the lookup table has one.
pub fn status_background(status: &PackageStatus) -> Option<&'static str> {
    STATUS_COLORS
        .iter()
        .find(|(name, _)| *name == status.as_str())
        .map(|(_, color)| *color)
}

/// Builds the complete view for one tick from the fetched packages and wallet
/// balance. Empty package sets render as a placeholder, never as an empty
/// table.
pub fn render_dashboard(packages: &[Package], wallet: Decimal) -> DashboardView {
    let body = if packages.is_empty() {
        DashboardBody::Placeholder {
            message: PLACEHOLDER_TEXT.to_string(),
        }
    } else {
        DashboardBody::Table(TableView {
            columns: TABLE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: packages.iter().map(package_row).collect(),
            page_size: DASHBOARD_PAGE_SIZE,
        })
    };

    DashboardView {
        body,
        wallet_banner: format!("{WALLET_LABEL}{wallet}"),
    }
}

fn package_row(package: &Package) -> PackageRow {
    PackageRow {
        package_id: package.id,
        buyer_id: package.buyer_id,
        courier_id: package.courier_id,
        fc_id: package.fc_id,
        status: package.status.clone(),
        background: status_background(&package.status).map(str::to_string),
    }
}
