//! Package domain model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a package.
///
/// The store owns the status vocabulary and may grow it over time, so unknown
/// values round-trip verbatim through [`PackageStatus::Other`] instead of
/// failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PackageStatus {
    Created,
    Assigned,
    Delivered,
    Other(String),
}

impl PackageStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PackageStatus::Created => "created",
            PackageStatus::Assigned => "assigned",
            PackageStatus::Delivered => "delivered",
            PackageStatus::Other(status) => status,
        }
    }
}

impl From<String> for PackageStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "created" => PackageStatus::Created,
            "assigned" => PackageStatus::Assigned,
            "delivered" => PackageStatus::Delivered,
            _ => PackageStatus::Other(value),
        }
    }
}

impl From<&str> for PackageStatus {
    fn from(value: &str) -> Self {
        PackageStatus::from(value.to_string())
    }
}

impl From<PackageStatus> for String {
    fn from(status: PackageStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A package row as read from the store. Read-only from this system's
/// perspective; the store creates and mutates packages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: i64,
    pub seller_id: i64,
    pub buyer_id: i64,
    /// Assigned later in the package lifecycle; absent until then.
    pub courier_id: Option<i64>,
    pub fc_id: i64,
    pub status: PackageStatus,
}
