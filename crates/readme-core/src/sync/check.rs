//! Check types for SyncEngine validation

use serde::{Deserialize, Serialize};

/// Status of the synchronization check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// The README region already mirrors the fragment
    InSync,
    /// The README exists but its region differs from the fragment
    OutOfDate,
    /// The README file does not exist yet
    Missing,
}

/// Report from a synchronization check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// Overall status of the check
    pub status: CheckStatus,
    /// README path checked
    pub readme: String,
    /// Additional messages about the check
    pub messages: Vec<String>,
}

impl CheckReport {
    /// Create a report for a README that needs no changes
    pub fn in_sync(readme: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::InSync,
            readme: readme.into(),
            messages: Vec::new(),
        }
    }

    /// Create a report for a README whose region differs
    pub fn out_of_date(readme: impl Into<String>, messages: Vec<String>) -> Self {
        Self {
            status: CheckStatus::OutOfDate,
            readme: readme.into(),
            messages,
        }
    }

    /// Create a report for a README that does not exist
    pub fn missing(readme: impl Into<String>) -> Self {
        let readme = readme.into();
        Self {
            status: CheckStatus::Missing,
            messages: vec![format!("{readme} does not exist")],
            readme,
        }
    }

    /// Whether a sync would leave the README untouched
    pub fn is_in_sync(&self) -> bool {
        self.status == CheckStatus::InSync
    }
}
