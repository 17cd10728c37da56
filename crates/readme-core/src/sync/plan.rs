//! The computed result of a sync before it is written.

use similar::TextDiff;

/// Current and desired README content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPlan {
    /// README path, relative to the root
    pub readme: String,
    /// Fragment path, relative to the root
    pub fragment: String,
    /// Whether the README exists on disk
    pub readme_exists: bool,
    /// README content as it is now (empty when missing)
    pub current: String,
    /// README content after the splice
    pub desired: String,
}

impl SyncPlan {
    /// Whether applying the plan would leave the README unchanged.
    pub fn is_noop(&self) -> bool {
        self.readme_exists && self.current == self.desired
    }

    /// Unified diff from the current README to the synced one.
    ///
    /// Empty when the plan is a no-op.
    pub fn diff(&self) -> String {
        if self.is_noop() {
            return String::new();
        }
        TextDiff::from_lines(&self.current, &self.desired)
            .unified_diff()
            .context_radius(3)
            .header(&format!("a/{}", self.readme), &format!("b/{}", self.readme))
            .to_string()
    }

    /// Number of changed lines (insertions plus deletions).
    pub fn changed_lines(&self) -> usize {
        TextDiff::from_lines(&self.current, &self.desired)
            .iter_all_changes()
            .filter(|change| change.tag() != similar::ChangeTag::Equal)
            .count()
    }
}
