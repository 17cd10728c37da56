//! Sentinel marker definitions

use crate::error::{Error, Result};

/// Default opening marker line.
pub const DEFAULT_START: &str = "<!-- _README:START -->";

/// Default closing marker line.
pub const DEFAULT_END: &str = "<!-- _README:END -->";

/// The pair of literal marker strings bounding the managed region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentinels {
    /// Text that marks the first line of a region.
    pub start: String,
    /// Text that marks the last line of a region.
    pub end: String,
}

impl Default for Sentinels {
    fn default() -> Self {
        Self {
            start: DEFAULT_START.to_string(),
            end: DEFAULT_END.to_string(),
        }
    }
}

impl Sentinels {
    /// Create a sentinel pair, validating it.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSentinel` if either marker is empty, spans more
    /// than one line, or both markers are identical.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self> {
        let sentinels = Self {
            start: start.into(),
            end: end.into(),
        };
        sentinels.validate()?;
        Ok(sentinels)
    }

    /// Check that the pair can delimit a region unambiguously.
    pub fn validate(&self) -> Result<()> {
        for (name, marker) in [("start", &self.start), ("end", &self.end)] {
            if marker.trim().is_empty() {
                return Err(Error::InvalidSentinel {
                    reason: format!("{name} sentinel is empty"),
                });
            }
            if marker.contains('\n') || marker.contains('\r') {
                return Err(Error::InvalidSentinel {
                    reason: format!("{name} sentinel must be a single line"),
                });
            }
        }
        if self.start == self.end {
            return Err(Error::InvalidSentinel {
                reason: "start and end sentinels are identical".to_string(),
            });
        }
        Ok(())
    }

    pub(crate) fn opens(&self, line: &str) -> bool {
        line.contains(self.start.as_str())
    }

    pub(crate) fn closes(&self, line: &str) -> bool {
        line.contains(self.end.as_str())
    }

    /// Whether `text` contains either marker anywhere.
    pub fn occurs_in(&self, text: &str) -> bool {
        text.contains(self.start.as_str()) || text.contains(self.end.as_str())
    }
}
