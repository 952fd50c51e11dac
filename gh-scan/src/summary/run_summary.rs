//! Run summary types.

use crate::scan::ScanOutcome;

/// Summary of a complete run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of repositories returned by the listing, after topic filtering.
    pub repositories_listed: usize,

    /// Number of repositories scanned.
    pub repositories_scanned: usize,

    /// Number of repositories whose metadata could not be fetched.
    pub repositories_invalid: usize,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the summary with a scan outcome.
    pub fn record_outcome(&mut self, outcome: &ScanOutcome) {
        self.repositories_scanned += 1;
        if !outcome.valid {
            self.repositories_invalid += 1;
        }
    }

    /// Returns true if any repository could not be scanned.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.repositories_invalid > 0
    }
}
