//! Result of scanning one repository.

use crate::github::Repository;

/// How a repository ended up being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanScope {
    /// A repository named with `--repo` or found in the current directory.
    SingleRepository,

    /// A repository returned by an organization or user listing.
    Listing,
}

/// Result of scanning a single repository.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Repository full name in "owner/name" format.
    pub full_name: String,

    /// Leading text naming the repository, possibly empty.
    pub header: String,

    /// Concatenated signal fragments.
    pub signals: String,

    /// Repository metadata, `None` if it could not be fetched.
    pub repository: Option<Repository>,

    /// False when the repository metadata could not be fetched.
    pub valid: bool,

    /// Path that produced this outcome.
    pub scope: ScanScope,
}

impl ScanOutcome {
    pub(crate) fn new(full_name: &str, header: String, scope: ScanScope) -> Self {
        Self {
            full_name: full_name.to_string(),
            header,
            signals: String::new(),
            repository: None,
            valid: false,
            scope,
        }
    }

    /// Header followed by every gathered signal.
    #[must_use]
    pub fn message(&self) -> String {
        format!("{}{}", self.header, self.signals)
    }

    /// Text printed for this repository in text mode, if any.
    ///
    /// Invalid repositories print nothing on their own, but still leave an
    /// empty line inside a listing.
    #[must_use]
    pub fn text_block(&self) -> Option<String> {
        match (self.valid, self.scope) {
            (true, _) => Some(format!("{}\n", self.message())),
            (false, ScanScope::Listing) => Some("\n".to_string()),
            (false, ScanScope::SingleRepository) => None,
        }
    }

    /// Signals on a single line, separated by commas.
    #[must_use]
    pub fn flattened(&self) -> String {
        let parts: Vec<&str> = self
            .signals
            .lines()
            .map(|line| line.trim().trim_start_matches("- "))
            .filter(|line| !line.is_empty())
            .collect();
        parts.join(", ").trim_end_matches(&[',', ' '][..]).to_string()
    }
}
