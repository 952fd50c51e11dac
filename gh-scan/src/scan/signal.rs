//! Text fragments for scan signals.

use crate::config::ScanConfig;

/// One observation about a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// README lookup answered, `present` is false for a 404.
    Readme { present: bool },

    /// The repository has a description.
    Description,

    /// The repository has at least one topic.
    Topics,

    /// Number of visible collaborators.
    Collaborators(usize),

    /// Community profile health percentage.
    CommunityScore(i64),
}

impl Signal {
    /// Renders the signal as a compact fragment or a verbose bullet.
    #[must_use]
    pub fn render(self, verbose: bool) -> String {
        if verbose {
            format!("\n  - {}", self.verbose_text())
        } else {
            self.compact_text()
        }
    }

    fn compact_text(self) -> String {
        match self {
            Self::Readme { present: true } => "README ☑️, ".to_string(),
            Self::Readme { present: false } => "no README 😇, ".to_string(),
            Self::Description => "description ☑️, ".to_string(),
            Self::Topics => "topics ☑️, ".to_string(),
            Self::Collaborators(count) => format!("{count} {}, ", collaborator_noun(count)),
            Self::CommunityScore(score) => format!("community profile score: {score} 💯"),
        }
    }

    fn verbose_text(self) -> String {
        match self {
            Self::Readme { present: true } => "a README ☑️".to_string(),
            Self::Readme { present: false } => "no README 😇".to_string(),
            Self::Description => "a description ☑️".to_string(),
            Self::Topics => "topics ☑️".to_string(),
            Self::Collaborators(count) => format!("{count} {}", collaborator_noun(count)),
            Self::CommunityScore(score) => format!("a community profile score of {score} 💯"),
        }
    }
}

fn collaborator_noun(count: usize) -> &'static str {
    if count <= 1 {
        "collaborator 👤"
    } else {
        "collaborators 👥"
    }
}

/// Leading text of a repository block.
///
/// Verbose output always names the repository. Compact output only does so
/// when the repository was not inferred from the current directory.
#[must_use]
pub fn header(full_name: &str, config: &ScanConfig) -> String {
    if config.verbose() {
        format!("{full_name} has: ")
    } else if config.target().is_explicit() {
        format!("{full_name}: ")
    } else {
        String::new()
    }
}
