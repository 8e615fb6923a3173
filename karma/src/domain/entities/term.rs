//! Term domain entity
//!
//! A term is any string a user scores. Names are kept exactly as supplied.

use serde::{Deserialize, Serialize};

use crate::error::KarmaError;

/// Opaque identity of whoever modified a term.
///
/// Resolving it to a display name is left to the command layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModifierId(pub String);

impl ModifierId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModifierId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ModifierId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ModifierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Own-score of a term reached through a link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedScore {
    pub term: String,
    pub own_score: i64,
}

/// Everything the command layer needs to render a term's score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermScore {
    pub term: String,
    pub own_score: i64,
    /// Own-score plus the own-scores of every directly linked term
    pub total_score: i64,
    /// Linked terms in link-insertion order
    pub linked: Vec<LinkedScore>,
}

impl TermScore {
    pub fn has_links(&self) -> bool {
        !self.linked.is_empty()
    }
}

/// Reject empty or whitespace-only term names
pub fn validate_term_name(term: &str) -> Result<(), KarmaError> {
    if term.trim().is_empty() {
        return Err(KarmaError::InvalidTermName(term.to_string()));
    }
    Ok(())
}
