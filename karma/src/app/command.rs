//! Commands the external dispatch layer hands to the engine
//!
//! Parsing chat text into these is the caller's job; the engine never sees text.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ModifierCount, ModifierId, RankDirection, RankedTerm, TermScore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum KarmaCommand {
    /// `foo++`
    Increment { term: String },

    /// `foo--`
    Decrement { term: String },

    /// `foo~~`
    Check { term: String },

    /// `foo += bar`
    Link { source: String, target: String },

    /// `foo -= bar`
    Unlink { source: String, target: String },

    /// `karma best|worst [N]`
    List {
        direction: RankDirection,
        limit: Option<usize>,
    },

    /// `karma modified foo`
    Modified { term: String },
}

impl KarmaCommand {
    pub fn increment(term: impl Into<String>) -> Self {
        KarmaCommand::Increment { term: term.into() }
    }

    pub fn decrement(term: impl Into<String>) -> Self {
        KarmaCommand::Decrement { term: term.into() }
    }

    pub fn check(term: impl Into<String>) -> Self {
        KarmaCommand::Check { term: term.into() }
    }

    pub fn link(source: impl Into<String>, target: impl Into<String>) -> Self {
        KarmaCommand::Link {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn unlink(source: impl Into<String>, target: impl Into<String>) -> Self {
        KarmaCommand::Unlink {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn list(direction: RankDirection, limit: Option<usize>) -> Self {
        KarmaCommand::List { direction, limit }
    }

    pub fn modified(term: impl Into<String>) -> Self {
        KarmaCommand::Modified { term: term.into() }
    }

    /// Whether executing this command can change engine state
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            KarmaCommand::Increment { .. }
                | KarmaCommand::Decrement { .. }
                | KarmaCommand::Link { .. }
                | KarmaCommand::Unlink { .. }
        )
    }
}

/// Structured result of a successful command, for the caller to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommandOutcome {
    Score(TermScore),
    Linked {
        source: String,
        target: String,
    },
    Unlinked {
        source: String,
        target: String,
    },
    Ranking {
        direction: RankDirection,
        entries: Vec<RankedTerm>,
    },
    Modifiers {
        term: String,
        modifiers: Vec<ModifierId>,
        counts: Vec<ModifierCount>,
    },
}
