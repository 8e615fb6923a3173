//! Modification record domain entity
//!
//! Provides an audit trail for every score change in the engine.
//! Records are append-only and kept in insertion order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::term::ModifierId;

/// Unique identifier for a modification record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModificationRecordId(pub Uuid);

impl ModificationRecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ModificationRecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ModificationRecordId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ModificationRecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a single score modification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreChange {
    /// +1
    Increment,
    /// -1
    Decrement,
}

impl ScoreChange {
    pub fn delta(self) -> i64 {
        match self {
            ScoreChange::Increment => 1,
            ScoreChange::Decrement => -1,
        }
    }
}

impl std::fmt::Display for ScoreChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreChange::Increment => write!(f, "increment"),
            ScoreChange::Decrement => write!(f, "decrement"),
        }
    }
}

impl std::str::FromStr for ScoreChange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "increment" => Ok(ScoreChange::Increment),
            "decrement" => Ok(ScoreChange::Decrement),
            _ => Err(format!("Unknown score change: {}", s)),
        }
    }
}

/// A recorded score modification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModificationRecord {
    pub id: ModificationRecordId,
    pub term: String,
    pub modifier: ModifierId,
    pub change: ScoreChange,
    pub created_at: DateTime<Utc>,
}

impl ModificationRecord {
    pub fn delta(&self) -> i64 {
        self.change.delta()
    }
}

/// Data needed to append a modification record
#[derive(Debug, Clone)]
pub struct NewModificationRecord {
    pub term: String,
    pub modifier: ModifierId,
    pub change: ScoreChange,
    pub created_at: DateTime<Utc>,
}

/// How many times one modifier changed a term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierCount {
    pub modifier: ModifierId,
    pub count: usize,
}
