//! Persistence port
//!
//! The engine only needs a handful of key-value primitives: integer scores with
//! atomic add, a timestamp per term, ordered link sets, an enumeration of every
//! known term and an append-only modification log. Any backend offering these
//! (including a plain in-memory map) can host the engine.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{ModificationRecord, NewModificationRecord};
use crate::error::StoreError;

/// Every known term with its own-score, and every non-empty link set, read at one
/// instant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub scores: HashMap<String, i64>,
    pub links: HashMap<String, Vec<String>>,
}

#[async_trait]
pub trait KarmaStore: Send + Sync {
    // Scores

    /// Own-score of a term, `None` if the term was never registered
    async fn get_score(&self, term: &str) -> Result<Option<i64>, StoreError>;

    /// Atomically add `delta` to a term's own-score, registering it at 0 first if needed.
    /// Returns the new own-score.
    async fn add_to_score(&self, term: &str, delta: i64) -> Result<i64, StoreError>;

    /// Register a term with own-score 0 unless it already exists
    async fn ensure_term(&self, term: &str) -> Result<(), StoreError>;

    // Cooldown timestamps

    async fn get_last_modified(&self, term: &str) -> Result<Option<DateTime<Utc>>, StoreError>;

    async fn set_last_modified(&self, term: &str, at: DateTime<Utc>) -> Result<(), StoreError>;

    // Links

    /// Add `target` to the link set of `source`. Returns false if it was already present.
    async fn add_link(&self, source: &str, target: &str) -> Result<bool, StoreError>;

    /// Remove `target` from the link set of `source`. Returns false if it was absent.
    async fn remove_link(&self, source: &str, target: &str) -> Result<bool, StoreError>;

    /// Targets linked from `source`, in insertion order
    async fn links_of(&self, source: &str) -> Result<Vec<String>, StoreError>;

    /// Scores and links together. A link visible here implies both of its terms are
    /// visible too.
    async fn snapshot(&self) -> Result<StoreSnapshot, StoreError>;

    // Modification log

    async fn append_modification(
        &self,
        record: &NewModificationRecord,
    ) -> Result<ModificationRecord, StoreError>;

    /// Records for a term in insertion order
    async fn modifications_of(&self, term: &str) -> Result<Vec<ModificationRecord>, StoreError>;
}
