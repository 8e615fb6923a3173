//! Mock implementations of port traits

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::adapters::InMemoryKarmaStore;
use crate::domain::entities::{ModificationRecord, NewModificationRecord};
use crate::domain::ports::{KarmaStore, StoreSnapshot};
use crate::error::StoreError;

// ============================================================================
// Failing Store
// ============================================================================

/// Store whose every call fails, for checking that outages are never read as "no data"
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingKarmaStore;

fn unavailable<T>() -> Result<T, StoreError> {
    Err(StoreError::Unavailable("mock store is down".to_string()))
}

#[async_trait]
impl KarmaStore for FailingKarmaStore {
    async fn get_score(&self, _term: &str) -> Result<Option<i64>, StoreError> {
        unavailable()
    }

    async fn add_to_score(&self, _term: &str, _delta: i64) -> Result<i64, StoreError> {
        unavailable()
    }

    async fn ensure_term(&self, _term: &str) -> Result<(), StoreError> {
        unavailable()
    }

    async fn get_last_modified(&self, _term: &str) -> Result<Option<DateTime<Utc>>, StoreError> {
        unavailable()
    }

    async fn set_last_modified(&self, _term: &str, _at: DateTime<Utc>) -> Result<(), StoreError> {
        unavailable()
    }

    async fn add_link(&self, _source: &str, _target: &str) -> Result<bool, StoreError> {
        unavailable()
    }

    async fn remove_link(&self, _source: &str, _target: &str) -> Result<bool, StoreError> {
        unavailable()
    }

    async fn links_of(&self, _source: &str) -> Result<Vec<String>, StoreError> {
        unavailable()
    }

    async fn snapshot(&self) -> Result<StoreSnapshot, StoreError> {
        unavailable()
    }

    async fn append_modification(
        &self,
        _record: &NewModificationRecord,
    ) -> Result<ModificationRecord, StoreError> {
        unavailable()
    }

    async fn modifications_of(&self, _term: &str) -> Result<Vec<ModificationRecord>, StoreError> {
        unavailable()
    }
}

// ============================================================================
// Flaky Store
// ============================================================================

/// In-memory store whose score writes can be switched to fail, for checking what
/// a half-applied modification leaves behind
#[derive(Debug, Default)]
pub struct FlakyKarmaStore {
    inner: InMemoryKarmaStore,
    fail_score_writes: AtomicBool,
}

impl FlakyKarmaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_score_writes(&self, fail: bool) {
        self.fail_score_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl KarmaStore for FlakyKarmaStore {
    async fn get_score(&self, term: &str) -> Result<Option<i64>, StoreError> {
        self.inner.get_score(term).await
    }

    async fn add_to_score(&self, term: &str, delta: i64) -> Result<i64, StoreError> {
        if self.fail_score_writes.load(Ordering::SeqCst) {
            return unavailable();
        }
        self.inner.add_to_score(term, delta).await
    }

    async fn ensure_term(&self, term: &str) -> Result<(), StoreError> {
        self.inner.ensure_term(term).await
    }

    async fn get_last_modified(&self, term: &str) -> Result<Option<DateTime<Utc>>, StoreError> {
        self.inner.get_last_modified(term).await
    }

    async fn set_last_modified(&self, term: &str, at: DateTime<Utc>) -> Result<(), StoreError> {
        self.inner.set_last_modified(term, at).await
    }

    async fn add_link(&self, source: &str, target: &str) -> Result<bool, StoreError> {
        self.inner.add_link(source, target).await
    }

    async fn remove_link(&self, source: &str, target: &str) -> Result<bool, StoreError> {
        self.inner.remove_link(source, target).await
    }

    async fn links_of(&self, source: &str) -> Result<Vec<String>, StoreError> {
        self.inner.links_of(source).await
    }

    async fn snapshot(&self) -> Result<StoreSnapshot, StoreError> {
        self.inner.snapshot().await
    }

    async fn append_modification(
        &self,
        record: &NewModificationRecord,
    ) -> Result<ModificationRecord, StoreError> {
        self.inner.append_modification(record).await
    }

    async fn modifications_of(&self, term: &str) -> Result<Vec<ModificationRecord>, StoreError> {
        self.inner.modifications_of(term).await
    }
}
