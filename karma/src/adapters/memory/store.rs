//! In-memory adapter for KarmaStore

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{ModificationRecord, ModificationRecordId, NewModificationRecord};
use crate::domain::ports::{KarmaStore, StoreSnapshot};
use crate::error::StoreError;

#[derive(Debug, Default)]
struct State {
    scores: HashMap<String, i64>,
    last_modified: HashMap<String, DateTime<Utc>>,
    links: HashMap<String, Vec<String>>,
    modifications: HashMap<String, Vec<ModificationRecord>>,
}

/// Store backed by a single lock-protected map.
///
/// One lock guards every table, so `snapshot` never observes half of a write.
#[derive(Debug, Default, Clone)]
pub struct InMemoryKarmaStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryKarmaStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, State>, StoreError> {
        self.state
            .read()
            .map_err(|_| StoreError::Backend("in-memory store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, State>, StoreError> {
        self.state
            .write()
            .map_err(|_| StoreError::Backend("in-memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl KarmaStore for InMemoryKarmaStore {
    async fn get_score(&self, term: &str) -> Result<Option<i64>, StoreError> {
        Ok(self.read()?.scores.get(term).copied())
    }

    async fn add_to_score(&self, term: &str, delta: i64) -> Result<i64, StoreError> {
        let mut state = self.write()?;
        let score = state.scores.entry(term.to_string()).or_insert(0);
        *score += delta;
        Ok(*score)
    }

    async fn ensure_term(&self, term: &str) -> Result<(), StoreError> {
        self.write()?.scores.entry(term.to_string()).or_insert(0);
        Ok(())
    }

    async fn get_last_modified(&self, term: &str) -> Result<Option<DateTime<Utc>>, StoreError> {
        Ok(self.read()?.last_modified.get(term).copied())
    }

    async fn set_last_modified(&self, term: &str, at: DateTime<Utc>) -> Result<(), StoreError> {
        self.write()?.last_modified.insert(term.to_string(), at);
        Ok(())
    }

    async fn add_link(&self, source: &str, target: &str) -> Result<bool, StoreError> {
        let mut state = self.write()?;
        let targets = state.links.entry(source.to_string()).or_default();
        if targets.iter().any(|t| t == target) {
            return Ok(false);
        }
        targets.push(target.to_string());
        Ok(true)
    }

    async fn remove_link(&self, source: &str, target: &str) -> Result<bool, StoreError> {
        let mut state = self.write()?;
        let Some(targets) = state.links.get_mut(source) else {
            return Ok(false);
        };
        let before = targets.len();
        targets.retain(|t| t != target);
        let removed = targets.len() != before;
        if targets.is_empty() {
            state.links.remove(source);
        }
        Ok(removed)
    }

    async fn links_of(&self, source: &str) -> Result<Vec<String>, StoreError> {
        Ok(self.read()?.links.get(source).cloned().unwrap_or_default())
    }

    async fn snapshot(&self) -> Result<StoreSnapshot, StoreError> {
        let state = self.read()?;
        Ok(StoreSnapshot {
            scores: state.scores.clone(),
            links: state.links.clone(),
        })
    }

    async fn append_modification(
        &self,
        record: &NewModificationRecord,
    ) -> Result<ModificationRecord, StoreError> {
        let stored = ModificationRecord {
            id: ModificationRecordId::new(),
            term: record.term.clone(),
            modifier: record.modifier.clone(),
            change: record.change,
            created_at: record.created_at,
        };

        self.write()?
            .modifications
            .entry(record.term.clone())
            .or_default()
            .push(stored.clone());

        Ok(stored)
    }

    async fn modifications_of(&self, term: &str) -> Result<Vec<ModificationRecord>, StoreError> {
        Ok(self
            .read()?
            .modifications
            .get(term)
            .cloned()
            .unwrap_or_default())
    }
}
