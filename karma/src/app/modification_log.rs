//! Modification log
//!
//! Append-only audit trail of who changed which term, by how much and when.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::{
    validate_term_name, ModificationRecord, ModifierCount, ModifierId, NewModificationRecord,
    ScoreChange,
};
use crate::domain::ports::KarmaStore;
use crate::error::KarmaError;

pub struct ModificationLog<S>
where
    S: KarmaStore,
{
    store: Arc<S>,
}

impl<S> ModificationLog<S>
where
    S: KarmaStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn record(
        &self,
        term: &str,
        modifier: &ModifierId,
        change: ScoreChange,
        now: DateTime<Utc>,
    ) -> Result<ModificationRecord, KarmaError> {
        let record = NewModificationRecord {
            term: term.to_string(),
            modifier: modifier.clone(),
            change,
            created_at: now,
        };
        Ok(self.store.append_modification(&record).await?)
    }

    /// Every record for a term, oldest first
    pub async fn history(&self, term: &str) -> Result<Vec<ModificationRecord>, KarmaError> {
        validate_term_name(term)?;

        let records = self.store.modifications_of(term).await?;
        if records.is_empty() {
            return Err(KarmaError::NeverModified(term.to_string()));
        }
        Ok(records)
    }

    /// Modifier of every record for a term, oldest first, repeats kept
    pub async fn modifiers_of(&self, term: &str) -> Result<Vec<ModifierId>, KarmaError> {
        let records = self.history(term).await?;
        tracing::debug!(term = %term, records = records.len(), "Modifiers queried");
        Ok(records.into_iter().map(|r| r.modifier).collect())
    }

    /// Distinct modifiers with how often each changed the term, in order of first appearance
    pub async fn modifier_counts(&self, term: &str) -> Result<Vec<ModifierCount>, KarmaError> {
        Ok(count_modifiers(&self.modifiers_of(term).await?))
    }
}

pub fn count_modifiers(modifiers: &[ModifierId]) -> Vec<ModifierCount> {
    let mut counts: Vec<ModifierCount> = Vec::new();
    for modifier in modifiers {
        match counts.iter_mut().find(|c| &c.modifier == modifier) {
            Some(existing) => existing.count += 1,
            None => counts.push(ModifierCount {
                modifier: modifier.clone(),
                count: 1,
            }),
        }
    }
    counts
}
