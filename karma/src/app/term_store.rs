//! Term store
//!
//! Increment, decrement and check. Every score change flows through `modify`,
//! which holds the term's lock across the cooldown check, the score update, the
//! cooldown stamp and the audit append.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::app::aggregator::ScoreAggregator;
use crate::app::cooldown::{remaining_secs, CooldownDecision, CooldownGuard};
use crate::app::modification_log::ModificationLog;
use crate::app::term_locks::TermLocks;
use crate::config::KarmaConfig;
use crate::domain::entities::{ModifierId, ScoreChange, TermScore};
use crate::domain::ports::KarmaStore;
use crate::error::KarmaError;

pub struct TermStore<S>
where
    S: KarmaStore,
{
    store: Arc<S>,
    locks: TermLocks,
    cooldown: CooldownGuard<S>,
    log: ModificationLog<S>,
    aggregator: ScoreAggregator<S>,
}

impl<S> TermStore<S>
where
    S: KarmaStore,
{
    pub fn new(store: Arc<S>, config: &KarmaConfig) -> Self {
        Self {
            locks: TermLocks::new(),
            cooldown: CooldownGuard::new(store.clone(), config.cooldown()),
            log: ModificationLog::new(store.clone()),
            aggregator: ScoreAggregator::new(store.clone()),
            store,
        }
    }

    pub async fn increment(
        &self,
        term: &str,
        modifier: &ModifierId,
        now: DateTime<Utc>,
    ) -> Result<TermScore, KarmaError> {
        self.modify(term, modifier, ScoreChange::Increment, now).await
    }

    pub async fn decrement(
        &self,
        term: &str,
        modifier: &ModifierId,
        now: DateTime<Utc>,
    ) -> Result<TermScore, KarmaError> {
        self.modify(term, modifier, ScoreChange::Decrement, now).await
    }

    /// Read-only; never touches the cooldown timer or the log
    pub async fn check(&self, term: &str) -> Result<TermScore, KarmaError> {
        self.aggregator.score_of(term).await
    }

    /// Apply one score change with cooldown enforcement and audit logging.
    /// A denied change leaves the score, the timer and the log untouched.
    pub async fn modify(
        &self,
        term: &str,
        modifier: &ModifierId,
        change: ScoreChange,
        now: DateTime<Utc>,
    ) -> Result<TermScore, KarmaError> {
        let lock = self.locks.acquire(term).await;

        let decision = self.cooldown.check(&lock, now).await?;
        if let CooldownDecision::Denied { remaining } = decision {
            let remaining_secs = remaining_secs(remaining);
            tracing::debug!(
                term = %term,
                modifier = %modifier,
                remaining_secs = remaining_secs,
                "Modification suppressed by cooldown"
            );
            return Err(KarmaError::CooldownActive {
                term: term.to_string(),
                remaining_secs,
            });
        }

        // A failed score write must not start the cooldown window
        let own_score = self.store.add_to_score(term, change.delta()).await?;
        self.cooldown.stamp(&lock, now).await?;
        self.log.record(term, modifier, change, now).await?;
        let score = self.aggregator.score_of(term).await?;
        drop(lock);

        tracing::info!(
            term = %term,
            modifier = %modifier,
            delta = change.delta(),
            own_score = own_score,
            total_score = score.total_score,
            "Term modified"
        );

        Ok(score)
    }
}
