//! Score aggregator
//!
//! A term's total is its own-score plus the own-scores of the terms it links to.
//! Totals are recomputed on every read.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{LinkedScore, TermScore};
use crate::domain::ports::KarmaStore;
use crate::error::KarmaError;

pub struct ScoreAggregator<S>
where
    S: KarmaStore,
{
    store: Arc<S>,
}

impl<S> ScoreAggregator<S>
where
    S: KarmaStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Current score of a term; unknown terms score 0 with no links
    pub async fn score_of(&self, term: &str) -> Result<TermScore, KarmaError> {
        let links = self.store.links_of(term).await?;

        let mut scores = HashMap::with_capacity(links.len() + 1);
        for name in std::iter::once(term).chain(links.iter().map(String::as_str)) {
            if !scores.contains_key(name) {
                let own = self.store.get_score(name).await?.unwrap_or(0);
                scores.insert(name.to_string(), own);
            }
        }

        Ok(aggregate(term, &links, &scores))
    }
}

/// Build a term's score from a snapshot of own-scores. Missing entries count as 0.
pub fn aggregate(term: &str, links: &[String], scores: &HashMap<String, i64>) -> TermScore {
    let own_of = |name: &str| scores.get(name).copied().unwrap_or(0);

    let linked: Vec<LinkedScore> = links
        .iter()
        .map(|target| LinkedScore {
            term: target.clone(),
            own_score: own_of(target),
        })
        .collect();

    let own_score = own_of(term);
    let total_score = own_score + linked.iter().map(|l| l.own_score).sum::<i64>();

    TermScore {
        term: term.to_string(),
        own_score,
        total_score,
        linked,
    }
}
