//! Ranking query
//!
//! Best/worst listings over every tracked term's aggregated total.

use std::sync::Arc;

use crate::app::aggregator::aggregate;
use crate::domain::entities::{RankDirection, RankedTerm};
use crate::domain::ports::{KarmaStore, StoreSnapshot};
use crate::error::KarmaError;

pub struct RankingQuery<S>
where
    S: KarmaStore,
{
    store: Arc<S>,
    default_limit: usize,
}

impl<S> RankingQuery<S>
where
    S: KarmaStore,
{
    pub fn new(store: Arc<S>, default_limit: usize) -> Self {
        Self {
            store,
            default_limit,
        }
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Top (`Best`) or bottom (`Worst`) terms by total score, ties by name ascending
    pub async fn list(
        &self,
        direction: RankDirection,
        limit: Option<usize>,
    ) -> Result<Vec<RankedTerm>, KarmaError> {
        let limit = limit.unwrap_or(self.default_limit);
        if limit == 0 {
            return Err(KarmaError::InvalidLimit(limit));
        }

        let StoreSnapshot { scores, links } = self.store.snapshot().await?;
        if scores.is_empty() {
            return Err(KarmaError::NoTermsTracked);
        }

        let mut ranked: Vec<RankedTerm> = scores
            .keys()
            .map(|term| {
                let term_links = links.get(term).map(Vec::as_slice).unwrap_or_default();
                RankedTerm {
                    term: term.clone(),
                    total_score: aggregate(term, term_links, &scores).total_score,
                }
            })
            .collect();

        ranked.sort_by(|a, b| direction.compare(a, b));
        ranked.truncate(limit);

        tracing::debug!(
            direction = %direction,
            limit = limit,
            tracked = scores.len(),
            "Ranking listed"
        );

        Ok(ranked)
    }
}
