//! Link graph
//!
//! Directed edges between terms. A term's total includes the own-score of every
//! term it links to, one hop only, so cycles and self-links are harmless.

use std::sync::Arc;

use crate::domain::entities::validate_term_name;
use crate::domain::ports::KarmaStore;
use crate::error::KarmaError;

pub struct LinkGraph<S>
where
    S: KarmaStore,
{
    store: Arc<S>,
}

impl<S> LinkGraph<S>
where
    S: KarmaStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Link `target` into `source`'s total. Both terms become tracked.
    pub async fn link(&self, source: &str, target: &str) -> Result<(), KarmaError> {
        validate_term_name(source)?;
        validate_term_name(target)?;

        self.store.ensure_term(source).await?;
        self.store.ensure_term(target).await?;

        if !self.store.add_link(source, target).await? {
            return Err(KarmaError::AlreadyLinked {
                source_term: source.to_string(),
                target: target.to_string(),
            });
        }

        tracing::info!(source = %source, target = %target, "Terms linked");
        Ok(())
    }

    pub async fn unlink(&self, source: &str, target: &str) -> Result<(), KarmaError> {
        validate_term_name(source)?;
        validate_term_name(target)?;

        if !self.store.remove_link(source, target).await? {
            return Err(KarmaError::NotLinked {
                source_term: source.to_string(),
                target: target.to_string(),
            });
        }

        tracing::info!(source = %source, target = %target, "Terms unlinked");
        Ok(())
    }

    /// Targets of `term` in the order they were linked
    pub async fn links_of(&self, term: &str) -> Result<Vec<String>, KarmaError> {
        Ok(self.store.links_of(term).await?)
    }
}
