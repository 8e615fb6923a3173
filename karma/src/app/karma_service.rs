//! Karma service
//!
//! Single entry point for the command layer. Owns the term store, link graph,
//! ranking query and modification log over one shared store.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::app::command::{CommandOutcome, KarmaCommand};
use crate::app::link_graph::LinkGraph;
use crate::app::modification_log::{count_modifiers, ModificationLog};
use crate::app::ranking::RankingQuery;
use crate::app::term_store::TermStore;
use crate::config::KarmaConfig;
use crate::domain::entities::{
    ModificationRecord, ModifierCount, ModifierId, RankDirection, RankedTerm, TermScore,
};
use crate::domain::ports::KarmaStore;
use crate::error::KarmaError;

pub struct KarmaService<S>
where
    S: KarmaStore,
{
    terms: TermStore<S>,
    links: LinkGraph<S>,
    ranking: RankingQuery<S>,
    log: ModificationLog<S>,
    config: KarmaConfig,
}

impl<S> KarmaService<S>
where
    S: KarmaStore,
{
    pub fn new(store: Arc<S>, config: KarmaConfig) -> Self {
        Self {
            terms: TermStore::new(store.clone(), &config),
            links: LinkGraph::new(store.clone()),
            ranking: RankingQuery::new(store.clone(), config.default_list_limit),
            log: ModificationLog::new(store),
            config,
        }
    }

    pub fn config(&self) -> &KarmaConfig {
        &self.config
    }

    pub async fn increment(
        &self,
        term: &str,
        modifier: &ModifierId,
        now: DateTime<Utc>,
    ) -> Result<TermScore, KarmaError> {
        self.terms.increment(term, modifier, now).await
    }

    pub async fn decrement(
        &self,
        term: &str,
        modifier: &ModifierId,
        now: DateTime<Utc>,
    ) -> Result<TermScore, KarmaError> {
        self.terms.decrement(term, modifier, now).await
    }

    pub async fn check(&self, term: &str) -> Result<TermScore, KarmaError> {
        self.terms.check(term).await
    }

    pub async fn link(&self, source: &str, target: &str) -> Result<(), KarmaError> {
        self.links.link(source, target).await
    }

    pub async fn unlink(&self, source: &str, target: &str) -> Result<(), KarmaError> {
        self.links.unlink(source, target).await
    }

    pub async fn links_of(&self, term: &str) -> Result<Vec<String>, KarmaError> {
        self.links.links_of(term).await
    }

    pub async fn list(
        &self,
        direction: RankDirection,
        limit: Option<usize>,
    ) -> Result<Vec<RankedTerm>, KarmaError> {
        self.ranking.list(direction, limit).await
    }

    pub async fn modifiers_of(&self, term: &str) -> Result<Vec<ModifierId>, KarmaError> {
        self.log.modifiers_of(term).await
    }

    pub async fn modifier_counts(&self, term: &str) -> Result<Vec<ModifierCount>, KarmaError> {
        self.log.modifier_counts(term).await
    }

    pub async fn history(&self, term: &str) -> Result<Vec<ModificationRecord>, KarmaError> {
        self.log.history(term).await
    }

    /// Run one command. `modifier` and `now` only matter for increment/decrement.
    pub async fn execute(
        &self,
        command: KarmaCommand,
        modifier: &ModifierId,
        now: DateTime<Utc>,
    ) -> Result<CommandOutcome, KarmaError> {
        let result = self.dispatch(command, modifier, now).await;

        if let Err(KarmaError::StoreUnavailable(ref e)) = result {
            tracing::error!(error = %e, "Store failure while executing karma command");
        }

        result
    }

    async fn dispatch(
        &self,
        command: KarmaCommand,
        modifier: &ModifierId,
        now: DateTime<Utc>,
    ) -> Result<CommandOutcome, KarmaError> {
        match command {
            KarmaCommand::Increment { term } => Ok(CommandOutcome::Score(
                self.increment(&term, modifier, now).await?,
            )),
            KarmaCommand::Decrement { term } => Ok(CommandOutcome::Score(
                self.decrement(&term, modifier, now).await?,
            )),
            KarmaCommand::Check { term } => Ok(CommandOutcome::Score(self.check(&term).await?)),
            KarmaCommand::Link { source, target } => {
                self.link(&source, &target).await?;
                Ok(CommandOutcome::Linked { source, target })
            }
            KarmaCommand::Unlink { source, target } => {
                self.unlink(&source, &target).await?;
                Ok(CommandOutcome::Unlinked { source, target })
            }
            KarmaCommand::List { direction, limit } => {
                let entries = self.list(direction, limit).await?;
                Ok(CommandOutcome::Ranking { direction, entries })
            }
            KarmaCommand::Modified { term } => {
                let modifiers = self.modifiers_of(&term).await?;
                let counts = count_modifiers(&modifiers);
                Ok(CommandOutcome::Modifiers {
                    term,
                    modifiers,
                    counts,
                })
            }
        }
    }

    /// Run several commands from one request. Each runs independently, in order;
    /// a failure for one term never rolls back or blocks another.
    pub async fn execute_all(
        &self,
        commands: Vec<KarmaCommand>,
        modifier: &ModifierId,
        now: DateTime<Utc>,
    ) -> Vec<Result<CommandOutcome, KarmaError>> {
        let mut results = Vec::with_capacity(commands.len());
        for command in commands {
            results.push(self.execute(command, modifier, now).await);
        }
        results
    }
}
