//! Karma engine
//!
//! Tracks integer reputation scores for arbitrary named terms, aggregates a term's
//! displayed total from the terms it links to, throttles repeated modification with
//! a per-term cooldown, records who modified what and answers best/worst rankings.
//! Uses hexagonal (ports & adapters) architecture: the engine only talks to the
//! `KarmaStore` port.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;


pub use adapters::InMemoryKarmaStore;
pub use app::{CommandOutcome, KarmaCommand, KarmaService};
pub use config::KarmaConfig;
pub use domain::entities::{
    LinkedScore, ModificationRecord, ModifierCount, ModifierId, RankDirection, RankedTerm,
    ScoreChange, TermScore,
};
pub use domain::ports::{KarmaStore, StoreSnapshot};
pub use error::{ConfigError, KarmaError, StoreError};
