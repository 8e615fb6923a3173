//! Application layer
//!
//! Contains the engine's components and the service that composes them.
//! Components share one store and coordinate per-term access through `TermLocks`.

pub mod aggregator;
pub mod command;
pub mod cooldown;
pub mod karma_service;
pub mod link_graph;
pub mod modification_log;
pub mod ranking;
pub mod term_locks;
pub mod term_store;

pub use aggregator::{aggregate, ScoreAggregator};
pub use command::{CommandOutcome, KarmaCommand};
pub use cooldown::{CooldownDecision, CooldownGuard};
pub use karma_service::KarmaService;
pub use link_graph::LinkGraph;
pub use modification_log::{count_modifiers, ModificationLog};
pub use ranking::RankingQuery;
pub use term_locks::{TermGuard, TermLocks};
pub use term_store::TermStore;
