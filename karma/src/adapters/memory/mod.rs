//! In-memory adapters
//!
//! Process-local implementation of the store port. Suitable for a single engine
//! instance and for tests; state is lost on restart.

pub mod store;

pub use store::InMemoryKarmaStore;
