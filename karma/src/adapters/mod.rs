//! Adapters layer
//!
//! Implementations of port traits for concrete backends.

pub mod memory;

pub use memory::InMemoryKarmaStore;
