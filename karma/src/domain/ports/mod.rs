//! Domain ports (traits)
//!
//! Port traits define the capabilities the engine requires from its environment.
//! Adapters provide concrete implementations of these traits.

pub mod store;

pub use store::{KarmaStore, StoreSnapshot};
