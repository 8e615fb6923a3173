//! Domain layer
//!
//! Contains pure scoring concepts with no storage dependencies.
//! - `entities`: Terms, modification records and ranking entries
//! - `ports`: Trait definitions for the persistence capability

pub mod entities;
pub mod ports;
