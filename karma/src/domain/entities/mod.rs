//! Domain entities
//!
//! Plain data the engine passes to and returns from the command layer.

pub mod modification;
pub mod ranking;
pub mod term;

pub use modification::{
    ModificationRecord, ModificationRecordId, ModifierCount, NewModificationRecord, ScoreChange,
};
pub use ranking::{RankDirection, RankedTerm};
pub use term::{validate_term_name, LinkedScore, ModifierId, TermScore};
