//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::adapters::InMemoryKarmaStore;
use crate::domain::entities::ModifierId;
use crate::domain::ports::KarmaStore;

/// Own-scores used by the ranking scenarios: one=3, two=2, three=1, four=0, five=-1
pub const SAMPLE_SCORES: &[(&str, i64)] = &[
    ("one", 3),
    ("two", 2),
    ("three", 1),
    ("four", 0),
    ("five", -1),
];

/// A fixed instant `secs` seconds after a common epoch, so cooldown tests are deterministic
pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap() + chrono::Duration::seconds(secs)
}

/// The default test modifier
pub fn user() -> ModifierId {
    ModifierId::new("U-test")
}

pub fn user_named(name: &str) -> ModifierId {
    ModifierId::new(format!("U-{}", name))
}

/// In-memory store pre-populated with own-scores
pub async fn store_with_scores(scores: &[(&str, i64)]) -> Arc<InMemoryKarmaStore> {
    let store = Arc::new(InMemoryKarmaStore::new());
    for (term, score) in scores {
        store.ensure_term(term).await.unwrap();
        store.add_to_score(term, *score).await.unwrap();
    }
    store
}

/// Route engine logs to the test harness; set `RUST_LOG=karma_core=debug` to see them
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
