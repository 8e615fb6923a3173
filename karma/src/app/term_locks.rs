//! Per-term locks
//!
//! Every modification of a term runs while holding that term's lock, so the
//! cooldown check, the timestamp update and the score update cannot interleave
//! with another modification of the same term. Different terms never contend.
//! A term's entry is dropped again once nobody holds or waits for it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

type LockMap = HashMap<String, Arc<AsyncMutex<()>>>;

#[derive(Debug, Default)]
pub struct TermLocks {
    locks: Arc<Mutex<LockMap>>,
}

/// Proof that the caller holds the lock for `term`
#[derive(Debug)]
pub struct TermGuard {
    term: String,
    guard: Option<OwnedMutexGuard<()>>,
    locks: Arc<Mutex<LockMap>>,
}

impl TermGuard {
    pub fn term(&self) -> &str {
        &self.term
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        // Release first so the map entry is the only remaining reference when idle
        self.guard.take();

        let mut locks = lock_map(&self.locks);
        let idle = locks
            .get(&self.term)
            .is_some_and(|lock| Arc::strong_count(lock) == 1);
        if idle {
            locks.remove(&self.term);
        }
    }
}

// Entries are only inserted or removed whole, so a poisoned map is still usable.
fn lock_map(locks: &Mutex<LockMap>) -> MutexGuard<'_, LockMap> {
    locks.lock().unwrap_or_else(|e| e.into_inner())
}

impl TermLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `term`
    pub async fn acquire(&self, term: &str) -> TermGuard {
        let lock = lock_map(&self.locks)
            .entry(term.to_string())
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone();

        TermGuard {
            term: term.to_string(),
            guard: Some(lock.lock_owned().await),
            locks: self.locks.clone(),
        }
    }

    /// Number of terms currently held or waited on
    pub fn active(&self) -> usize {
        lock_map(&self.locks).len()
    }
}
