//! Cooldown guard
//!
//! Throttles repeated modification of the same term. A term may be modified again
//! once `now - last_modified >= window`. With no window every modification passes.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::app::term_locks::TermGuard;
use crate::domain::ports::KarmaStore;
use crate::error::KarmaError;

/// Outcome of a cooldown check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownDecision {
    Allowed,
    Denied { remaining: Duration },
}

impl CooldownDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, CooldownDecision::Allowed)
    }
}

pub struct CooldownGuard<S>
where
    S: KarmaStore,
{
    store: Arc<S>,
    window: Option<Duration>,
}

impl<S> CooldownGuard<S>
where
    S: KarmaStore,
{
    /// `window` of `None` (or a non-positive duration) disables the guard
    pub fn new(store: Arc<S>, window: Option<Duration>) -> Self {
        let window = window.filter(|w| *w > Duration::zero());
        Self { store, window }
    }

    pub fn window(&self) -> Option<Duration> {
        self.window
    }

    /// Check the term's cooldown and, if allowed, stamp it with `now`.
    ///
    /// Taking the term's guard makes the check and the stamp one step with respect
    /// to any other modification of the same term.
    pub async fn try_acquire(
        &self,
        lock: &TermGuard,
        now: DateTime<Utc>,
    ) -> Result<CooldownDecision, KarmaError> {
        let decision = self.check(lock, now).await?;
        if decision.is_allowed() {
            self.stamp(lock, now).await?;
        }
        Ok(decision)
    }

    /// First half of `try_acquire`, for callers that must apply their own write
    /// before the stamp. Nothing is written.
    pub async fn check(
        &self,
        lock: &TermGuard,
        now: DateTime<Utc>,
    ) -> Result<CooldownDecision, KarmaError> {
        self.remaining(lock.term(), now).await
    }

    /// Second half of `try_acquire`: start the term's window at `now`
    pub async fn stamp(&self, lock: &TermGuard, now: DateTime<Utc>) -> Result<(), KarmaError> {
        self.store.set_last_modified(lock.term(), now).await?;
        Ok(())
    }

    /// Read-only view of the cooldown state at `now`
    pub async fn remaining(
        &self,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<CooldownDecision, KarmaError> {
        let Some(window) = self.window else {
            return Ok(CooldownDecision::Allowed);
        };

        let Some(last) = self.store.get_last_modified(term).await? else {
            return Ok(CooldownDecision::Allowed);
        };

        match last.checked_add_signed(window) {
            Some(ready_at) if now >= ready_at => Ok(CooldownDecision::Allowed),
            Some(ready_at) => Ok(CooldownDecision::Denied {
                remaining: ready_at - now,
            }),
            None => Ok(CooldownDecision::Denied { remaining: window }),
        }
    }
}

/// Whole seconds left, rounded up so a denial never reports zero
pub fn remaining_secs(remaining: Duration) -> u64 {
    let millis = remaining.num_milliseconds().max(0) as u64;
    millis.div_ceil(1000).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryKarmaStore;
    use crate::app::term_locks::TermLocks;
    use crate::test_utils::at;

    fn guard(store: &Arc<InMemoryKarmaStore>, secs: i64) -> CooldownGuard<InMemoryKarmaStore> {
        CooldownGuard::new(store.clone(), Some(Duration::seconds(secs)))
    }

    #[tokio::test]
    async fn first_modification_is_allowed_and_stamped() {
        let store = Arc::new(InMemoryKarmaStore::new());
        let locks = TermLocks::new();
        let cooldown = guard(&store, 10);

        let lock = locks.acquire("foo").await;
        let decision = cooldown.try_acquire(&lock, at(0)).await.unwrap();

        assert!(decision.is_allowed());
        assert_eq!(store.get_last_modified("foo").await.unwrap(), Some(at(0)));
    }

    #[tokio::test]
    async fn denied_inside_window_without_restamping() {
        let store = Arc::new(InMemoryKarmaStore::new());
        let locks = TermLocks::new();
        let cooldown = guard(&store, 10);

        let lock = locks.acquire("foo").await;
        cooldown.try_acquire(&lock, at(0)).await.unwrap();
        let decision = cooldown.try_acquire(&lock, at(1)).await.unwrap();

        assert_eq!(
            decision,
            CooldownDecision::Denied {
                remaining: Duration::seconds(9)
            }
        );
        assert_eq!(store.get_last_modified("foo").await.unwrap(), Some(at(0)));
    }

    #[tokio::test]
    async fn allowed_once_window_elapsed() {
        let store = Arc::new(InMemoryKarmaStore::new());
        let locks = TermLocks::new();
        let cooldown = guard(&store, 10);

        let lock = locks.acquire("foo").await;
        cooldown.try_acquire(&lock, at(0)).await.unwrap();

        assert!(cooldown.try_acquire(&lock, at(10)).await.unwrap().is_allowed());
        assert_eq!(store.get_last_modified("foo").await.unwrap(), Some(at(10)));
    }

    #[tokio::test]
    async fn cooldown_is_per_term() {
        let store = Arc::new(InMemoryKarmaStore::new());
        let locks = TermLocks::new();
        let cooldown = guard(&store, 10);

        let foo = locks.acquire("foo").await;
        cooldown.try_acquire(&foo, at(0)).await.unwrap();

        let bar = locks.acquire("bar").await;
        assert!(cooldown.try_acquire(&bar, at(1)).await.unwrap().is_allowed());
    }

    #[tokio::test]
    async fn disabled_guard_always_allows() {
        let store = Arc::new(InMemoryKarmaStore::new());
        let locks = TermLocks::new();

        for window in [None, Some(Duration::zero())] {
            let cooldown = CooldownGuard::new(store.clone(), window);
            assert_eq!(cooldown.window(), None);

            let lock = locks.acquire("foo").await;
            assert!(cooldown.try_acquire(&lock, at(0)).await.unwrap().is_allowed());
            assert!(cooldown.try_acquire(&lock, at(0)).await.unwrap().is_allowed());
        }
    }

    #[test]
    fn remaining_secs_rounds_up() {
        assert_eq!(remaining_secs(Duration::seconds(9)), 9);
        assert_eq!(remaining_secs(Duration::milliseconds(8_001)), 9);
        assert_eq!(remaining_secs(Duration::milliseconds(1)), 1);
        assert_eq!(remaining_secs(Duration::zero()), 1);
    }

    #[tokio::test]
    async fn check_does_not_stamp() {
        let store = Arc::new(InMemoryKarmaStore::new());
        let locks = TermLocks::new();
        let cooldown = guard(&store, 10);

        let lock = locks.acquire("foo").await;
        assert!(cooldown.check(&lock, at(0)).await.unwrap().is_allowed());
        assert_eq!(store.get_last_modified("foo").await.unwrap(), None);

        cooldown.stamp(&lock, at(0)).await.unwrap();
        assert!(!cooldown.check(&lock, at(1)).await.unwrap().is_allowed());
    }

    #[tokio::test]
    async fn maximal_window_denies_instead_of_overflowing() {
        let store = Arc::new(InMemoryKarmaStore::new());
        let locks = TermLocks::new();
        let cooldown = CooldownGuard::new(store.clone(), Some(Duration::MAX));

        let lock = locks.acquire("foo").await;
        assert!(cooldown.try_acquire(&lock, at(0)).await.unwrap().is_allowed());
        assert_eq!(
            cooldown.try_acquire(&lock, at(1)).await.unwrap(),
            CooldownDecision::Denied {
                remaining: Duration::MAX
            }
        );
    }
}
