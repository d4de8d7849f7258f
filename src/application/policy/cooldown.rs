//! Per-user, per-command fixed-window cooldown

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Uses allowed per window
const QUOTA: u32 = 1;

/// Usage state for one (user, command) key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownBucket {
    pub window_start: Instant,
    pub uses_in_window: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownOutcome {
    Allowed,
    Denied { retry_after: Duration },
}

impl CooldownOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, CooldownOutcome::Allowed)
    }
}

/// Fixed-window limiter keyed by (user id, command name).
///
/// Buckets are created on first use and live for the process lifetime.
/// Administrators bypass the limiter entirely and never get a bucket.
pub struct CooldownPolicy {
    window: Duration,
    buckets: Mutex<HashMap<(String, String), CooldownBucket>>,
}

impl CooldownPolicy {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            buckets: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_secs(window_secs: u64) -> Self {
        Self::new(Duration::from_secs(window_secs))
    }

    pub fn check_and_consume(&self, user_id: &str, command: &str, is_admin: bool, now: Instant) -> CooldownOutcome {
        if is_admin {
            return CooldownOutcome::Allowed;
        }

        let mut buckets = self.buckets.lock().unwrap_or_else(PoisonError::into_inner);
        let key = (user_id.to_string(), command.to_string());

        if let Some(bucket) = buckets.get(&key) {
            let elapsed = now.saturating_duration_since(bucket.window_start);
            // A denied attempt leaves the bucket untouched
            if elapsed < self.window && bucket.uses_in_window >= QUOTA {
                return CooldownOutcome::Denied {
                    retry_after: self.window - elapsed,
                };
            }
        }

        buckets.insert(key, CooldownBucket {
            window_start: now,
            uses_in_window: 1,
        });
        CooldownOutcome::Allowed
    }

    pub fn bucket(&self, user_id: &str, command: &str) -> Option<CooldownBucket> {
        let buckets = self.buckets.lock().unwrap_or_else(PoisonError::into_inner);
        buckets.get(&(user_id.to_string(), command.to_string())).copied()
    }

    /// Number of (user, command) keys seen so far
    pub fn len(&self) -> usize {
        self.buckets.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CooldownPolicy {
    fn default() -> Self {
        Self::from_secs(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn retry_after(outcome: CooldownOutcome) -> Duration {
        match outcome {
            CooldownOutcome::Denied { retry_after } => retry_after,
            CooldownOutcome::Allowed => panic!("expected denial"),
        }
    }

    #[test]
    fn test_first_use_allowed_second_denied() {
        let policy = CooldownPolicy::from_secs(3);
        let t0 = Instant::now();

        assert_eq!(policy.check_and_consume("alice", "date", false, t0), CooldownOutcome::Allowed);
        let retry = retry_after(policy.check_and_consume("alice", "date", false, t0 + Duration::from_secs(1)));
        assert_eq!(retry, Duration::from_secs(2));
    }

    #[test]
    fn test_retry_after_decreases_and_denial_does_not_consume() {
        let policy = CooldownPolicy::from_secs(3);
        let t0 = Instant::now();
        policy.check_and_consume("alice", "date", false, t0);

        let mut last = Duration::MAX;
        for ms in [100, 900, 1500, 2999] {
            let retry = retry_after(policy.check_and_consume("alice", "date", false, t0 + Duration::from_millis(ms)));
            assert!(retry < last);
            last = retry;

            let bucket = policy.bucket("alice", "date").unwrap();
            assert_eq!(bucket.window_start, t0);
            assert_eq!(bucket.uses_in_window, 1);
        }
    }

    #[test]
    fn test_window_reopens_after_cooldown() {
        let policy = CooldownPolicy::from_secs(3);
        let t0 = Instant::now();
        policy.check_and_consume("alice", "date", false, t0);

        let t1 = t0 + Duration::from_secs(3);
        assert!(policy.check_and_consume("alice", "date", false, t1).is_allowed());
        assert_eq!(policy.bucket("alice", "date").unwrap().window_start, t1);
        assert!(!policy.check_and_consume("alice", "date", false, t1 + Duration::from_millis(10)).is_allowed());
    }

    #[test]
    fn test_buckets_are_per_command_and_per_user() {
        let policy = CooldownPolicy::from_secs(3);
        let t0 = Instant::now();

        assert!(policy.check_and_consume("alice", "date", false, t0).is_allowed());
        assert!(policy.check_and_consume("alice", "food", false, t0).is_allowed());
        assert!(policy.check_and_consume("bob", "date", false, t0).is_allowed());
        assert!(!policy.check_and_consume("alice", "date", false, t0).is_allowed());
        assert_eq!(policy.len(), 3);
    }

    #[test]
    fn test_admin_bypasses_without_bucket() {
        let policy = CooldownPolicy::from_secs(3);
        let t0 = Instant::now();

        for _ in 0..10 {
            assert!(policy.check_and_consume("root", "date", true, t0).is_allowed());
        }
        assert!(policy.bucket("root", "date").is_none());
        assert!(policy.is_empty());
    }

    #[test]
    fn test_zero_window_never_denies() {
        let policy = CooldownPolicy::new(Duration::ZERO);
        let t0 = Instant::now();
        assert!(policy.check_and_consume("alice", "date", false, t0).is_allowed());
        assert!(policy.check_and_consume("alice", "date", false, t0).is_allowed());
    }
}
