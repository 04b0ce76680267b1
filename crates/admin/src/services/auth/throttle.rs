//! Per-email sign-in throttling.
//!
//! Uses a governor keyed rate limiter so repeated sign-in attempts against
//! one account map onto a deterministic "too many attempts" error instead of
//! a transport-level 429.

use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU64, Ordering};

use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

/// Maximum sign-in attempts per email per minute.
const MAX_ATTEMPTS_PER_MINUTE: u32 = 10;

/// How many checks pass between sweeps of replenished keys. Without the
/// sweep, an email-spraying client grows the state map without bound.
const PRUNE_EVERY: u64 = 1024;

/// Keyed rate limiter over lowercased email addresses.
pub struct LoginThrottle {
    limiter: DefaultKeyedRateLimiter<String>,
    checks: AtomicU64,
}

impl LoginThrottle {
    /// Create a throttle with the default quota.
    ///
    /// # Panics
    ///
    /// Does not panic: `MAX_ATTEMPTS_PER_MINUTE` is a non-zero constant.
    #[must_use]
    pub fn new() -> Self {
        let quota = Quota::per_minute(
            NonZeroU32::new(MAX_ATTEMPTS_PER_MINUTE).expect("attempt quota is non-zero"),
        );
        Self {
            limiter: RateLimiter::keyed(quota),
            checks: AtomicU64::new(0),
        }
    }

    /// Record an attempt for `email` and report whether it is allowed.
    ///
    /// Every `PRUNE_EVERY` checks the limiter drops state for keys whose
    /// quota has fully replenished; keys with outstanding attempts are kept.
    pub fn check(&self, email: &str) -> bool {
        if self.checks.fetch_add(1, Ordering::Relaxed) % PRUNE_EVERY == 0 {
            self.limiter.retain_recent();
        }
        self.limiter.check_key(&email.to_lowercase()).is_ok()
    }
}

impl Default for LoginThrottle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_initial_attempts() {
        let throttle = LoginThrottle::new();
        assert!(throttle.check("admin@basha-appliances.in"));
    }

    #[test]
    fn test_blocks_after_quota_exhausted() {
        let throttle = LoginThrottle::new();
        for _ in 0..MAX_ATTEMPTS_PER_MINUTE {
            let _ = throttle.check("attacker@example.com");
        }
        assert!(!throttle.check("attacker@example.com"));
    }

    #[test]
    fn test_keys_are_independent() {
        let throttle = LoginThrottle::new();
        for _ in 0..=MAX_ATTEMPTS_PER_MINUTE {
            let _ = throttle.check("attacker@example.com");
        }
        assert!(throttle.check("admin@basha-appliances.in"));
    }

    #[test]
    fn test_prune_keeps_exhausted_keys_blocked() {
        let throttle = LoginThrottle::new();
        for _ in 0..MAX_ATTEMPTS_PER_MINUTE {
            let _ = throttle.check("attacker@example.com");
        }
        assert!(!throttle.check("attacker@example.com"));

        // Spray enough distinct keys to trip the periodic sweep
        for i in 0..(PRUNE_EVERY + 10) {
            let _ = throttle.check(&format!("spray-{i}@example.com"));
        }

        assert!(!throttle.check("attacker@example.com"));
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let throttle = LoginThrottle::new();
        for _ in 0..MAX_ATTEMPTS_PER_MINUTE {
            let _ = throttle.check("Admin@Example.com");
        }
        assert!(!throttle.check("admin@example.com"));
    }
}
