//! Sliding-window login throttle.
//!
//! Tracks failed login attempts per email. Once the configured number of
//! failures occurs within the window, further attempts are rejected until
//! the window slides past the oldest failure.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use tracing::warn;

use neighborly_core::config::auth::AuthConfig;
use neighborly_core::error::AppError;
use neighborly_core::result::AppResult;

/// In-process login attempt throttle.
#[derive(Debug)]
pub struct LoginThrottle {
    /// Failed attempt timestamps keyed by lowercased email.
    attempts: DashMap<String, Vec<Instant>>,
    /// Maximum failures within the window.
    max_attempts: usize,
    /// Window length.
    window: Duration,
}

impl LoginThrottle {
    /// Create a throttle from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            attempts: DashMap::new(),
            max_attempts: config.max_failed_attempts as usize,
            window: Duration::from_secs(config.attempt_window_minutes * 60),
        }
    }

    /// Check whether a login attempt for this email is currently allowed.
    pub fn check(&self, email: &str) -> AppResult<()> {
        let key = email.to_lowercase();
        if let Some(mut entry) = self.attempts.get_mut(&key) {
            // Near process start the window may reach before the clock's
            // epoch; no cutoff means nothing has expired yet.
            if let Some(cutoff) = Instant::now().checked_sub(self.window) {
                entry.retain(|t| *t > cutoff);
            }
            if entry.len() >= self.max_attempts {
                warn!(email = %key, "Login throttled: too many failed attempts");
                return Err(AppError::rate_limit(
                    "Too many failed login attempts; try again later",
                ));
            }
        }
        Ok(())
    }

    /// Record a failed login attempt.
    pub fn record_failure(&self, email: &str) {
        let key = email.to_lowercase();
        self.attempts.entry(key).or_default().push(Instant::now());
    }

    /// Clear the failure history after a successful login.
    pub fn record_success(&self, email: &str) {
        self.attempts.remove(&email.to_lowercase());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn throttle() -> LoginThrottle {
        LoginThrottle::new(&AuthConfig {
            max_failed_attempts: 3,
            attempt_window_minutes: 5,
            ..AuthConfig::default()
        })
    }

    #[test]
    fn test_allows_until_limit() {
        let throttle = throttle();
        for _ in 0..3 {
            assert!(throttle.check("ana@example.com").is_ok());
            throttle.record_failure("ana@example.com");
        }
        assert!(throttle.check("ana@example.com").is_err());
    }

    #[test]
    fn test_email_case_insensitive() {
        let throttle = throttle();
        for _ in 0..3 {
            throttle.record_failure("Ana@Example.com");
        }
        assert!(throttle.check("ana@example.com").is_err());
    }

    #[test]
    fn test_window_longer_than_uptime() {
        // A window reaching past the monotonic clock's start must not
        // panic; it just keeps every recorded failure.
        let throttle = LoginThrottle::new(&AuthConfig {
            max_failed_attempts: 3,
            attempt_window_minutes: 1_000_000_000,
            ..AuthConfig::default()
        });
        throttle.record_failure("ana@example.com");
        assert!(throttle.check("ana@example.com").is_ok());
    }

    #[test]
    fn test_success_resets() {
        let throttle = throttle();
        for _ in 0..3 {
            throttle.record_failure("ana@example.com");
        }
        throttle.record_success("ana@example.com");
        assert!(throttle.check("ana@example.com").is_ok());
    }
}
