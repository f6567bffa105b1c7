use bughive_errors::AppError;
use dashmap::DashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub const MAX_VOTES_PER_MINUTE: u32 = 30;
pub const MAX_VOTES_PER_HOUR: u32 = 300;
const CLEANUP_INTERVAL_SECS: u64 = 300;

#[derive(Clone)]
struct RequestRecord {
    minute_count: u32,
    hour_count: u32,
    minute_start: Instant,
    hour_start: Instant,
}

impl RequestRecord {
    fn starting_at(now: Instant) -> Self {
        Self {
            minute_count: 0,
            hour_count: 0,
            minute_start: now,
            hour_start: now,
        }
    }
}

/// Fixed-window limiter keyed by caller name.
#[derive(Clone)]
pub struct RateLimiter {
    requests: Arc<DashMap<String, RequestRecord>>,
    last_cleanup: Arc<Mutex<Instant>>,
    per_minute: u32,
    per_hour: u32,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::with_limits(MAX_VOTES_PER_MINUTE, MAX_VOTES_PER_HOUR)
    }

    pub fn with_limits(per_minute: u32, per_hour: u32) -> Self {
        Self {
            requests: Arc::new(DashMap::new()),
            last_cleanup: Arc::new(Mutex::new(Instant::now())),
            per_minute,
            per_hour,
        }
    }

    pub fn check_rate_limit(&self, caller: &str) -> Result<(), RateLimitError> {
        self.check_at(caller, Instant::now())
    }

    fn check_at(&self, caller: &str, now: Instant) -> Result<(), RateLimitError> {
        self.maybe_cleanup(now);

        let mut record = self
            .requests
            .entry(caller.to_string())
            .or_insert_with(|| RequestRecord::starting_at(now));

        if now.duration_since(record.minute_start) >= Duration::from_secs(60) {
            record.minute_count = 0;
            record.minute_start = now;
        }

        if now.duration_since(record.hour_start) >= Duration::from_secs(3600) {
            record.hour_count = 0;
            record.hour_start = now;
        }

        if record.minute_count >= self.per_minute {
            let wait_secs = 60 - now.duration_since(record.minute_start).as_secs();
            return Err(RateLimitError::TooManyRequestsPerMinute(wait_secs));
        }

        if record.hour_count >= self.per_hour {
            let wait_secs = 3600 - now.duration_since(record.hour_start).as_secs();
            return Err(RateLimitError::TooManyRequestsPerHour(wait_secs));
        }

        record.minute_count += 1;
        record.hour_count += 1;

        Ok(())
    }

    fn maybe_cleanup(&self, now: Instant) {
        // A poisoned timestamp only delays cleanup.
        let Ok(mut last_cleanup) = self.last_cleanup.lock() else {
            return;
        };
        if now.duration_since(*last_cleanup) > Duration::from_secs(CLEANUP_INTERVAL_SECS) {
            self.requests
                .retain(|_, record| now.duration_since(record.hour_start) < Duration::from_secs(3600));
            *last_cleanup = now;
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateLimitError {
    TooManyRequestsPerMinute(u64),
    TooManyRequestsPerHour(u64),
}

impl RateLimitError {
    pub fn message(&self) -> String {
        match self {
            Self::TooManyRequestsPerMinute(secs) => {
                format!("Too many votes. Wait {} seconds.", secs)
            }
            Self::TooManyRequestsPerHour(secs) => {
                format!("Hourly vote limit reached. Wait {} minutes.", secs.div_ceil(60))
            }
        }
    }
}

impl From<RateLimitError> for AppError {
    fn from(e: RateLimitError) -> Self {
        AppError::RateLimited(e.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minute_window() {
        let limiter = RateLimiter::with_limits(2, 10);
        let start = Instant::now();

        assert!(limiter.check_at("abebe", start).is_ok());
        assert!(limiter.check_at("abebe", start).is_ok());
        assert_eq!(
            limiter.check_at("abebe", start + Duration::from_secs(15)),
            Err(RateLimitError::TooManyRequestsPerMinute(45))
        );

        assert!(limiter.check_at("abebe", start + Duration::from_secs(60)).is_ok());
    }

    #[test]
    fn test_callers_are_independent() {
        let limiter = RateLimiter::with_limits(1, 10);
        let now = Instant::now();
        assert!(limiter.check_at("abebe", now).is_ok());
        assert!(limiter.check_at("sarah", now).is_ok());
        assert!(limiter.check_at("abebe", now).is_err());
    }

    #[test]
    fn test_hour_window() {
        let limiter = RateLimiter::with_limits(10, 3);
        let start = Instant::now();
        for minute in 0..3 {
            assert!(limiter
                .check_at("abebe", start + Duration::from_secs(minute * 60))
                .is_ok());
        }

        let err = limiter
            .check_at("abebe", start + Duration::from_secs(600))
            .unwrap_err();
        assert_eq!(err, RateLimitError::TooManyRequestsPerHour(3000));
        assert_eq!(
            AppError::from(err),
            AppError::RateLimited("Hourly vote limit reached. Wait 50 minutes.".to_string())
        );
    }
}
