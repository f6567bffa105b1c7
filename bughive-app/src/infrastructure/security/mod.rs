mod input_sanitizer;
mod rate_limiter;

pub use input_sanitizer::InputSanitizer;
pub use rate_limiter::{RateLimitError, RateLimiter, MAX_VOTES_PER_HOUR, MAX_VOTES_PER_MINUTE};
