use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_VOTE_LATENCY_MS: u64 = 500;
pub const DEFAULT_SUBMIT_LATENCY_MS: u64 = 2000;
pub const DEFAULT_ASSISTANT_LATENCY_MS: u64 = 1500;
pub const DEFAULT_DEMO_USER: &str = "Abebe Goben";

/// Runtime knobs read from `BUGHIVE_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub vote_latency: Duration,
    pub submit_latency: Duration,
    pub assistant_latency: Duration,
    /// `None` makes the assistant cycle through its responses.
    pub assistant_seed: Option<u64>,
    pub demo_user: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            vote_latency: Duration::from_millis(DEFAULT_VOTE_LATENCY_MS),
            submit_latency: Duration::from_millis(DEFAULT_SUBMIT_LATENCY_MS),
            assistant_latency: Duration::from_millis(DEFAULT_ASSISTANT_LATENCY_MS),
            assistant_seed: None,
            demo_user: DEFAULT_DEMO_USER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let millis = |key: &str, default: Duration| {
            parsed::<u64>(&lookup, key)
                .map(Duration::from_millis)
                .unwrap_or(default)
        };

        Self {
            vote_latency: millis("BUGHIVE_VOTE_LATENCY_MS", defaults.vote_latency),
            submit_latency: millis("BUGHIVE_SUBMIT_LATENCY_MS", defaults.submit_latency),
            assistant_latency: millis("BUGHIVE_ASSISTANT_LATENCY_MS", defaults.assistant_latency),
            assistant_seed: parsed::<u64>(&lookup, "BUGHIVE_ASSISTANT_SEED"),
            demo_user: lookup("BUGHIVE_DEMO_USER")
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .unwrap_or(defaults.demo_user),
        }
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: not a valid number", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config(&[]), AppConfig::default());
        assert_eq!(AppConfig::default().vote_latency, Duration::from_millis(500));
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("BUGHIVE_VOTE_LATENCY_MS", "0"),
            ("BUGHIVE_ASSISTANT_SEED", "42"),
            ("BUGHIVE_DEMO_USER", "Sarah Chen"),
        ]);
        assert_eq!(config.vote_latency, Duration::ZERO);
        assert_eq!(config.assistant_seed, Some(42));
        assert_eq!(config.demo_user, "Sarah Chen");
        assert_eq!(config.submit_latency, Duration::from_millis(2000));
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = config(&[
            ("BUGHIVE_SUBMIT_LATENCY_MS", "soon"),
            ("BUGHIVE_ASSISTANT_SEED", "-1"),
            ("BUGHIVE_DEMO_USER", "  "),
        ]);
        assert_eq!(config.submit_latency, Duration::from_millis(2000));
        assert_eq!(config.assistant_seed, None);
        assert_eq!(config.demo_user, "Abebe Goben");
    }
}
