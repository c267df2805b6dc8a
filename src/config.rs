use crate::storage::resolve_data_path;
use std::{env, path::PathBuf, time::Duration};

const DEFAULT_PORT: u16 = 8080;

/// Simulated backend latency for each kind of call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    pub auth: Duration,
    pub submit: Duration,
    pub chat: Duration,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            auth: Duration::from_millis(1000),
            submit: Duration::from_millis(500),
            chat: Duration::from_millis(1000),
        }
    }
}

impl Delays {
    pub fn none() -> Self {
        Self {
            auth: Duration::ZERO,
            submit: Duration::ZERO,
            chat: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub delays: Delays,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Delays::default();
        Self {
            port: env_parse("PORT").unwrap_or(DEFAULT_PORT),
            data_path: resolve_data_path(),
            delays: Delays {
                auth: env_millis("MOOD_AUTH_DELAY_MS").unwrap_or(defaults.auth),
                submit: env_millis("MOOD_SUBMIT_DELAY_MS").unwrap_or(defaults.submit),
                chat: env_millis("MOOD_CHAT_DELAY_MS").unwrap_or(defaults.chat),
            },
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.trim().parse().ok())
}

fn env_millis(key: &str) -> Option<Duration> {
    env_parse::<u64>(key).map(Duration::from_millis)
}
