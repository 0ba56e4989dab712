// Runtime configuration, read once at startup from the environment
// (optionally seeded by a `.env` file).

use crate::error::ConfigError;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_COLLECTION: &str = "vintage_cars";

/// What happens when a data field (not the menu choice) is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryPolicy {
    /// Abandon the whole record on the first malformed field.
    #[default]
    Abort,
    /// Ask for the same field again.
    Retry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub collection: String,
    /// `None` keeps the HTTP client's own default.
    pub timeout: Option<Duration>,
    pub entry_policy: EntryPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.into(),
            collection: DEFAULT_COLLECTION.into(),
            timeout: None,
            entry_policy: EntryPolicy::Abort,
        }
    }
}

impl Config {
    /// Load `.env` if present, then read `VINTAGE_CARS_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Same as `from_env` but against an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(url) = lookup("VINTAGE_CARS_URL") {
            let url = url.trim().trim_end_matches('/');
            if url.is_empty() {
                return Err(ConfigError::Empty { var: "VINTAGE_CARS_URL" });
            }
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Invalid {
                    var: "VINTAGE_CARS_URL",
                    value: url.to_string(),
                    reason: "expected an http:// or https:// URL",
                });
            }
            config.base_url = url.to_string();
        }

        if let Some(collection) = lookup("VINTAGE_CARS_COLLECTION") {
            let collection = collection.trim().trim_matches('/');
            if collection.is_empty() {
                return Err(ConfigError::Empty { var: "VINTAGE_CARS_COLLECTION" });
            }
            config.collection = collection.to_string();
        }

        if let Some(raw) = lookup("VINTAGE_CARS_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid {
                    var: "VINTAGE_CARS_TIMEOUT_SECS",
                    value: raw.clone(),
                    reason: "expected a positive number of seconds",
                })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        if let Some(raw) = lookup("VINTAGE_CARS_ENTRY_POLICY") {
            let policy = raw.trim().to_ascii_lowercase();
            config.entry_policy = match policy.as_str() {
                "abort" => EntryPolicy::Abort,
                "retry" => EntryPolicy::Retry,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "VINTAGE_CARS_ENTRY_POLICY",
                        value: raw,
                        reason: "expected `abort` or `retry`",
                    })
                }
            };
        }

        Ok(config)
    }

    pub fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.collection)
    }

    pub fn record_url(&self, id: i64) -> String {
        format!("{}/{}/{}", self.base_url, self.collection, id)
    }
}
