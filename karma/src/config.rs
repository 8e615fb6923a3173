use std::env;

use chrono::Duration;

use crate::error::ConfigError;

/// Default number of entries returned by a ranking query
pub const DEFAULT_LIST_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KarmaConfig {
    /// Minimum seconds between two modifications of the same term; `None` or zero disables it
    pub cooldown_secs: Option<u64>,
    /// Number of ranking entries returned when the caller gives no limit
    pub default_list_limit: usize,
}

impl Default for KarmaConfig {
    fn default() -> Self {
        Self {
            cooldown_secs: None,
            default_list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl KarmaConfig {
    /// Read `KARMA_COOLDOWN_SECONDS` and `KARMA_LIST_LIMIT`, loading `.env` first if present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let cooldown_secs = match env::var("KARMA_COOLDOWN_SECONDS") {
            Ok(raw) if !raw.trim().is_empty() => Some(raw.trim().parse::<u64>()?),
            _ => None,
        };

        let default_list_limit = match env::var("KARMA_LIST_LIMIT") {
            Ok(raw) if !raw.trim().is_empty() => {
                let limit = raw.trim().parse::<usize>()?;
                if limit == 0 {
                    return Err(ConfigError::InvalidValue {
                        key: "KARMA_LIST_LIMIT",
                        value: raw,
                    });
                }
                limit
            }
            _ => DEFAULT_LIST_LIMIT,
        };

        Ok(Self {
            cooldown_secs,
            default_list_limit,
        })
    }

    pub fn with_cooldown_secs(mut self, secs: u64) -> Self {
        self.cooldown_secs = Some(secs);
        self
    }

    pub fn with_default_list_limit(mut self, limit: usize) -> Self {
        self.default_list_limit = limit;
        self
    }

    /// The effective cooldown window, `None` when the guard is disabled.
    /// Values beyond what `Duration` can hold clamp to `Duration::MAX`.
    pub fn cooldown(&self) -> Option<Duration> {
        match self.cooldown_secs {
            Some(0) | None => None,
            Some(secs) => Some(
                Duration::try_seconds(i64::try_from(secs).unwrap_or(i64::MAX))
                    .unwrap_or(Duration::MAX),
            ),
        }
    }
}
