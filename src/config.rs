//! Startup configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TUI_2048_SEED` | random | Seed for the tile RNG |
//! | `TUI_2048_LOG` | unset | Log file path; logging is off when unset |
//! | `TUI_2048_LOG_FILTER` | `info` | `tracing` filter directives |

use std::path::PathBuf;

use anyhow::{Context, Result};

pub const SEED_VAR: &str = "TUI_2048_SEED";
pub const LOG_VAR: &str = "TUI_2048_LOG";
pub const LOG_FILTER_VAR: &str = "TUI_2048_LOG_FILTER";

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u64,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: rand::random(),
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Create from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    ///
    /// Blank values count as unset. A seed that is not a `u64` is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let mut config = Self::default();

        if let Some(raw) = var(SEED_VAR) {
            config.seed = raw
                .parse()
                .with_context(|| format!("{SEED_VAR}={raw:?} is not a valid u64 seed"))?;
        }
        config.log_path = var(LOG_VAR).map(PathBuf::from);
        if let Some(filter) = var(LOG_FILTER_VAR) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}
