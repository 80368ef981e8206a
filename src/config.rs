//! Game configuration from environment variables.
//!
//! - `FRUIT_BLOCKS_DROP_MS`: drop timer interval in milliseconds (default: 700)
//! - `FRUIT_BLOCKS_SEED`: piece RNG seed (default: derived from the clock)
//! - `FRUIT_BLOCKS_LOG_PATH`: log file (default: "fruit-blocks.log"; empty disables logging)
//! - `FRUIT_BLOCKS_AUTO_RESTART`: "1" or "true" to start a new game automatically after game over

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};

use crate::types::DROP_INTERVAL_MS;

pub const ENV_DROP_MS: &str = "FRUIT_BLOCKS_DROP_MS";
pub const ENV_SEED: &str = "FRUIT_BLOCKS_SEED";
pub const ENV_LOG_PATH: &str = "FRUIT_BLOCKS_LOG_PATH";
pub const ENV_AUTO_RESTART: &str = "FRUIT_BLOCKS_AUTO_RESTART";

pub const DEFAULT_LOG_PATH: &str = "fruit-blocks.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub drop_interval_ms: u32,
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
    pub auto_restart: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            drop_interval_ms: DROP_INTERVAL_MS,
            seed: None,
            log_path: Some(PathBuf::from(DEFAULT_LOG_PATH)),
            auto_restart: false,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Unset variables keep
    /// their defaults; set but malformed ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_DROP_MS) {
            let ms: u32 = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_DROP_MS}={raw:?} is not a number of milliseconds"))?;
            if ms == 0 {
                bail!("{ENV_DROP_MS} must be greater than zero");
            }
            config.drop_interval_ms = ms;
        }

        if let Some(raw) = lookup(ENV_SEED) {
            let seed = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_SEED}={raw:?} is not a u32"))?;
            config.seed = Some(seed);
        }

        if let Some(raw) = lookup(ENV_LOG_PATH) {
            let raw = raw.trim();
            config.log_path = if raw.is_empty() {
                None
            } else {
                Some(PathBuf::from(raw))
            };
        }

        if let Some(raw) = lookup(ENV_AUTO_RESTART) {
            config.auto_restart = parse_flag(&raw);
        }

        Ok(config)
    }

    /// The configured seed, or one taken from the wall clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_variables_use_defaults() {
        let config = GameConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.drop_interval_ms, 700);
        assert_eq!(config.log_path, Some(PathBuf::from("fruit-blocks.log")));
        assert!(!config.auto_restart);
    }

    #[test]
    fn reads_every_variable() {
        let config = GameConfig::from_lookup(lookup(&[
            (ENV_DROP_MS, "350"),
            (ENV_SEED, " 42 "),
            (ENV_LOG_PATH, "/tmp/fb.log"),
            (ENV_AUTO_RESTART, "TRUE"),
        ]))
        .unwrap();
        assert_eq!(config.drop_interval_ms, 350);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.seed_or_clock(), 42);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/fb.log")));
        assert!(config.auto_restart);
    }

    #[test]
    fn empty_log_path_disables_logging() {
        let config = GameConfig::from_lookup(lookup(&[(ENV_LOG_PATH, "  ")])).unwrap();
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn malformed_values_are_errors() {
        let err = GameConfig::from_lookup(lookup(&[(ENV_DROP_MS, "fast")])).unwrap_err();
        assert!(err.to_string().contains(ENV_DROP_MS));

        assert!(GameConfig::from_lookup(lookup(&[(ENV_DROP_MS, "0")])).is_err());
        assert!(GameConfig::from_lookup(lookup(&[(ENV_SEED, "-3")])).is_err());
    }

    #[test]
    fn unknown_flag_values_are_false() {
        let config = GameConfig::from_lookup(lookup(&[(ENV_AUTO_RESTART, "maybe")])).unwrap();
        assert!(!config.auto_restart);
    }
}
