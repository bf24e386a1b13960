//! Runtime configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TWENTY48_SIZE` | 4 | Board dimension, 2..=16 |
//! | `TWENTY48_HIGHSCORE_PATH` | `highscore.txt` | High-score record |
//! | `TWENTY48_SEED` | unset | Seed for reproducible spawns |
//! | `TWENTY48_LOG_DIR` | `<tmp>/tui-2048` | Directory for log files |

use std::env;
use std::path::PathBuf;

use crate::types::{DEFAULT_BOARD_SIZE, HIGHSCORE_FILE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub highscore_path: PathBuf,
    pub seed: Option<u64>,
    pub log_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            highscore_path: PathBuf::from(HIGHSCORE_FILE),
            seed: None,
            log_dir: default_log_dir(),
        }
    }
}

impl GameConfig {
    /// Create from environment variables; unusable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] but reading through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let size = non_empty("TWENTY48_SIZE")
            .and_then(|s| s.parse().ok())
            .filter(|n| (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(n))
            .unwrap_or(DEFAULT_BOARD_SIZE);

        let highscore_path = non_empty("TWENTY48_HIGHSCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(HIGHSCORE_FILE));

        let seed = non_empty("TWENTY48_SEED").and_then(|s| s.parse().ok());

        let log_dir = non_empty("TWENTY48_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_log_dir);

        Self {
            size,
            highscore_path,
            seed,
            log_dir,
        }
    }
}

fn default_log_dir() -> PathBuf {
    env::temp_dir().join("tui-2048")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> GameConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GameConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]);
        assert_eq!(cfg, GameConfig::default());
        assert_eq!(cfg.size, 4);
        assert_eq!(cfg.highscore_path, PathBuf::from("highscore.txt"));
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn reads_every_variable() {
        let cfg = config(&[
            ("TWENTY48_SIZE", "5"),
            ("TWENTY48_HIGHSCORE_PATH", "/tmp/best.txt"),
            ("TWENTY48_SEED", "42"),
            ("TWENTY48_LOG_DIR", "/tmp/logs"),
        ]);
        assert_eq!(cfg.size, 5);
        assert_eq!(cfg.highscore_path, PathBuf::from("/tmp/best.txt"));
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.log_dir, PathBuf::from("/tmp/logs"));
    }

    #[test]
    fn out_of_range_size_falls_back() {
        assert_eq!(config(&[("TWENTY48_SIZE", "1")]).size, 4);
        assert_eq!(config(&[("TWENTY48_SIZE", "17")]).size, 4);
        assert_eq!(config(&[("TWENTY48_SIZE", "big")]).size, 4);
        assert_eq!(config(&[("TWENTY48_SIZE", " 2 ")]).size, 2);
    }

    #[test]
    fn blank_values_are_ignored() {
        let cfg = config(&[("TWENTY48_HIGHSCORE_PATH", "  "), ("TWENTY48_SEED", "")]);
        assert_eq!(cfg.highscore_path, PathBuf::from("highscore.txt"));
        assert_eq!(cfg.seed, None);
    }
}
