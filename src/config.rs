//! fieldlog configuration.
//!
//! Loaded from `~/.fieldlog/config.toml`. Defaults apply when it is missing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::tracker::TrackerSettings;

/// Upper bound for `early-end-grace-minutes`: one day.
const MAX_GRACE_MINUTES: i64 = 24 * 60;

/// fieldlog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Name stamped on each mission (printed in its report header) and on
    /// incident reports.
    pub officer: String,

    /// Ending more than this many minutes before the planned end
    /// requires a justification.
    pub early_end_grace_minutes: i64,

    /// Where the snapshot is stored. Defaults to `~/.fieldlog/`.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            officer: "Current Officer".to_string(),
            early_end_grace_minutes: 15,
            data_dir: None,
        }
    }
}

impl Config {
    /// Load config from `~/.fieldlog/config.toml`.
    /// A missing file (or home directory) yields the defaults.
    pub fn load() -> Result<Self, String> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        let config: Self = toml::from_str(&contents)
            .map_err(|e| format!("invalid config at {}: {e}", path.display()))?;

        if config.early_end_grace_minutes < 0 {
            return Err(format!(
                "early-end-grace-minutes must not be negative in {}",
                path.display()
            ));
        }
        if config.early_end_grace_minutes > MAX_GRACE_MINUTES {
            return Err(format!(
                "early-end-grace-minutes must be at most {MAX_GRACE_MINUTES} in {}",
                path.display()
            ));
        }

        Ok(config)
    }

    /// The config file path: `~/.fieldlog/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".fieldlog").join("config.toml"))
    }

    pub fn tracker_settings(&self) -> TrackerSettings {
        TrackerSettings {
            officer: self.officer.clone(),
            early_end_grace_minutes: self.early_end_grace_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.early_end_grace_minutes, 15);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "officer = \"R. Okafor\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.officer, "R. Okafor");
        assert_eq!(config.early_end_grace_minutes, 15);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn reads_kebab_case_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "early-end-grace-minutes = 30\ndata-dir = \"/var/lib/fieldlog\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.early_end_grace_minutes, 30);
        assert_eq!(config.data_dir, Some(PathBuf::from("/var/lib/fieldlog")));
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "officer = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.contains("invalid config"));
    }

    #[test]
    fn negative_grace_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "early-end-grace-minutes = -5\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn oversized_grace_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "early-end-grace-minutes = 9223372036854775807\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.contains("at most 1440"));
    }

    #[test]
    fn one_day_grace_is_accepted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "early-end-grace-minutes = 1440\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.early_end_grace_minutes, 1440);
    }
}
