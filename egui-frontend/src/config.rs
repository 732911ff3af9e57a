//! # Dashboard Configuration
//!
//! Optional YAML file read once at startup. Every field has a default, so a
//! missing file (or a file that only sets some fields) is fine.
//!
//! ## Location
//!
//! ```text
//! <platform config dir>/finance-dashboard/dashboard.yaml
//! ```
//!
//! ## YAML Format
//!
//! ```yaml
//! monthly_budget: 4500
//! window_width: 1200
//! window_height: 900
//! title: "AI Financial Dashboard"
//! ```

use directories::ProjectDirs;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use shared::MonthlyBudget;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "dashboard.yaml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Invalid window size {width}x{height} in {path:?}, both sides must be positive")]
    WindowSize {
        path: PathBuf,
        width: f32,
        height: f32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Budget the "Budget Used" card is measured against
    pub monthly_budget: MonthlyBudget,
    pub window_width: f32,
    pub window_height: f32,
    pub title: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            monthly_budget: MonthlyBudget::default(),
            window_width: 1200.0,
            window_height: 900.0,
            title: "AI Financial Dashboard".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Default config file location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "finance-dashboard")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn from_yaml(path: &Path, yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let valid = |side: f32| side.is_finite() && side > 0.0;
        if valid(self.window_width) && valid(self.window_height) {
            Ok(())
        } else {
            Err(ConfigError::WindowSize {
                path: path.to_path_buf(),
                width: self.window_width,
                height: self.window_height,
            })
        }
    }

    /// Load config from `path`, falling back to defaults when the file does not exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let yaml = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(path, &yaml)?;
        info!("Loaded dashboard config from {:?}", path);
        Ok(config)
    }

    /// Load config from the default location
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("No config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Minimum window size derived from the configured size
    pub fn min_window_size(&self) -> [f32; 2] {
        [self.window_width.min(800.0), self.window_height.min(600.0)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = DashboardConfig::load_from(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.monthly_budget.amount(), 4500.0);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "monthly_budget: 5000").unwrap();

        let config = DashboardConfig::load_from(file.path()).unwrap();
        assert_eq!(config.monthly_budget.amount(), 5000.0);
        assert_eq!(config.title, "AI Financial Dashboard");
        assert_eq!(config.window_width, 1200.0);
    }

    #[test]
    fn test_zero_budget_is_rejected() {
        let err = DashboardConfig::from_yaml(Path::new("dashboard.yaml"), "monthly_budget: 0")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("Monthly budget must be a positive"));
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "monthly_budget: [not, a, number").unwrap();
        assert!(DashboardConfig::load_from(file.path()).is_err());
    }

    #[test]
    fn test_bad_window_size_is_rejected() {
        for yaml in ["window_width: 0", "window_height: -200", "window_width: .nan", "window_height: .inf"] {
            let err = DashboardConfig::from_yaml(Path::new("dashboard.yaml"), yaml).unwrap_err();
            assert!(matches!(err, ConfigError::WindowSize { .. }), "{yaml}");
        }
    }

    #[test]
    fn test_read_error_includes_cause() {
        // A directory where the file should be can't be read as text
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::create_dir(&path).unwrap();

        let err = DashboardConfig::load_from(&path).unwrap_err();
        match &err {
            ConfigError::Read { source, .. } => {
                assert!(err.to_string().ends_with(&source.to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_min_window_size() {
        let config = DashboardConfig {
            window_width: 640.0,
            ..DashboardConfig::default()
        };
        assert_eq!(config.min_window_size(), [640.0, 600.0]);
    }
}
