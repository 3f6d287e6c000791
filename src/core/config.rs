//! Builder configuration with documented defaults
//!
//! Loaded from `charforge.toml` (or the `--config` path). Every field has a
//! default so a missing file or a partial file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::abilities::AbilityMethod;
use crate::core::error::{CharforgeError, Result};

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "charforge.toml";

/// Standard point-buy budget
pub const DEFAULT_POINT_BUY_BUDGET: u32 = 27;

/// Largest budget accepted; anything above makes every array affordable
const MAX_POINT_BUY_BUDGET: u32 = 50;

/// Configuration for a character-building session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Directory holding optional `catalogs.toml` and `rules.toml`
    ///
    /// Entries found there extend or replace the built-in tables.
    pub data_dir: Option<PathBuf>,

    /// How ability scores are generated when the user is not asked
    pub ability_method: AbilityMethod,

    /// Points available for point-buy
    pub point_buy_budget: u32,

    /// Seed for dice rolls
    ///
    /// When unset, rolls are seeded from OS entropy.
    pub seed: Option<u64>,

    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            ability_method: AbilityMethod::StandardArray,
            point_buy_budget: DEFAULT_POINT_BUY_BUDGET,
            seed: None,
            log_filter: "charforge=info".to_string(),
        }
    }
}

impl BuilderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: BuilderConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Config file for a run: the explicit path, else `charforge.toml` if present
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        fallback.is_file().then(|| fallback.to_path_buf())
    }

    /// Load from a located file, or defaults when there is none
    pub fn from_source(source: Option<&Path>) -> Result<Self> {
        match source {
            Some(path) => Self::load_from_toml(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.point_buy_budget == 0 || self.point_buy_budget > MAX_POINT_BUY_BUDGET {
            return Err(CharforgeError::InvalidConfig(format!(
                "point_buy_budget ({}) must be between 1 and {}",
                self.point_buy_budget, MAX_POINT_BUY_BUDGET
            )));
        }

        if let Some(dir) = &self.data_dir {
            if !dir.is_dir() {
                return Err(CharforgeError::InvalidConfig(format!(
                    "data_dir '{}' is not a directory",
                    dir.display()
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(BuilderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = BuilderConfig::parse_toml("seed = 42\nability_method = \"roll\"").unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.ability_method, AbilityMethod::Roll);
        assert_eq!(config.point_buy_budget, DEFAULT_POINT_BUY_BUDGET);
        assert_eq!(config.log_filter, "charforge=info");
    }

    #[test]
    fn test_zero_budget_rejected() {
        let err = BuilderConfig::parse_toml("point_buy_budget = 0").unwrap_err();
        assert!(matches!(err, CharforgeError::InvalidConfig(_)));
    }

    #[test]
    fn test_missing_data_dir_rejected() {
        let config = BuilderConfig {
            data_dir: Some(PathBuf::from("/definitely/not/a/real/dir")),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_method_is_a_toml_error() {
        let err = BuilderConfig::parse_toml("ability_method = \"guess\"").unwrap_err();
        assert!(matches!(err, CharforgeError::Toml(_)));
    }

    #[test]
    fn test_explicit_path_is_located_as_given() {
        let path = Path::new("/tmp/elsewhere/custom.toml");
        assert_eq!(BuilderConfig::locate(Some(path)), Some(path.to_path_buf()));
    }

    #[test]
    fn test_no_source_gives_defaults() {
        let config = BuilderConfig::from_source(None).unwrap();
        assert_eq!(config.point_buy_budget, DEFAULT_POINT_BUY_BUDGET);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_missing_explicit_file_is_an_io_error() {
        let err = BuilderConfig::from_source(Some(Path::new("/definitely/not/charforge.toml"))).unwrap_err();
        assert!(matches!(err, CharforgeError::Io(_)));
    }
}
