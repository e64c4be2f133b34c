//! Simulator configuration
//!
//! Loads a TOML file into the face and registry configuration. Falls
//! back to the embedded dozenal.toml when no path is given.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use dozenal_core::{ConfigError, FaceConfig};
use dozenal_movement::MovementConfig;

/// Embedded default configuration (validated by build.rs)
pub const EMBEDDED_CONFIG: &str = include_str!("../dozenal.toml");

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File is not valid TOML or has the wrong shape
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// Values parsed but the face rejects them
    #[error("invalid face configuration: {0:?}")]
    Invalid(ConfigError),
}

/// Full simulator configuration
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Dozenal face settings
    pub face: FaceConfig,
    /// Registry settings
    pub movement: MovementConfig,
}

impl SimConfig {
    /// Parse and validate a TOML document
    pub fn parse(text: &str) -> Result<Self, ConfigLoadError> {
        let config: SimConfig = toml::from_str(text)?;
        config.face.validate().map_err(ConfigLoadError::Invalid)?;
        Ok(config)
    }

    /// Load from a file, or the embedded defaults when `path` is `None`
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigLoadError> {
        match path {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                let config = Self::parse(&text)?;
                info!("Loaded configuration from {}", path.display());
                Ok(config)
            }
            None => {
                debug!("Using embedded configuration");
                Self::parse(EMBEDDED_CONFIG)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dozenal_core::{DivisionTable, TickRate};

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = SimConfig::parse(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.face, FaceConfig::default());
        assert_eq!(config.movement, MovementConfig::default());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SimConfig::parse("").unwrap();
        assert_eq!(config.face.tick_rate, TickRate::DOZENAL);
        assert_eq!(config.face.table, DivisionTable::STANDARD);
    }

    #[test]
    fn test_partial_config() {
        let config = SimConfig::parse("[face]\ntick_rate = 64\nshow_subdigit = true\n").unwrap();
        assert_eq!(config.face.tick_rate, TickRate::FAST);
        assert!(config.face.show_subdigit);
        assert_eq!(config.face.display_offset, 5);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = SimConfig::parse("[face]\ntick_rate = 12\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Invalid(ConfigError::InvalidTickRate)
        ));

        let err = SimConfig::parse("[face.table]\nthird = 0\n").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Invalid(ConfigError::ZeroDivisor)));
    }

    #[test]
    fn test_bad_toml_rejected() {
        let err = SimConfig::parse("[face\n").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SimConfig::load(Some(Path::new("/nonexistent/dozenal.toml"))).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Io { .. }));
    }
}
