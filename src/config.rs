//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Settings file given with `--config` (TOML)
//! 3. Command line flags
//!
//! No implicit config files or environment variables are consulted.

use std::path::Path;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::HexSign;

/// Unified configuration for radixconv.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Sign convention for negative base-16 output
    pub hex_sign: HexSign,
}

/// Raw settings for intermediate parsing (fields are Option to detect "not specified").
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RawSettings {
    pub hex_sign: Option<HexSign>,
}

impl Settings {
    /// Merge overlay onto self: overlay wins where specified.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            hex_sign: overlay.hex_sign.unwrap_or(self.hex_sign),
        }
    }

    /// Load settings from defaults and an optional settings file.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let current = Self::default();
        match config_file {
            Some(path) => {
                let raw = load_raw_settings(path)?;
                debug!("loaded settings from {}: {:?}", path.display(), raw);
                Ok(current.merge_with(&raw))
            }
            None => Ok(current),
        }
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let config = Config::builder()
        .add_source(File::from(path).format(FileFormat::Toml).required(true))
        .build()
        .map_err(|e| config_err(path, e))?;
    config.try_deserialize().map_err(|e| config_err(path, e))
}

fn config_err(path: &Path, e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: format!("{}: {}", path.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.hex_sign, HexSign::Signed);
    }

    #[test]
    fn test_merge_keeps_unspecified() {
        let base = Settings {
            hex_sign: HexSign::Magnitude,
        };
        let merged = base.merge_with(&RawSettings::default());
        assert_eq!(merged.hex_sign, HexSign::Magnitude);

        let overlay = RawSettings {
            hex_sign: Some(HexSign::Signed),
        };
        assert_eq!(base.merge_with(&overlay).hex_sign, HexSign::Signed);
    }

    #[test]
    fn test_to_toml() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains("hex_sign = \"signed\""));
    }
}
