// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! User configuration, read from a TOML file:
//!
//! ```toml
//! [bonds]
//! cutoff_factor = 1.2
//! fallback_radius = 1.5
//!
//! [bonds.covalent_radii]
//! "8" = 0.66
//! ```
//!
//! Radii listed under `covalent_radii` override or extend the built-in table; everything left out
//! keeps its default.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use bonding::{BondConfig, BondConfigError};
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "trajview.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("covalent radius key {0:?} is not a non-negative integer type code")]
    InvalidSpecies(String),

    #[error(transparent)]
    Invalid(#[from] BondConfigError),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    bonds: BondsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct BondsSection {
    cutoff_factor: Option<f64>,
    fallback_radius: Option<f64>,
    #[serde(default)]
    covalent_radii: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub bonds: BondConfig,
}

impl AppConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(text)?;

        let mut bonds = BondConfig::default();
        if let Some(cutoff_factor) = file.bonds.cutoff_factor {
            bonds = bonds.with_cutoff_factor(cutoff_factor);
        }
        if let Some(fallback_radius) = file.bonds.fallback_radius {
            bonds = bonds.with_fallback_radius(fallback_radius);
        }
        for (key, radius) in file.bonds.covalent_radii {
            let species = key
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSpecies(key.clone()))?;
            bonds = bonds.with_radius(species, radius);
        }

        bonds.validate()?;
        Ok(Self { bonds })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// `<config dir>/trajview.toml` for the current user, if a home directory can be found.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "trajview", "trajview")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Loads the per-user configuration file, or the defaults when there is none.
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => {
                log::info!("Loading configuration from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn values_override_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [bonds]
            cutoff_factor = 1.1
            fallback_radius = 0.9

            [bonds.covalent_radii]
            "8" = 0.66
            "26" = 1.32
            "#,
        )
        .unwrap();

        assert_eq!(config.bonds.cutoff_factor, 1.1);
        assert_eq!(config.bonds.radii.fallback(), 0.9);
        assert_eq!(config.bonds.radii.radius(8), 0.66);
        assert_eq!(config.bonds.radii.radius(26), 1.32);
        // Untouched defaults survive.
        assert_eq!(config.bonds.radii.radius(6), 0.77);
    }

    #[test]
    fn bad_species_key() {
        let err = AppConfig::from_toml_str("[bonds.covalent_radii]\nC = 0.77\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSpecies(key) if key == "C"));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = AppConfig::from_toml_str("[bonds]\ncutoff_factor = 0.0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(BondConfigError::InvalidCutoffFactor(_))
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            AppConfig::from_toml_str("[bonds]\ncutoff = 1.0\n"),
            Err(ConfigError::Parse(_))
        ));
    }
}

// End of File
