// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use periodic_table::CovalentRadii;
use thiserror::Error;

/// Multiplier applied to the sum of two covalent radii to get the bonding distance.
pub const DEFAULT_CUTOFF_FACTOR: f64 = 1.2;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BondConfigError {
    #[error("cutoff factor must be a positive finite number, got {0}")]
    InvalidCutoffFactor(f64),

    #[error("fallback radius must be a positive finite number, got {0}")]
    InvalidFallbackRadius(f64),

    #[error("covalent radius for type {species} must be a positive finite number, got {radius}")]
    InvalidRadius { species: u32, radius: f64 },
}

/// Parameters of the distance-threshold bond test.
#[derive(Debug, Clone, PartialEq)]
pub struct BondConfig {
    pub cutoff_factor: f64,
    pub radii: CovalentRadii,
}

impl BondConfig {
    pub fn with_cutoff_factor(mut self, cutoff_factor: f64) -> Self {
        self.cutoff_factor = cutoff_factor;
        self
    }

    pub fn with_fallback_radius(mut self, radius: f64) -> Self {
        self.radii.set_fallback(radius);
        self
    }

    pub fn with_radius(mut self, species: u32, radius: f64) -> Self {
        self.radii.insert(species, radius);
        self
    }

    /// Bonding distance threshold for a pair of species.
    pub fn cutoff(&self, species_a: u32, species_b: u32) -> f64 {
        (self.radii.radius(species_a) + self.radii.radius(species_b)) * self.cutoff_factor
    }

    pub fn validate(&self) -> Result<(), BondConfigError> {
        fn usable(value: f64) -> bool {
            value.is_finite() && value > 0.0
        }

        if !usable(self.cutoff_factor) {
            return Err(BondConfigError::InvalidCutoffFactor(self.cutoff_factor));
        }
        if !usable(self.radii.fallback()) {
            return Err(BondConfigError::InvalidFallbackRadius(self.radii.fallback()));
        }
        if let Some((species, radius)) = self.radii.iter().find(|&(_, radius)| !usable(radius)) {
            return Err(BondConfigError::InvalidRadius { species, radius });
        }
        Ok(())
    }
}

impl Default for BondConfig {
    fn default() -> Self {
        Self {
            cutoff_factor: DEFAULT_CUTOFF_FACTOR,
            radii: CovalentRadii::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use periodic_table::DEFAULT_FALLBACK_RADIUS;

    #[test]
    fn defaults() {
        let config = BondConfig::default();
        assert_eq!(config.cutoff_factor, 1.2);
        assert_eq!(config.radii.fallback(), DEFAULT_FALLBACK_RADIUS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn cutoff_for_pair() {
        let config = BondConfig::default();
        assert!((config.cutoff(1, 1) - 1.848).abs() < 1e-12);
        // Unlisted species fall back to 1.5 Å.
        assert!((config.cutoff(3, 3) - 3.6).abs() < 1e-12);
    }

    #[test]
    fn builders_override_values() {
        let config = BondConfig::default()
            .with_cutoff_factor(1.0)
            .with_fallback_radius(0.5)
            .with_radius(8, 0.66);
        assert_eq!(config.cutoff(8, 3), 0.66 + 0.5);
    }

    #[test]
    fn validation_rejects_unusable_values() {
        assert_eq!(
            BondConfig::default().with_cutoff_factor(0.0).validate(),
            Err(BondConfigError::InvalidCutoffFactor(0.0))
        );
        assert!(matches!(
            BondConfig::default().with_cutoff_factor(f64::NAN).validate(),
            Err(BondConfigError::InvalidCutoffFactor(_))
        ));
        assert_eq!(
            BondConfig::default().with_fallback_radius(-1.0).validate(),
            Err(BondConfigError::InvalidFallbackRadius(-1.0))
        );
        assert_eq!(
            BondConfig::default().with_radius(7, f64::INFINITY).validate(),
            Err(BondConfigError::InvalidRadius {
                species: 7,
                radius: f64::INFINITY
            })
        );
    }
}

// End of File
