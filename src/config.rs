// src/config.rs

//! Grid configuration
//!
//! The core accepts explicit axis bounds and point counts everywhere; the
//! values here are the presentation-layer defaults (a 10-point grid, a spot
//! window of +/- 20 around the current underlying price, volatility slider
//! bounds of 0.01..=1.00), kept as configuration rather than constants so a
//! front end can override any of them.

use crate::grid::types::AxisRange;
use anyhow::{anyhow, Result};
use serde::Deserialize;

/// Smallest spot the derived axis may start at; keeps a narrow window
/// around a small spot from crossing into non-positive territory.
const MIN_SPOT_FLOOR: f64 = 0.01;

/// Default settings for deriving sensitivity-grid axes.
#[derive(Debug, Clone, Deserialize)]
pub struct GridConfig {
    /// Number of points per axis
    #[serde(default = "default_grid_points")]
    pub grid_points: usize,

    /// Half-width of the spot window around the current spot
    #[serde(default = "default_spot_span")]
    pub spot_span: f64,

    /// Lower volatility bound
    #[serde(default = "default_min_volatility")]
    pub min_volatility: f64,

    /// Upper volatility bound
    #[serde(default = "default_max_volatility")]
    pub max_volatility: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_points: default_grid_points(),
            spot_span: default_spot_span(),
            min_volatility: default_min_volatility(),
            max_volatility: default_max_volatility(),
        }
    }
}

impl GridConfig {
    /// Parses a configuration from TOML text. Missing fields fall back to
    /// their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: GridConfig =
            toml::from_str(text).map_err(|e| anyhow!("grid config parse error: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configured bounds.
    pub fn validate(&self) -> Result<()> {
        if self.grid_points == 0 {
            return Err(anyhow!("grid config: grid_points must be at least 1"));
        }
        if self.spot_span <= 0.0 || !self.spot_span.is_finite() {
            return Err(anyhow!(
                "grid config: spot_span ({}) must be > 0 and finite",
                self.spot_span
            ));
        }
        if self.min_volatility <= 0.0 || !self.min_volatility.is_finite() {
            return Err(anyhow!(
                "grid config: min_volatility ({}) must be > 0 and finite",
                self.min_volatility
            ));
        }
        if self.max_volatility < self.min_volatility || !self.max_volatility.is_finite() {
            return Err(anyhow!(
                "grid config: max_volatility ({}) must be finite and >= min_volatility ({})",
                self.max_volatility,
                self.min_volatility
            ));
        }
        Ok(())
    }

    /// Derives the default (spot, volatility) axis pair for a given
    /// current spot price. The spot window is clamped so its lower edge
    /// stays strictly positive.
    pub fn axes_around(&self, spot: f64) -> Result<(AxisRange, AxisRange)> {
        if spot <= 0.0 || !spot.is_finite() {
            return Err(anyhow!(
                "grid config: spot ({}) must be > 0 and finite",
                spot
            ));
        }
        self.validate()?;

        let spot_min = (spot - self.spot_span).max(MIN_SPOT_FLOOR);
        let spot_max = spot + self.spot_span;
        let spot_axis = AxisRange::new(spot_min, spot_max, self.grid_points)?;
        let volatility_axis =
            AxisRange::new(self.min_volatility, self.max_volatility, self.grid_points)?;

        Ok((spot_axis, volatility_axis))
    }
}

fn default_grid_points() -> usize {
    10
}

fn default_spot_span() -> f64 {
    20.0
}

fn default_min_volatility() -> f64 {
    0.01
}

fn default_max_volatility() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GridConfig::default();
        assert_eq!(config.grid_points, 10);
        assert_eq!(config.spot_span, 20.0);
        assert_eq!(config.min_volatility, 0.01);
        assert_eq!(config.max_volatility, 1.0);
    }

    #[test]
    fn test_axes_around_spot() {
        let config = GridConfig::default();
        let (spots, vols) = config.axes_around(100.0).unwrap();
        assert_eq!(spots.min, 80.0);
        assert_eq!(spots.max, 120.0);
        assert_eq!(spots.count, 10);
        assert_eq!(vols.min, 0.01);
        assert_eq!(vols.max, 1.0);
    }

    #[test]
    fn test_spot_floor_clamp() {
        let config = GridConfig::default();
        let (spots, _) = config.axes_around(5.0).unwrap();
        assert_eq!(spots.min, MIN_SPOT_FLOOR);
        assert_eq!(spots.max, 25.0);
    }

    #[test]
    fn test_from_toml_with_partial_fields() {
        let config = GridConfig::from_toml_str("grid_points = 25\nspot_span = 10.0\n").unwrap();
        assert_eq!(config.grid_points, 25);
        assert_eq!(config.spot_span, 10.0);
        // Unspecified fields fall back to defaults
        assert_eq!(config.min_volatility, 0.01);
        assert_eq!(config.max_volatility, 1.0);
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(GridConfig::from_toml_str("grid_points = 0").is_err());
        assert!(GridConfig::from_toml_str("min_volatility = 0.5\nmax_volatility = 0.2").is_err());
        assert!(GridConfig::from_toml_str("grid_points = \"ten\"").is_err());
    }
}
