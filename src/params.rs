// src/params.rs

//! Parameter types for Black-Scholes pricing
//!
//! A full pricing input is a `PricingParameters` value; grid evaluation
//! splits it into the per-cell coordinates (spot, volatility) and the
//! `FixedParameters` held constant across the whole grid.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Option kind for European vanilla contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    /// Payoff at expiry for a given spot and strike.
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (spot - strike).max(0.0),
            OptionKind::Put => (strike - spot).max(0.0),
        }
    }

    /// Lowercase label used in reports and data files ("call" / "put").
    pub fn label(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

/// Full input set for one Black-Scholes valuation.
///
/// Construct through [`PricingParameters::new`] to get validation; the
/// fields stay public so callers that explicitly want the raw-formula
/// behavior of [`crate::models::bs`] can build a literal and bypass it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingParameters {
    /// Current price of the underlying (must be > 0)
    pub spot: f64,
    /// Strike price (must be > 0)
    pub strike: f64,
    /// Time to maturity in years (must be > 0)
    pub maturity: f64,
    /// Annualized volatility as a decimal, e.g. 0.2 for 20% (must be > 0)
    pub volatility: f64,
    /// Continuously compounded risk-free rate (any finite value)
    pub rate: f64,
}

/// Helper function to validate pricing parameters for the closed-form
/// Black-Scholes formula. `spot`, `strike`, `maturity` and `volatility`
/// must be strictly positive and finite (the formula divides by
/// `volatility * sqrt(maturity)` and takes `ln(spot / strike)`); `rate`
/// only needs to be finite.
fn validate_pricing_params(
    spot: f64,
    strike: f64,
    maturity: f64,
    volatility: f64,
    rate: f64,
) -> Result<()> {
    if spot <= 0.0 || !spot.is_finite() {
        return Err(anyhow!(
            "parameter validation: spot ({}) must be > 0 and finite",
            spot
        ));
    }
    if strike <= 0.0 || !strike.is_finite() {
        return Err(anyhow!(
            "parameter validation: strike ({}) must be > 0 and finite",
            strike
        ));
    }
    if maturity <= 0.0 || !maturity.is_finite() {
        return Err(anyhow!(
            "parameter validation: maturity ({}) must be > 0 and finite",
            maturity
        ));
    }
    if volatility <= 0.0 || !volatility.is_finite() {
        return Err(anyhow!(
            "parameter validation: volatility ({}) must be > 0 and finite",
            volatility
        ));
    }
    if !rate.is_finite() {
        return Err(anyhow!(
            "parameter validation: rate ({}) must be finite",
            rate
        ));
    }
    Ok(())
}

impl PricingParameters {
    /// Creates a new parameter set with validation.
    pub fn new(spot: f64, strike: f64, maturity: f64, volatility: f64, rate: f64) -> Result<Self> {
        validate_pricing_params(spot, strike, maturity, volatility, rate)?;

        Ok(Self {
            spot,
            strike,
            maturity,
            volatility,
            rate,
        })
    }

    /// Validates the current field values.
    pub fn validate(&self) -> Result<()> {
        validate_pricing_params(
            self.spot,
            self.strike,
            self.maturity,
            self.volatility,
            self.rate,
        )
    }

    /// The subset of fields a sensitivity grid holds constant.
    pub fn fixed(&self) -> FixedParameters {
        FixedParameters {
            strike: self.strike,
            maturity: self.maturity,
            rate: self.rate,
        }
    }
}

/// Parameters held fixed across a sensitivity grid while spot and
/// volatility vary cell by cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedParameters {
    pub strike: f64,
    pub maturity: f64,
    pub rate: f64,
}

impl FixedParameters {
    /// Validates the fixed fields with the same constraints as
    /// [`PricingParameters`].
    pub fn validate(&self) -> Result<()> {
        if self.strike <= 0.0 || !self.strike.is_finite() {
            return Err(anyhow!(
                "parameter validation: strike ({}) must be > 0 and finite",
                self.strike
            ));
        }
        if self.maturity <= 0.0 || !self.maturity.is_finite() {
            return Err(anyhow!(
                "parameter validation: maturity ({}) must be > 0 and finite",
                self.maturity
            ));
        }
        if !self.rate.is_finite() {
            return Err(anyhow!(
                "parameter validation: rate ({}) must be finite",
                self.rate
            ));
        }
        Ok(())
    }

    /// Rebuilds a full parameter set by substituting a grid cell's spot
    /// and volatility.
    pub fn with_spot_and_volatility(&self, spot: f64, volatility: f64) -> PricingParameters {
        PricingParameters {
            spot,
            strike: self.strike,
            maturity: self.maturity,
            volatility,
            rate: self.rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_validation() {
        // Valid parameters should work
        assert!(PricingParameters::new(100.0, 100.0, 1.0, 0.2, 0.05).is_ok());
        // Negative rates are legitimate
        assert!(PricingParameters::new(100.0, 100.0, 1.0, 0.2, -0.01).is_ok());

        // Each positivity constraint individually
        assert!(PricingParameters::new(0.0, 100.0, 1.0, 0.2, 0.05).is_err()); // zero spot
        assert!(PricingParameters::new(100.0, -5.0, 1.0, 0.2, 0.05).is_err()); // negative strike
        assert!(PricingParameters::new(100.0, 100.0, 0.0, 0.2, 0.05).is_err()); // zero maturity
        assert!(PricingParameters::new(100.0, 100.0, 1.0, 0.0, 0.05).is_err()); // zero volatility
        assert!(PricingParameters::new(100.0, 100.0, 1.0, 0.2, f64::NAN).is_err()); // NaN rate
    }

    #[test]
    fn test_validation_names_offending_field() {
        let err = PricingParameters::new(100.0, 100.0, 1.0, -0.3, 0.05).unwrap_err();
        assert!(err.to_string().contains("volatility"));

        let err = PricingParameters::new(100.0, 100.0, -1.0, 0.2, 0.05).unwrap_err();
        assert!(err.to_string().contains("maturity"));
    }

    #[test]
    fn test_intrinsic_payoff() {
        assert_eq!(OptionKind::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionKind::Call.intrinsic(90.0, 100.0), 0.0);
        assert_eq!(OptionKind::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionKind::Put.intrinsic(110.0, 100.0), 0.0);
    }

    #[test]
    fn test_fixed_round_trip() {
        let params = PricingParameters::new(95.0, 100.0, 0.5, 0.25, 0.03).unwrap();
        let rebuilt = params
            .fixed()
            .with_spot_and_volatility(params.spot, params.volatility);
        assert_eq!(params, rebuilt);
    }
}
