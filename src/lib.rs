//! # Pricegrid-Lib: Black-Scholes Pricing and Sensitivity Grids
//!
//! `pricegrid-lib` is a Rust library for closed-form valuation of European
//! options under the Black-Scholes model, built to back interactive pricing
//! boards. It computes headline call/put prices, evaluates a 2-D price
//! matrix over (volatility, spot) axis ranges for heatmap-style rendering,
//! and compares model prices against a purchase price for gain/loss
//! display.
//!
//! ## Core Features
//!
//! - **Closed-Form Pricer**: European call and put valuation with a
//!   double-precision normal CDF
//! - **Sensitivity Grids**: deterministic price matrices over caller-chosen
//!   spot and volatility axes, annotated with their axis values
//! - **P&L Classification**: purchase-price comparison with a documented
//!   gain/loss boundary
//! - **Fail-Fast Validation**: invalid parameters are rejected with the
//!   offending field named, never silently turned into NaN prices
//!
//! ## Quick Start
//!
//! ```rust
//! use pricegrid_lib::{price, sensitivity_grid, profit_and_loss};
//! use pricegrid_lib::{AxisRange, OptionKind, PricingParameters};
//!
//! // Headline prices for one parameter set
//! let params = PricingParameters::new(100.0, 100.0, 1.0, 0.2, 0.05)?;
//! let call = price(&params, OptionKind::Call)?;
//! let put = price(&params, OptionKind::Put)?;
//! assert!(call > put);
//!
//! // A 10x10 price surface around the current spot
//! let spots = AxisRange::new(80.0, 120.0, 10)?;
//! let vols = AxisRange::new(0.01, 1.0, 10)?;
//! let grids = sensitivity_grid(&spots, &vols, &params.fixed())?;
//! assert_eq!(grids.call.shape(), (10, 10));
//!
//! // Gain/loss against what was paid for the option
//! let pnl = profit_and_loss(12.0, call)?;
//! println!("P&L: ${:.2} ({:?})", pnl.value, pnl.classification);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Validation Policy
//!
//! The reference formulas are undefined for non-positive spot, strike,
//! maturity or volatility. The crate-level functions reject those inputs
//! up front; the raw kernel in [`models::bs`] keeps the unguarded formula
//! for callers that explicitly want non-finite propagation.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod grid;
pub mod models;
pub mod params;
pub mod pnl;

// ================================================================================================
// IMPORTS
// ================================================================================================

use anyhow::Result;

use models::bs;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Parameter and option types
pub use params::{FixedParameters, OptionKind, PricingParameters};

// Axis and grid types
pub use grid::types::{AxisRange, PriceGrid, SensitivityGrids};

// P&L types and operation
pub use pnl::{profit_and_loss, Pnl, PnlClassification};

// Grid-default configuration
pub use config::GridConfig;

// ================================================================================================
// PUBLIC API
// ================================================================================================

/// Price a European option with the closed-form Black-Scholes formula.
///
/// # Arguments
///
/// * `parameters` - Spot, strike, maturity (years), volatility (decimal)
///   and continuously compounded risk-free rate. Validated before pricing.
/// * `kind` - [`OptionKind::Call`] or [`OptionKind::Put`].
///
/// # Returns
///
/// The model price. For valid parameters the result is finite; calls and
/// puts on the same inputs satisfy put-call parity
/// `C - P = S - K * exp(-r * T)` to floating-point accuracy.
///
/// # Errors
///
/// * `anyhow::Error` naming the offending field if spot, strike, maturity
///   or volatility is non-positive or non-finite, or the rate is
///   non-finite.
///
/// # Example
///
/// ```rust
/// use pricegrid_lib::{price, OptionKind, PricingParameters};
///
/// let params = PricingParameters::new(100.0, 100.0, 1.0, 0.2, 0.05)?;
/// let call = price(&params, OptionKind::Call)?;
/// assert!((call - 10.45).abs() < 0.01);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn price(parameters: &PricingParameters, kind: OptionKind) -> Result<f64> {
    parameters.validate()?;
    Ok(bs::price(
        kind,
        parameters.spot,
        parameters.strike,
        parameters.maturity,
        parameters.volatility,
        parameters.rate,
    ))
}

/// Evaluate the call and put price grids over a spot axis and a volatility
/// axis, holding strike, maturity and rate fixed.
///
/// Both grids have the volatility axis as rows and the spot axis as
/// columns, ascending, and carry their generating axis values for
/// rendering. Cell `(i, j)` equals [`price`] evaluated at
/// `(spot_range[j], volatility_range[i])` exactly; evaluation is pure and
/// deterministic.
///
/// # Errors
///
/// * `anyhow::Error` if either axis is inverted (`min > max`), empty
///   (`count == 0`) or non-finite, or if the fixed parameters fail the
///   same validation as [`PricingParameters`]. Degenerate axes are
///   rejected rather than silently reordered.
///
/// # Example
///
/// ```rust
/// use pricegrid_lib::{sensitivity_grid, AxisRange, FixedParameters};
///
/// let spots = AxisRange::new(80.0, 120.0, 10)?;
/// let vols = AxisRange::new(0.01, 1.0, 10)?;
/// let fixed = FixedParameters { strike: 100.0, maturity: 1.0, rate: 0.05 };
///
/// let grids = sensitivity_grid(&spots, &vols, &fixed)?;
/// assert_eq!(grids.call.shape(), (10, 10));
/// assert_eq!(grids.put.shape(), (10, 10));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn sensitivity_grid(
    spot_range: &AxisRange,
    volatility_range: &AxisRange,
    fixed: &FixedParameters,
) -> Result<SensitivityGrids> {
    grid::evaluate(spot_range, volatility_range, fixed)
}
