// src/grid/mod.rs

//! Sensitivity grid evaluation
//!
//! Evaluates the closed-form pricer over the Cartesian product of a spot
//! axis and a volatility axis, holding strike, maturity and rate fixed, and
//! returns one price matrix per option kind. Evaluation is a deterministic,
//! order-agnostic map: every cell is an independent pricer call, so a cell
//! must never diverge from a direct single-point valuation with the same
//! inputs.

pub mod types;

use anyhow::Result;

use crate::models::bs;
use crate::params::{FixedParameters, OptionKind};
use types::{AxisRange, PriceGrid, SensitivityGrids};

/// Evaluates the call and put price grids for the given axes and fixed
/// parameters.
///
/// Axis ranges and fixed parameters are validated once up front; after
/// that every (volatility row, spot column) cell is a plain kernel call.
/// The default 10x10 grid is 100 evaluations per kind, cheap enough to
/// recompute synchronously on every parameter change.
pub fn evaluate(
    spot_range: &AxisRange,
    volatility_range: &AxisRange,
    fixed: &FixedParameters,
) -> Result<SensitivityGrids> {
    spot_range.validate_as("spot")?;
    volatility_range.validate_as("volatility")?;
    fixed.validate()?;

    let spot_axis = spot_range.values();
    let volatility_axis = volatility_range.values();

    let mut call_values = Vec::with_capacity(volatility_axis.len());
    let mut put_values = Vec::with_capacity(volatility_axis.len());

    for &volatility in &volatility_axis {
        let mut call_row = Vec::with_capacity(spot_axis.len());
        let mut put_row = Vec::with_capacity(spot_axis.len());
        for &spot in &spot_axis {
            call_row.push(bs::price(
                OptionKind::Call,
                spot,
                fixed.strike,
                fixed.maturity,
                volatility,
                fixed.rate,
            ));
            put_row.push(bs::price(
                OptionKind::Put,
                spot,
                fixed.strike,
                fixed.maturity,
                volatility,
                fixed.rate,
            ));
        }
        call_values.push(call_row);
        put_values.push(put_row);
    }

    Ok(SensitivityGrids {
        call: PriceGrid {
            volatility_axis: volatility_axis.clone(),
            spot_axis: spot_axis.clone(),
            values: call_values,
        },
        put: PriceGrid {
            volatility_axis,
            spot_axis,
            values: put_values,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_fixed() -> FixedParameters {
        FixedParameters {
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
        }
    }

    #[test]
    fn test_grid_shape_and_axes() {
        let spots = AxisRange::new(80.0, 120.0, 10).unwrap();
        let vols = AxisRange::new(0.01, 1.0, 10).unwrap();
        let grids = evaluate(&spots, &vols, &default_fixed()).unwrap();

        assert_eq!(grids.call.shape(), (10, 10));
        assert_eq!(grids.put.shape(), (10, 10));
        assert_eq!(grids.call.spot_axis, grids.put.spot_axis);
        assert_eq!(grids.call.volatility_axis, grids.put.volatility_axis);
        assert_eq!(grids.call.spot_axis[0], 80.0);
        assert_eq!(grids.call.spot_axis[9], 120.0);
    }

    #[test]
    fn test_cells_match_direct_kernel_calls() {
        let spots = AxisRange::new(90.0, 110.0, 5).unwrap();
        let vols = AxisRange::new(0.1, 0.5, 4).unwrap();
        let fixed = default_fixed();
        let grids = evaluate(&spots, &vols, &fixed).unwrap();

        for (i, &vol) in grids.call.volatility_axis.iter().enumerate() {
            for (j, &spot) in grids.call.spot_axis.iter().enumerate() {
                let call = bs::call_price(spot, fixed.strike, fixed.maturity, vol, fixed.rate);
                let put = bs::put_price(spot, fixed.strike, fixed.maturity, vol, fixed.rate);
                assert_eq!(grids.call.value(i, j), call);
                assert_eq!(grids.put.value(i, j), put);
            }
        }
    }

    #[test]
    fn test_inverted_axis_rejected() {
        let spots = AxisRange { min: 120.0, max: 80.0, count: 10 };
        let vols = AxisRange::new(0.01, 1.0, 10).unwrap();
        let err = evaluate(&spots, &vols, &default_fixed()).unwrap_err();
        assert!(err.to_string().contains("spot"));
    }

    #[test]
    fn test_invalid_fixed_rejected() {
        let spots = AxisRange::new(80.0, 120.0, 10).unwrap();
        let vols = AxisRange::new(0.01, 1.0, 10).unwrap();
        let fixed = FixedParameters {
            strike: -100.0,
            maturity: 1.0,
            rate: 0.05,
        };
        assert!(evaluate(&spots, &vols, &fixed).is_err());
    }
}
