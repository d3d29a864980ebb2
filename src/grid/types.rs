// src/grid/types.rs

//! Axis and grid types for sensitivity evaluation

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// An inclusive, evenly spaced 1-D axis of `count` points from `min` to
/// `max` (a linspace). `min == max` is legal and produces a constant axis;
/// `min > max` or `count == 0` is rejected up front rather than silently
/// reordered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

/// Helper function to validate an axis range before any values are
/// generated from it.
fn validate_axis_range(name: &str, min: f64, max: f64, count: usize) -> Result<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(anyhow!(
            "axis validation: {} bounds ({}, {}) must be finite",
            name,
            min,
            max
        ));
    }
    if min > max {
        return Err(anyhow!(
            "axis validation: {} minimum ({}) exceeds maximum ({})",
            name,
            min,
            max
        ));
    }
    if count == 0 {
        return Err(anyhow!(
            "axis validation: {} point count must be at least 1",
            name
        ));
    }
    Ok(())
}

impl AxisRange {
    /// Creates a validated axis range.
    pub fn new(min: f64, max: f64, count: usize) -> Result<Self> {
        validate_axis_range("axis", min, max, count)?;
        Ok(Self { min, max, count })
    }

    /// Validates the current bounds and count, reporting errors under the
    /// given axis name (e.g. "spot", "volatility").
    pub fn validate_as(&self, name: &str) -> Result<()> {
        validate_axis_range(name, self.min, self.max, self.count)
    }

    /// Materializes the axis values: `count` points, first exactly `min`,
    /// last exactly `max`, linearly spaced in between. A single-point axis
    /// degenerates to `[min]`.
    pub fn values(&self) -> Vec<f64> {
        if self.count == 1 {
            return vec![self.min];
        }
        let step_count = (self.count - 1) as f64;
        (0..self.count)
            .map(|i| {
                if i == self.count - 1 {
                    // Guarantee the endpoint exactly, independent of
                    // floating-point accumulation.
                    self.max
                } else {
                    self.min + (self.max - self.min) * (i as f64) / step_count
                }
            })
            .collect()
    }
}

/// A matrix of option prices over a (volatility, spot) Cartesian product,
/// annotated with the axis values that generated it. Rows follow the
/// volatility axis, columns the spot axis, both in ascending axis order, so
/// renderers need no side channel to label the cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceGrid {
    /// Volatility value of each row
    pub volatility_axis: Vec<f64>,
    /// Spot value of each column
    pub spot_axis: Vec<f64>,
    /// `values[row][col]` is the price at
    /// `(volatility_axis[row], spot_axis[col])`
    pub values: Vec<Vec<f64>>,
}

impl PriceGrid {
    /// (rows, columns) = (volatility points, spot points).
    pub fn shape(&self) -> (usize, usize) {
        (self.volatility_axis.len(), self.spot_axis.len())
    }

    /// Price at (volatility row, spot column).
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }

    /// Minimum and maximum price over the whole grid, ignoring nothing:
    /// every cell of a validated evaluation is finite.
    pub fn value_range(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for row in &self.values {
            for &v in row {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        (lo, hi)
    }
}

/// Paired output of one sensitivity evaluation: the call and put grids share
/// shape and axis values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityGrids {
    pub call: PriceGrid,
    pub put: PriceGrid,
}
