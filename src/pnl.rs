// src/pnl.rs

//! Profit-and-loss comparison against a purchase price
//!
//! `value = purchase_price - model_price`, one per option kind. The sign
//! drives display styling downstream: zero counts as a gain.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Styling class for a P&L value. `Gain` covers `value >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PnlClassification {
    Gain,
    Loss,
}

/// A profit-and-loss figure with its display classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pnl {
    pub value: f64,
    pub classification: PnlClassification,
}

/// Computes `purchase_price - model_price` and classifies the result.
///
/// The purchase price is caller-supplied and must be strictly positive; the
/// model price must be finite (it normally comes straight out of
/// [`crate::price`]).
pub fn profit_and_loss(purchase_price: f64, model_price: f64) -> Result<Pnl> {
    if purchase_price <= 0.0 || !purchase_price.is_finite() {
        return Err(anyhow!(
            "pnl validation: purchase price ({}) must be > 0 and finite",
            purchase_price
        ));
    }
    if !model_price.is_finite() {
        return Err(anyhow!(
            "pnl validation: model price ({}) must be finite",
            model_price
        ));
    }

    let value = purchase_price - model_price;
    let classification = if value >= 0.0 {
        PnlClassification::Gain
    } else {
        PnlClassification::Loss
    };

    Ok(Pnl {
        value,
        classification,
    })
}
