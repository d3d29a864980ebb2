// demos/pricing_demo.rs

//! Demonstration of the full pricing-board flow
//!
//! This example shows how to:
//! 1. Seed default parameters (optionally from a one-row CSV file)
//! 2. Compute the headline call and put prices
//! 3. Evaluate the price-sensitivity grids around the current spot
//! 4. Compare the model prices against purchase prices for P&L
//!
//! Usage:
//!     cargo run --example pricing_demo [defaults.csv]

use std::env;
use std::error::Error;

use pricegrid_lib::{
    price, profit_and_loss, sensitivity_grid, GridConfig, OptionKind, PnlClassification,
    PricingParameters,
};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    let params = match args.get(1) {
        Some(path) => load_defaults(path)?,
        None => PricingParameters::new(100.0, 100.0, 1.0, 0.2, 0.05)?,
    };

    println!("Black-Scholes Pricing Demo");
    println!("==========================");
    println!(
        "Parameters: S={:.2} K={:.2} T={:.2}y sigma={:.2} r={:.2}%",
        params.spot,
        params.strike,
        params.maturity,
        params.volatility,
        params.rate * 100.0
    );

    // Headline prices
    let call_price = price(&params, OptionKind::Call)?;
    let put_price = price(&params, OptionKind::Put)?;
    println!("\nCALL price: ${:.2}", call_price);
    println!("PUT price:  ${:.2}", put_price);

    // Sensitivity grids over the stock axes: spot +/- 20, vol 0.01..=1.00
    let config = GridConfig::default();
    let (spot_axis, vol_axis) = config.axes_around(params.spot)?;
    let grids = sensitivity_grid(&spot_axis, &vol_axis, &params.fixed())?;

    let (rows, cols) = grids.call.shape();
    let (call_lo, call_hi) = grids.call.value_range();
    let (put_lo, put_hi) = grids.put.value_range();
    println!("\nSensitivity grids: {}x{} cells", rows, cols);
    println!(
        "  spot axis {:.2}..{:.2}, volatility axis {:.2}..{:.2}",
        spot_axis.min, spot_axis.max, vol_axis.min, vol_axis.max
    );
    println!("  call prices span ${:.2} to ${:.2}", call_lo, call_hi);
    println!("  put prices span  ${:.2} to ${:.2}", put_lo, put_hi);

    // P&L against purchase prices; default to the model prices themselves,
    // the same seed an interactive form would start from.
    let call_purchase: f64 = args
        .get(2)
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(call_price);
    let put_purchase: f64 = args
        .get(3)
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(put_price);

    let call_pnl = profit_and_loss(call_purchase, call_price)?;
    let put_pnl = profit_and_loss(put_purchase, put_price)?;

    println!("\nP&L (purchase - model):");
    println!(
        "  CALL bought at ${:.2}: ${:.2} [{}]",
        call_purchase,
        call_pnl.value,
        tag(call_pnl.classification)
    );
    println!(
        "  PUT bought at ${:.2}:  ${:.2} [{}]",
        put_purchase,
        put_pnl.value,
        tag(put_pnl.classification)
    );

    Ok(())
}

fn tag(classification: PnlClassification) -> &'static str {
    match classification {
        PnlClassification::Gain => "gain",
        PnlClassification::Loss => "loss",
    }
}

/// Read the five positional defaults (spot, strike, maturity, volatility,
/// rate) from the first data row of a CSV file.
fn load_defaults(path: &str) -> Result<PricingParameters, Box<dyn Error>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    let record = reader
        .records()
        .next()
        .ok_or("defaults file contains no data row")??;

    let field = |i: usize| -> Result<f64, Box<dyn Error>> {
        Ok(record
            .get(i)
            .ok_or_else(|| format!("defaults row is missing field {}", i))?
            .trim()
            .parse::<f64>()?)
    };

    Ok(PricingParameters::new(
        field(0)?,
        field(1)?,
        field(2)?,
        field(3)?,
        field(4)?,
    )?)
}
