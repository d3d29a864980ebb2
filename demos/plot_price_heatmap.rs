// Example: plot_price_heatmap.rs
// Evaluates the call and put sensitivity grids for a parameter set and
// renders them side by side as annotated SVG heatmaps with a diverging
// red-to-green color scale, the way a pricing board displays them.
//
// Usage:
//     cargo run --example plot_price_heatmap [defaults.csv]
//
// The optional CSV must carry one data row of five positional fields:
// spot, strike, maturity, volatility, rate. The output image is written to
// price_heatmap.svg in the working directory.

use std::env;
use std::error::Error;

use plotters::prelude::*;
use pricegrid_lib::{sensitivity_grid, GridConfig, PriceGrid, PricingParameters};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    let params = match args.get(1) {
        Some(path) => load_defaults(path)?,
        None => PricingParameters::new(100.0, 100.0, 1.0, 0.2, 0.05)?,
    };

    let config = GridConfig::default();
    let (spot_axis, vol_axis) = config.axes_around(params.spot)?;
    let grids = sensitivity_grid(&spot_axis, &vol_axis, &params.fixed())?;

    let root = SVGBackend::new("price_heatmap.svg", (1600, 800)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));

    draw_heatmap(&panels[0], &grids.call, "CALL Prices")?;
    draw_heatmap(&panels[1], &grids.put, "PUT Prices")?;

    root.present()?;
    println!("Heatmaps saved to price_heatmap.svg");
    Ok(())
}

fn draw_heatmap<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    grid: &PriceGrid,
    title: &str,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let (rows, cols) = grid.shape();
    let (lo, hi) = grid.value_range();

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .caption(title, ("sans-serif", 28))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..cols as f64, 0f64..rows as f64)?;

    let spot_labels = grid.spot_axis.clone();
    let vol_labels = grid.volatility_axis.clone();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(cols)
        .y_labels(rows)
        .x_label_formatter(&|x| axis_label(&spot_labels, *x))
        .y_label_formatter(&|y| axis_label(&vol_labels, *y))
        .x_desc("Underlying Price")
        .y_desc("Volatility")
        .draw()?;

    for (i, row) in grid.values.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            let t = if hi > lo { (value - lo) / (hi - lo) } else { 0.5 };
            let (x, y) = (j as f64, i as f64);

            chart.draw_series(std::iter::once(Rectangle::new(
                [(x, y), (x + 1.0, y + 1.0)],
                diverging_color(t).filled(),
            )))?;
            chart.draw_series(std::iter::once(Text::new(
                format!("{:.2}", value),
                (x + 0.18, y + 0.55),
                ("sans-serif", 13).into_font().color(&BLACK),
            )))?;
        }
    }

    Ok(())
}

/// Label an integer mesh position with the axis value of the cell it
/// borders, two decimals, matching the cell annotations.
fn axis_label(axis: &[f64], position: f64) -> String {
    let idx = (position.round() as usize).min(axis.len().saturating_sub(1));
    format!("{:.2}", axis[idx])
}

/// Diverging red -> yellow -> green ramp over t in [0, 1]: low prices draw
/// hot, high prices draw green, mirroring the board's RdYlGn styling.
fn diverging_color(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let low = RGBColor(190, 45, 50);
    let mid = RGBColor(248, 238, 170);
    let high = RGBColor(35, 140, 70);

    if t < 0.5 {
        mix(low, mid, t * 2.0)
    } else {
        mix(mid, high, (t - 0.5) * 2.0)
    }
}

fn mix(a: RGBColor, b: RGBColor, t: f64) -> RGBColor {
    let lerp = |x: u8, y: u8| -> u8 { (x as f64 + (y as f64 - x as f64) * t).round() as u8 };
    RGBColor(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
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
