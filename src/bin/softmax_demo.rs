//! softmax_demo — the teaching sequence: generate, transform, plot, compare.
//!
//! Purpose
//! -------
//! Reproduce the classic softmax demonstration as a linear pipeline:
//! 1. compute the softmax of the fixed logits [1, 2, 3] and print it,
//! 2. draw 50 random integer logits from [-5, 15) and transform them with
//!    the literal formulation,
//! 3. scatter-plot the logits against their probabilities
//!    (`plots/softmax.png`),
//! 4. run the vectorized reference activation on the same logits and
//!    scatter-plot one implementation against the other with the Pearson
//!    correlation in the caption (`plots/softmax_compare.png`).
//!
//! Conventions
//! -----------
//! - Everything here is presentation: data generation, chart styling, and
//!   file output. The computational core lives in `rust_softmax::softmax`
//!   and is consumed unchanged.
//! - Status output goes through `tracing`; chart and I/O failures surface
//!   as boxed errors from `main`.

use std::error::Error;
use std::fs;

use ndarray::Array1;
use plotters::prelude::*;
use rand::Rng;
use tracing::info;

use rust_softmax::softmax::prelude::*;

const PLOT_DIR: &str = "plots";
const DEMO_SIZE: usize = 50;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    // Fixed worked example, printed like the original demonstration.
    let z_fixed = [1.0_f64, 2.0, 3.0];
    let sigma_fixed = softmax_with(&z_fixed, Stability::Direct)?;
    info!(?z_fixed, ?sigma_fixed, "softmax of the fixed logits");

    // Random integer logits in [-5, 15), literal formulation. The range is
    // small enough that the literal path cannot overflow.
    let mut rng = rand::thread_rng();
    let z: Vec<f64> = (0..DEMO_SIZE).map(|_| rng.gen_range(-5..15) as f64).collect();
    let sigma = softmax_with(&z, Stability::Direct)?;
    let sigma_sum: f64 = sigma.iter().sum();
    info!(n = z.len(), sigma_sum, "softmax of the random logits");

    fs::create_dir_all(PLOT_DIR)?;
    render_scatter(&z, &sigma, sigma_sum)?;

    // Cross-check against the vectorized activation and plot the two
    // implementations against each other.
    let sigma_ref = activation(Array1::from(z.clone()).view())?;
    let sigma_ref: Vec<f64> = sigma_ref.to_vec();
    let deviation = max_abs_deviation(&sigma, &sigma_ref)?;
    let r = pearson_r(&sigma, &sigma_ref)?;
    info!(deviation, r, "cross-check of the two implementations");

    render_comparison(&sigma, &sigma_ref, r)?;

    Ok(())
}

/// Scatter the logits against their probabilities (`plots/softmax.png`),
/// with the probability sum in the caption.
fn render_scatter(z: &[f64], sigma: &[f64], sigma_sum: f64) -> Result<(), Box<dyn Error>> {
    let path = format!("{PLOT_DIR}/softmax.png");
    let root = BitMapBackend::new(&path, (720, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let (z_min, z_max) = min_max(z);
    let (_, sigma_max) = min_max(sigma);

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption(format!("Σσ = {sigma_sum:.6}"), ("sans-serif", 24.0))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .build_cartesian_2d(z_min - 1.0..z_max + 1.0, 0.0..sigma_max * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("original number z")
        .y_desc("softmaxified σ")
        .disable_mesh()
        .draw()?;

    chart.draw_series(
        z.iter().zip(sigma).map(|(&x, &y)| Circle::new((x, y), 4, RED.filled())),
    )?;

    root.present()?;
    info!(path = %path, "wrote scatter plot");
    Ok(())
}

/// Scatter one implementation against the other
/// (`plots/softmax_compare.png`), with the Pearson r in the caption.
fn render_comparison(manual: &[f64], reference: &[f64], r: f64) -> Result<(), Box<dyn Error>> {
    let path = format!("{PLOT_DIR}/softmax_compare.png");
    let root = BitMapBackend::new(&path, (720, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let (_, manual_max) = min_max(manual);
    let (_, reference_max) = min_max(reference);
    let upper = manual_max.max(reference_max) * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption(format!("The two methods correlate at r = {r:.9}"), ("sans-serif", 24.0))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .build_cartesian_2d(0.0..upper, 0.0..upper)?;

    chart
        .configure_mesh()
        .x_desc("manual softmax")
        .y_desc("reference activation")
        .disable_mesh()
        .draw()?;

    chart.draw_series(
        manual.iter().zip(reference).map(|(&x, &y)| Circle::new((x, y), 4, RED.filled())),
    )?;

    root.present()?;
    info!(path = %path, "wrote comparison plot");
    Ok(())
}

/// Minimum and maximum of a non-empty slice.
fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}
