use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use plotlib::page::Page;
use plotlib::repr::Plot;
use plotlib::style::{LineStyle, PointMarker, PointStyle};
use plotlib::view::ContinuousView;

use asymptote::{ComplexityClass, Measurement, Overlay, ScaledCurve};

#[derive(Debug, Parser)]
#[command(version, about = "compare measured run times against a scaled theoretical complexity curve")]
struct Opts {
    /// Complexity class to validate against: linear, quadratic, or linearithmic
    #[arg(long, value_parser = parse_class)]
    class: ComplexityClass,

    /// Input size of the dataset row to calibrate on (defaults to the final row)
    #[arg(long)]
    reference: Option<u64>,

    /// Write an SVG chart overlaying the measured points and the scaled curve
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Path to input CSV of input_size,time_ms records
    input: PathBuf,

    /// Predict the run time at the given extra input sizes
    predictions: Vec<u64>,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let mut measurements = Vec::new();
    let mut input = csv::Reader::from_path(&opts.input)?;
    for record in input.records() {
        let record = record?;
        let m = Measurement::new(record[0].parse()?, record[1].parse()?)?;
        measurements.push(m);
    }

    let reference = match opts.reference {
        Some(n) => *measurements
            .iter()
            .find(|m| m.n == n)
            .ok_or_else(|| anyhow!("no measurement at input size {} to calibrate on", n))?,
        None => *measurements.last().context("input CSV contains no measurements")?,
    };

    let curve = ScaledCurve::calibrate(opts.class, reference)?;
    let overlay = curve.overlay(&measurements)?;

    println!("{} calibrated at N={}: C={:e}", curve.class, reference.n, curve.constant);
    println!("{:<10} | {:<8} | {:<8} | {:<8}", "N Value", "Exp(ms)", "Raw", "Scaled(ms)");
    println!("------------------------------------------");
    for (m, scaled) in measurements.iter().zip(&overlay.theoretical_ms) {
        let raw = curve.class.growth(m.n)?;
        println!("{:<10} | {:<8.4} | {:<8e} | {:<8.4}", m.n, m.time_ms, raw, scaled);
    }

    if let Some(path) = &opts.plot {
        render_overlay(&overlay, path)?;
    }

    for n in opts.predictions {
        println!("{},{}", n, curve.time_at(n)?);
    }

    Ok(())
}

fn parse_class(s: &str) -> Result<ComplexityClass, String> {
    match s {
        "linear" => Ok(ComplexityClass::Linear),
        "quadratic" => Ok(ComplexityClass::Quadratic),
        "linearithmic" => Ok(ComplexityClass::Linearithmic),
        _ => Err(format!("unknown complexity class: {} (expected linear, quadratic, or linearithmic)", s)),
    }
}

fn render_overlay(overlay: &Overlay, path: &Path) -> Result<()> {
    let measured: Vec<(f64, f64)> = overlay
        .sizes
        .iter()
        .zip(&overlay.empirical_ms)
        .map(|(&n, &time_ms)| (n as f64, time_ms))
        .collect();
    let scaled: Vec<(f64, f64)> = overlay
        .sizes
        .iter()
        .zip(&overlay.theoretical_ms)
        .map(|(&n, &time_ms)| (n as f64, time_ms))
        .collect();

    let points = Plot::new(measured)
        .point_style(PointStyle::new().marker(PointMarker::Circle).colour("red"));
    let line = Plot::new(scaled).line_style(LineStyle::new().colour("darkred"));
    let view = ContinuousView::new()
        .add(points)
        .add(line)
        .x_label("Input Size (N)")
        .y_label("Time (Milliseconds)");
    Page::single(&view)
        .save(path)
        .map_err(|e| anyhow!("failed to write plot to {}: {}", path.display(), e))?;

    Ok(())
}
