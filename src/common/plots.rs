//! Plotting infrastructure for the sales report charts
//!
//! This module renders the monthly sales line chart and the per-product bar
//! chart using the [`plotters`] crate. Charts are saved as PNG files with a
//! fixed resolution.

use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Creates a line chart from labelled buckets and saves it as a PNG file.
///
/// Points are placed at consecutive integer positions on the X-axis and the
/// axis tick labels show each bucket's label.
///
/// # Arguments
/// * `series` - Chronologically ordered (label, value) buckets
/// * `title` - Chart title displayed at the top of the plot
/// * `x_label` - Label for the X-axis
/// * `y_label` - Label for the Y-axis
/// * `output_path` - Path where the PNG file should be saved
///
/// # Chart Properties
/// * Resolution: 1200x600 pixels
/// * Format: PNG
/// * Grid: Enabled for better readability
/// * Line style: Simple line chart connecting bucket values
pub fn create_line_plot(
    series: &[(String, u64)],
    title: &str,
    x_label: &str,
    y_label: &str,
    output_path: &Path,
) -> Result<()> {
    if series.is_empty() {
        return Err(PlotError::InvalidData("Series cannot be empty".to_string()));
    }

    let root = BitMapBackend::new(output_path, (1200, 600));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let x_max = (series.len().saturating_sub(1)).max(1) as f64;
    let y_max = axis_ceiling(series);

    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart_context
        .configure_mesh()
        .x_desc(x_label)
        .x_labels(series.len())
        .x_label_formatter(&|x| label_at_position(series, *x))
        .y_desc(y_label)
        .label_style(("sans-serif", 20))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart_context
        .draw_series(LineSeries::new(
            series
                .iter()
                .enumerate()
                .map(|(index, (_, value))| (index as f64, *value as f64)),
            &BLUE,
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Creates a vertical bar chart from labelled buckets and saves it as a PNG
/// file.
///
/// Bars are centered on consecutive integer positions of the X-axis, with
/// the axis tick labels showing each bucket's label.
///
/// # Chart Properties
/// * Resolution: 1000x600 pixels
/// * Format: PNG
/// * Bar width: 0.7 of the bucket slot, solid fill
pub fn create_bar_plot(
    bars: &[(String, u64)],
    title: &str,
    x_label: &str,
    y_label: &str,
    output_path: &Path,
) -> Result<()> {
    if bars.is_empty() {
        return Err(PlotError::InvalidData("Bars cannot be empty".to_string()));
    }

    let root = BitMapBackend::new(output_path, (1000, 600));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let y_max = axis_ceiling(bars);

    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(-0.5..bars.len() as f64 - 0.5, 0.0..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart_context
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_label)
        .x_labels(bars.len())
        .x_label_formatter(&|x| label_at_position(bars, *x))
        .y_desc(y_label)
        .label_style(("sans-serif", 20))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart_context
        .draw_series(bars.iter().enumerate().map(|(index, (_, value))| {
            Rectangle::new(
                [
                    (index as f64 - 0.35, 0.0),
                    (index as f64 + 0.35, *value as f64),
                ],
                BLUE.filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Y-axis upper bound with 5% headroom; at least 1.0 so an all-zero series
/// still yields a valid range
fn axis_ceiling(buckets: &[(String, u64)]) -> f64 {
    let max = buckets.iter().map(|(_, value)| *value).max().unwrap_or(0);
    (max as f64 * 1.05).max(1.0)
}

/// Maps an axis tick position to the label of the bucket at that position.
///
/// Ticks that do not fall on a bucket position get an empty label.
fn label_at_position(buckets: &[(String, u64)], x: f64) -> String {
    let index = x.round();
    if index < 0.0 || (x - index).abs() > 0.01 {
        return String::new();
    }

    buckets
        .get(index as usize)
        .map(|(label, _)| label.clone())
        .unwrap_or_default()
}
