//! Sales-over-time analysis
//!
//! Buckets order totals into calendar months and renders the monthly sales
//! line chart.

use crate::common::plots::create_line_plot;
use crate::common::PlotError;
use crate::generation::OrderRecord;
use chrono::Datelike;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during the sales-over-time analysis
#[derive(Error, Debug)]
pub enum MonthlySalesError {
    #[error("Failed to generate plot: {0}")]
    PlotGeneration(#[from] PlotError),
}

type Result<T> = core::result::Result<T, MonthlySalesError>;

/// File name of the rendered line chart
pub const SALES_OVER_TIME_FILE: &str = "sales_over_time.png";

/// Sums total sales per calendar month, in chronological order.
///
/// Only months that contain at least one order appear in the result; labels
/// use the `YYYY-MM` form. Every record lands in exactly one bucket, so the
/// bucket totals sum to the table's grand total.
pub fn monthly_sales(orders: &[OrderRecord]) -> Vec<(String, u64)> {
    let mut buckets: BTreeMap<(i32, u32), u64> = BTreeMap::new();

    for order in orders {
        let key = (order.date.year(), order.date.month());
        *buckets.entry(key).or_insert(0) += u64::from(order.total_sale);
    }

    buckets
        .into_iter()
        .map(|((year, month), total)| (format!("{:04}-{:02}", year, month), total))
        .collect()
}

/// Generates the sales-over-time line chart.
///
/// Renders `sales_over_time.png` into `output_dir`, blocking until the image
/// is flushed to disk. An empty table produces no chart.
pub fn generate_monthly_sales_plot(orders: &[OrderRecord], output_dir: &Path) -> Result<()> {
    let series = monthly_sales(orders);
    if series.is_empty() {
        return Ok(());
    }

    let output_path = output_dir.join(SALES_OVER_TIME_FILE);
    create_line_plot(
        &series,
        "Total Sales Over Time",
        "Month",
        "Total Sales",
        &output_path,
    )?;

    Ok(())
}
