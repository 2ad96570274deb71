mod analysis;
mod common;
mod export;
mod generation;

use std::path::Path;
use thiserror::Error;

// Import analysis functions
use analysis::monthly::{MonthlySalesError, SALES_OVER_TIME_FILE};
use analysis::products::{ProductSalesError, SALES_BY_PRODUCT_FILE};
use analysis::{generate_monthly_sales_plot, generate_product_sales_plot, print_overview};

// Import generation and export functionality
use export::{write_orders_csv, ExportError};
use generation::synthesize_orders;

/// Number of orders synthesized per run
const DEFAULT_ORDER_COUNT: usize = 1000;

/// File name of the CSV dump
const CSV_FILE: &str = "ecommerce_data.csv";

/// Errors that can occur while producing the report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV export error: {0}")]
    Export(#[from] ExportError),

    #[error("Sales-over-time analysis error: {0}")]
    MonthlySales(#[from] MonthlySalesError),

    #[error("Product sales analysis error: {0}")]
    ProductSales(#[from] ProductSalesError),
}

type Result<T> = core::result::Result<T, ReportError>;

/// Runs the full report pipeline into `output_dir`.
///
/// Order of effects: synthesize the table, dump it to CSV, print the console
/// overview, render the monthly sales line chart, render the per-product bar
/// chart. Each file is fully written before the next step begins.
fn run(order_count: usize, seed: Option<u64>, output_dir: &Path) -> Result<()> {
    println!("Generating dummy data...");
    let orders = synthesize_orders(order_count, seed);
    println!("Data generation complete.");

    write_orders_csv(&orders, &output_dir.join(CSV_FILE))?;
    println!("Saved data to '{}'", CSV_FILE);

    print_overview(&orders);

    println!("\nAnalyzing sales over time...");
    generate_monthly_sales_plot(&orders, output_dir)?;
    println!("Saved '{}'", SALES_OVER_TIME_FILE);

    println!("\nAnalyzing best-selling products...");
    generate_product_sales_plot(&orders, output_dir)?;
    println!("Saved '{}'", SALES_BY_PRODUCT_FILE);

    println!("\nAnalysis complete.");
    Ok(())
}

fn main() -> Result<()> {
    run(DEFAULT_ORDER_COUNT, None, Path::new("."))
}
