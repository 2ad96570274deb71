//! Console overview of the order table
//!
//! Prints the head / column info / descriptive statistics triple that opens
//! the analysis output, formatted as ASCII tables with the [`tabled`] crate.

use crate::common::stats::{mean, percentile, sample_std_dev};
use crate::export::DATE_FORMAT;
use crate::generation::OrderRecord;
use tabled::{Table, Tabled};

/// Number of rows shown in the head table
const HEAD_ROWS: usize = 5;

/// One row of the head table
#[derive(Tabled)]
struct HeadRow {
    #[tabled(rename = "OrderID")]
    order_id: u32,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Product")]
    product: &'static str,
    #[tabled(rename = "Quantity")]
    quantity: u32,
    #[tabled(rename = "Price")]
    price: u32,
    #[tabled(rename = "TotalSale")]
    total_sale: u32,
}

/// One row of the column info table
#[derive(Tabled)]
struct ColumnInfo {
    #[tabled(rename = "Column")]
    name: &'static str,
    #[tabled(rename = "Type")]
    dtype: &'static str,
    #[tabled(rename = "Non-Null")]
    non_null: usize,
}

/// One row of the descriptive statistics table
#[derive(Tabled)]
struct DescribeRow {
    #[tabled(rename = "Statistic")]
    statistic: &'static str,
    #[tabled(rename = "OrderID")]
    order_id: String,
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "TotalSale")]
    total_sale: String,
}

/// Summary statistics of one numeric column
struct ColumnStats {
    count: usize,
    mean: Option<f64>,
    std: Option<f64>,
    min: Option<f64>,
    q25: Option<f64>,
    q50: Option<f64>,
    q75: Option<f64>,
    max: Option<f64>,
}

/// Prints the overview triple: first rows, column info, descriptive stats
pub fn print_overview(orders: &[OrderRecord]) {
    print_titled("Data Head", &format_head_table(orders));
    print_titled("Data Info", &format_info_table(orders));
    print_titled("Descriptive Statistics", &format_describe_table(orders));
}

fn print_titled(title: &str, table: &str) {
    println!("\n{}\n{}\n{}", title, "=".repeat(title.len()), table);
}

/// Formats the first [`HEAD_ROWS`] rows as an ASCII table
fn format_head_table(orders: &[OrderRecord]) -> String {
    if orders.is_empty() {
        return "No rows to display".to_string();
    }

    let rows = orders.iter().take(HEAD_ROWS).map(|order| HeadRow {
        order_id: order.order_id,
        date: order.date.format(DATE_FORMAT).to_string(),
        product: order.product.name(),
        quantity: order.quantity,
        price: order.price,
        total_sale: order.total_sale,
    });

    Table::new(rows).to_string()
}

/// Formats the per-column type and non-null summary.
///
/// The table has no null representation, so every non-null count equals the
/// row count.
fn format_info_table(orders: &[OrderRecord]) -> String {
    let columns = [
        ("OrderID", "u32"),
        ("Date", "datetime (UTC)"),
        ("Product", "string"),
        ("Quantity", "u32"),
        ("Price", "u32"),
        ("TotalSale", "u32"),
    ];

    let rows = columns.into_iter().map(|(name, dtype)| ColumnInfo {
        name,
        dtype,
        non_null: orders.len(),
    });

    Table::new(rows).to_string()
}

/// Formats count/mean/std/min/quartiles/max for the numeric columns.
///
/// Statistics that are undefined for the input (everything but count on an
/// empty table, std on a single row) are shown as `-`.
fn format_describe_table(orders: &[OrderRecord]) -> String {
    let id_stats = column_stats(orders, |o| o.order_id);
    let qty_stats = column_stats(orders, |o| o.quantity);
    let price_stats = column_stats(orders, |o| o.price);
    let total_stats = column_stats(orders, |o| o.total_sale);

    let stat_row = |statistic: &'static str, pick: fn(&ColumnStats) -> Option<f64>| DescribeRow {
        statistic,
        order_id: format_stat(pick(&id_stats)),
        quantity: format_stat(pick(&qty_stats)),
        price: format_stat(pick(&price_stats)),
        total_sale: format_stat(pick(&total_stats)),
    };

    let mut rows = vec![DescribeRow {
        statistic: "count",
        order_id: id_stats.count.to_string(),
        quantity: qty_stats.count.to_string(),
        price: price_stats.count.to_string(),
        total_sale: total_stats.count.to_string(),
    }];
    rows.push(stat_row("mean", |s| s.mean));
    rows.push(stat_row("std", |s| s.std));
    rows.push(stat_row("min", |s| s.min));
    rows.push(stat_row("25%", |s| s.q25));
    rows.push(stat_row("50%", |s| s.q50));
    rows.push(stat_row("75%", |s| s.q75));
    rows.push(stat_row("max", |s| s.max));

    Table::new(rows).to_string()
}

fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{:.2}", value),
        None => "-".to_string(),
    }
}

/// Computes the describe statistics for one numeric column
fn column_stats(orders: &[OrderRecord], extract: fn(&OrderRecord) -> u32) -> ColumnStats {
    let values: Vec<f64> = orders.iter().map(|o| f64::from(extract(o))).collect();
    let mut sorted = values.clone();
    sorted.sort_by(f64::total_cmp);

    ColumnStats {
        count: values.len(),
        mean: mean(&values),
        std: sample_std_dev(&values),
        min: sorted.first().copied(),
        q25: percentile(&sorted, 0.25),
        q50: percentile(&sorted, 0.50),
        q75: percentile(&sorted, 0.75),
        max: sorted.last().copied(),
    }
}
