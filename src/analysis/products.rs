//! Best-selling product analysis
//!
//! Groups order totals by product and renders the per-product sales bar
//! chart.

use crate::common::plots::create_bar_plot;
use crate::common::PlotError;
use crate::generation::{OrderRecord, Product};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during the product sales analysis
#[derive(Error, Debug)]
pub enum ProductSalesError {
    #[error("Failed to generate plot: {0}")]
    PlotGeneration(#[from] PlotError),
}

type Result<T> = core::result::Result<T, ProductSalesError>;

/// File name of the rendered bar chart
pub const SALES_BY_PRODUCT_FILE: &str = "sales_by_product.png";

/// Sums total sales per product, sorted descending by revenue.
///
/// Only products that appear in the table are included. Ties are broken by
/// product name so the ordering is deterministic.
pub fn product_sales(orders: &[OrderRecord]) -> Vec<(Product, u64)> {
    let mut totals: HashMap<Product, u64> = HashMap::new();

    for order in orders {
        *totals.entry(order.product).or_insert(0) += u64::from(order.total_sale);
    }

    let mut ranked: Vec<(Product, u64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.name().cmp(b.0.name())));
    ranked
}

/// Generates the sales-by-product bar chart.
///
/// Renders `sales_by_product.png` into `output_dir`, blocking until the
/// image is flushed to disk. An empty table produces no chart.
pub fn generate_product_sales_plot(orders: &[OrderRecord], output_dir: &Path) -> Result<()> {
    let ranked = product_sales(orders);
    if ranked.is_empty() {
        return Ok(());
    }

    let bars: Vec<(String, u64)> = ranked
        .iter()
        .map(|(product, total)| (product.name().to_string(), *total))
        .collect();

    let output_path = output_dir.join(SALES_BY_PRODUCT_FILE);
    create_bar_plot(
        &bars,
        "Total Sales by Product",
        "Product",
        "Total Sales",
        &output_path,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::synthesize_orders;
    use chrono::{TimeZone, Utc};

    fn order(product: Product, quantity: u32) -> OrderRecord {
        let price = product.unit_price();
        OrderRecord {
            order_id: 1,
            date: Utc.with_ymd_and_hms(2026, 2, 1, 8, 30, 0).unwrap(),
            product,
            quantity,
            price,
            total_sale: quantity * price,
        }
    }

    #[test]
    fn test_grouping_and_descending_sort() {
        let orders = vec![
            order(Product::Mouse, 4),      // 100
            order(Product::Laptop, 1),     // 1200
            order(Product::Mouse, 2),      // 50
            order(Product::Headphones, 3), // 300
        ];

        let ranked = product_sales(&orders);

        assert_eq!(
            ranked,
            vec![
                (Product::Laptop, 1200),
                (Product::Headphones, 300),
                (Product::Mouse, 150),
            ]
        );
    }

    #[test]
    fn test_ties_break_on_product_name() {
        let orders = vec![
            order(Product::Webcam, 2),   // 100
            order(Product::Mouse, 4),    // 100
            order(Product::Keyboard, 4), // 300
        ];

        let ranked = product_sales(&orders);

        assert_eq!(
            ranked,
            vec![
                (Product::Keyboard, 300),
                (Product::Mouse, 100),
                (Product::Webcam, 100),
            ]
        );
    }

    #[test]
    fn test_group_totals_partition_grand_total() {
        let orders = synthesize_orders(1000, Some(31));
        let ranked = product_sales(&orders);

        let grand_total: u64 = orders.iter().map(|o| u64::from(o.total_sale)).sum();
        let grouped_total: u64 = ranked.iter().map(|(_, total)| *total).sum();
        assert_eq!(grouped_total, grand_total);

        for (product, total) in &ranked {
            let expected: u64 = orders
                .iter()
                .filter(|o| o.product == *product)
                .map(|o| u64::from(o.total_sale))
                .sum();
            assert_eq!(*total, expected);
        }
    }

    #[test]
    fn test_empty_table_yields_empty_grouping() {
        assert!(product_sales(&[]).is_empty());
    }

    #[test]
    fn test_empty_table_skips_chart() {
        let temp_dir = tempfile::tempdir().unwrap();

        generate_product_sales_plot(&[], temp_dir.path()).unwrap();

        assert!(!temp_dir.path().join(SALES_BY_PRODUCT_FILE).exists());
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_chart_is_rendered() {
        let temp_dir = tempfile::tempdir().unwrap();
        let orders = synthesize_orders(100, Some(37));

        generate_product_sales_plot(&orders, temp_dir.path()).unwrap();

        let chart = temp_dir.path().join(SALES_BY_PRODUCT_FILE);
        assert!(chart.exists());
        assert!(std::fs::metadata(&chart).unwrap().len() > 0);
    }
}
