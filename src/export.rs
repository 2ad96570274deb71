//! CSV export for the synthesized order table
//!
//! Writes the flat `ecommerce_data.csv` dump: one header row followed by one
//! row per order record.

use crate::generation::OrderRecord;
use csv::WriterBuilder;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while writing the CSV dump
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to flush CSV file: {0}")]
    Flush(#[from] std::io::Error),
}

type Result<T> = core::result::Result<T, ExportError>;

/// Timestamp format used for the `Date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Column header of the CSV dump
const HEADER: [&str; 6] = ["OrderID", "Date", "Product", "Quantity", "Price", "TotalSale"];

/// One CSV data row; field order matches [`HEADER`]
#[derive(Serialize)]
struct CsvRow<'a> {
    order_id: u32,
    date: String,
    product: &'a str,
    quantity: u32,
    price: u32,
    total_sale: u32,
}

/// Writes the order table to `path`, overwriting any existing file.
///
/// The output is one `OrderID,Date,Product,Quantity,Price,TotalSale` header
/// row plus one data row per record. An empty table produces a header-only
/// file.
pub fn write_orders_csv(orders: &[OrderRecord], path: &Path) -> Result<()> {
    // The header is written explicitly so that an empty table still gets one.
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(HEADER)?;

    for order in orders {
        writer.serialize(CsvRow {
            order_id: order.order_id,
            date: order.date.format(DATE_FORMAT).to_string(),
            product: order.product.name(),
            quantity: order.quantity,
            price: order.price,
            total_sale: order.total_sale,
        })?;
    }

    writer.flush()?;
    Ok(())
}
