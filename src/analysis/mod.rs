//! Domain-specific analysis modules
//!
//! This module contains the analysis steps performed on the order table:
//! - Console overview (head, column info, descriptive statistics)
//! - Sales-over-time monthly aggregation and line chart
//! - Best-selling product aggregation and bar chart

pub mod monthly;
pub mod overview;
pub mod products;

// Re-export analysis functions for convenience
pub use monthly::generate_monthly_sales_plot;
pub use overview::print_overview;
pub use products::generate_product_sales_plot;
