//! Common infrastructure modules shared across analysis phases
//!
//! This module provides reusable infrastructure for:
//! - Plotting line and bar charts to PNG files
//! - Numeric helpers for descriptive statistics

pub mod plots;
pub mod stats;

// Re-export commonly used items
pub use plots::PlotError;
