//! Analysis services for csvscope.
//!
//! Provides:
//! - CSV loading with dynamic typing and delimiter detection
//! - Date parsing for time-column detection and labels
//! - Column classification (time, numeric, boolean, categorical)
//! - Chart builders for the four report views
//! - Table preview rendering
//! - The [`Inspector`] that runs a full pass and owns chart handles

pub mod charts;
pub mod column_classifier;
pub mod csv_loader;
pub mod date_parser;
pub mod inspector;
pub mod table;

pub use column_classifier::classify;
pub use csv_loader::CsvLoader;
pub use inspector::{Analysis, ChartHandles, Inspector, Surfaces};
