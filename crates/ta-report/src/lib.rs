//! Presentation of analysis results.
//!
//! - Quote summary (last price, daily change, period range)
//! - Currency, large-number and volume formatting
//! - Text and JSON analysis reports
//! - CSV export of prices joined with their indicators

mod export;
mod format;
mod report;
mod summary;

pub use export::{export_csv, export_csv_to_path};
pub use format::{format_change, format_currency, format_volume};
pub use report::AnalysisReport;
pub use summary::QuoteSummary;
