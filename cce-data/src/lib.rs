//! Data processing for calculation results and report history.
//!
//! This crate turns calculator output and stored reports into forms
//! suitable for display and charting. Nothing here performs I/O.

pub mod chart;
pub mod display;
pub mod history;

pub use chart::{render_history, ChartRenderer};
pub use display::{format_result, CategoryLine, DisplayData};
pub use history::{aggregate, History, HistorySummary, SeriesPoint};
