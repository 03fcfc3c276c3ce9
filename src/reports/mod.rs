//! Reports module for category-ledger
//!
//! Provides the spend chart: each category's share of total spending.

pub mod spend_chart;

pub use spend_chart::{create_spend_chart, SpendByCategory, SpendChart, CHART_TITLE};
