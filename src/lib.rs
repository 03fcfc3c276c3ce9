//! category-ledger - per-category budget ledgers
//!
//! Each budget category keeps its own append-only ledger of signed
//! transaction records. Funds can be withdrawn or moved between categories
//! only when the source balance covers them, and a text chart shows each
//! category's share of total spending.
//!
//! # Architecture
//!
//! - `models`: amounts, transaction records, categories and the budget
//! - `display`: the fixed-width category ledger report
//! - `reports`: the spend chart
//! - `config`: path resolution and user settings
//! - `storage`: JSON persistence for the `ledger` binary
//! - `cli`: command handlers for the `ledger` binary
//! - `error`: error types
//!
//! # Example
//!
//! ```
//! use category_ledger::models::Category;
//! use category_ledger::reports::create_spend_chart;
//!
//! let mut food = Category::new("Food");
//! let mut entertainment = Category::new("Entertainment");
//! food.deposit(900.0, "deposit");
//! food.withdraw(45.67, "milk, cereal, eggs, bacon, bread").unwrap();
//! food.transfer(20.0, &mut entertainment).unwrap();
//!
//! assert_eq!(food.balance().to_string(), "834.33");
//! assert!(food.to_string().starts_with("*************Food*************"));
//!
//! let chart = create_spend_chart(&[food, entertainment]);
//! assert!(chart.starts_with("Percentage spent by category"));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{BudgetError, BudgetResult, LedgerError, LedgerResult};
