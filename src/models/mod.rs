//! Core data models for category-ledger
//!
//! Categories own their ledgers of transaction records; a budget groups
//! uniquely named categories together.

pub mod amount;
pub mod budget;
pub mod category;
pub mod transaction;

pub use amount::{Amount, AmountParseError};
pub use budget::Budget;
pub use category::{Category, CategoryValidationError};
pub use transaction::Transaction;
