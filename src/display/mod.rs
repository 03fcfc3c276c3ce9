//! Display formatting for terminal output
//!
//! Pure formatting functions over borrowed models; nothing here prints.

pub mod category;

pub use category::{format_category_list, format_ledger};
