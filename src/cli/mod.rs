//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger core.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use report::{handle_chart_command, handle_show_command};
pub use transaction::{
    handle_balance_command, handle_deposit_command, handle_transfer_command,
    handle_withdraw_command,
};

use crate::error::{BudgetError, BudgetResult};
use crate::models::Amount;

/// Parse an amount argument
pub(crate) fn parse_amount(input: &str) -> BudgetResult<Amount> {
    Amount::parse(input).map_err(|e| {
        BudgetError::Validation(format!(
            "{}. Use a format like '100.00' or '100'",
            e
        ))
    })
}
