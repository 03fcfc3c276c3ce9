//! CLI commands for the text reports

use crate::config::Settings;
use crate::display::format_ledger;
use crate::error::BudgetResult;
use crate::reports::SpendChart;
use crate::storage::Storage;

/// Print the ledger report of one category
pub fn handle_show_command(storage: &Storage, category: &str) -> BudgetResult<()> {
    let budget = storage.load_budget()?;
    println!("{}", format_ledger(budget.find(category)?));
    Ok(())
}

/// Print the spend chart for the named categories (all when empty)
pub fn handle_chart_command(
    storage: &Storage,
    settings: &Settings,
    categories: &[String],
) -> BudgetResult<()> {
    let budget = storage.load_budget()?;
    let chart = SpendChart::for_budget(&budget, categories, settings.rounding)?;
    println!("{}", chart.format_terminal());
    Ok(())
}
