//! CLI commands that record ledger entries
//!
//! Each handler loads the budget, applies one operation and saves only if
//! the operation succeeded.

use super::parse_amount;
use crate::error::BudgetResult;
use crate::storage::Storage;

/// Handle the deposit command
pub fn handle_deposit_command(
    storage: &Storage,
    category: &str,
    amount: &str,
    description: &str,
) -> BudgetResult<()> {
    let amount = parse_amount(amount)?;
    let mut budget = storage.load_budget()?;

    let target = budget.find_mut(category)?;
    target.deposit(amount, description);
    let balance = target.balance();
    storage.save_budget(&budget)?;

    println!("Deposited {} into {}", amount.format_fixed(), category);
    println!("  Balance: {}", balance.format_fixed());
    Ok(())
}

/// Handle the withdraw command
pub fn handle_withdraw_command(
    storage: &Storage,
    category: &str,
    amount: &str,
    description: &str,
) -> BudgetResult<()> {
    let amount = parse_amount(amount)?;
    let mut budget = storage.load_budget()?;

    let source = budget.find_mut(category)?;
    source.withdraw(amount, description)?;
    let balance = source.balance();
    storage.save_budget(&budget)?;

    println!("Withdrew {} from {}", amount.format_fixed(), category);
    println!("  Balance: {}", balance.format_fixed());
    Ok(())
}

/// Handle the transfer command
pub fn handle_transfer_command(
    storage: &Storage,
    from: &str,
    to: &str,
    amount: &str,
) -> BudgetResult<()> {
    let amount = parse_amount(amount)?;
    let mut budget = storage.load_budget()?;

    budget.transfer(from, to, amount)?;
    storage.save_budget(&budget)?;

    println!("Transferred {}:", amount.format_fixed());
    println!("  From: {} ({})", from, budget.find(from)?.balance().format_fixed());
    println!("  To:   {} ({})", to, budget.find(to)?.balance().format_fixed());
    Ok(())
}

/// Handle the balance command
pub fn handle_balance_command(storage: &Storage, category: &str) -> BudgetResult<()> {
    let budget = storage.load_budget()?;
    println!("{}", budget.find(category)?.balance().format_fixed());
    Ok(())
}
