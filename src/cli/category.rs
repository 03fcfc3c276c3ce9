//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::BudgetResult;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// Create a new, empty category
    Add {
        /// Category name
        name: String,
    },

    /// List all categories with their balances
    List,
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> BudgetResult<()> {
    let mut budget = storage.load_budget()?;

    match cmd {
        CategoryCommands::Add { name } => {
            let category = budget.add_category(name)?;
            println!("Created category: {}", category.name());
            storage.save_budget(&budget)?;
        }

        CategoryCommands::List => {
            print!("{}", format_category_list(budget.categories()));
        }
    }

    Ok(())
}
