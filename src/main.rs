use anyhow::Result;
use clap::{Parser, Subcommand};

use category_ledger::cli::{
    handle_balance_command, handle_category_command, handle_chart_command,
    handle_deposit_command, handle_show_command, handle_transfer_command,
    handle_withdraw_command, CategoryCommands,
};
use category_ledger::config::{paths::LedgerPaths, settings::Settings};
use category_ledger::logging::init_tracing;
use category_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Per-category budget ledgers with transfers and a spend chart",
    long_about = "Keeps an append-only ledger for each budget category, moves \
                  funds between categories only when the source can cover them, \
                  and charts each category's share of total spending."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory, settings and an empty budget
    Init,

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Record an inflow to a category
    Deposit {
        /// Category name
        category: String,
        /// Amount (e.g. "100" or "100.00")
        amount: String,
        /// Description shown in the ledger report
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Record an outflow from a category
    Withdraw {
        /// Category name
        category: String,
        /// Amount (e.g. "45.67")
        amount: String,
        /// Description shown in the ledger report
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Move funds from one category to another
    Transfer {
        /// Source category
        from: String,
        /// Destination category
        to: String,
        /// Amount to move
        amount: String,
    },

    /// Print the balance of a category
    Balance {
        /// Category name
        category: String,
    },

    /// Print the ledger report of a category
    Show {
        /// Category name
        category: String,
    },

    /// Print the spend chart
    Chart {
        /// Categories to chart, in column order (default: all)
        categories: Vec<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Init) => {
            storage.initialize()?;
            settings.save(&paths)?;
            println!("Initialized category-ledger at: {}", paths.base_dir().display());
            println!("Run 'ledger category add <name>' to create a category.");
        }
        Some(Commands::Category(cmd)) => handle_category_command(&storage, cmd)?,
        Some(Commands::Deposit {
            category,
            amount,
            description,
        }) => handle_deposit_command(&storage, &category, &amount, &description)?,
        Some(Commands::Withdraw {
            category,
            amount,
            description,
        }) => handle_withdraw_command(&storage, &category, &amount, &description)?,
        Some(Commands::Transfer { from, to, amount }) => {
            handle_transfer_command(&storage, &from, &to, &amount)?
        }
        Some(Commands::Balance { category }) => handle_balance_command(&storage, &category)?,
        Some(Commands::Show { category }) => handle_show_command(&storage, &category)?,
        Some(Commands::Chart { categories }) => {
            handle_chart_command(&storage, &settings, &categories)?
        }
        Some(Commands::Config) => {
            println!("category-ledger configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Budget file:    {}", paths.budget_file().display());
            println!();
            println!("Settings:");
            println!("  Chart rounding: {:?}", settings.rounding);
        }
        None => {
            println!("category-ledger - per-category budget ledgers");
            println!();
            println!("Run 'ledger --help' for usage information.");
        }
    }

    Ok(())
}
