//! Category display formatting
//!
//! Renders a category's ledger as the fixed-width report:
//!
//! ```text
//! *************Food*************
//! deposit                 900.00
//! milk, cereal, eggs, bac -45.67
//! Transfer to Entertainme -20.00
//! Total: 834.33
//! ```

use std::fmt;

use crate::models::Category;

/// Width of the `*`-padded title line
pub const HEADER_WIDTH: usize = 30;
/// Descriptions are cut to this many characters
pub const DESCRIPTION_WIDTH: usize = 23;
/// Right-justified width of the amount column
pub const AMOUNT_WIDTH: usize = 7;

/// Format a category ledger report
///
/// The result has no trailing newline.
pub fn format_ledger(category: &Category) -> String {
    let mut lines = Vec::with_capacity(category.ledger().len() + 2);

    lines.push(format!(
        "{:*^width$}",
        category.name(),
        width = HEADER_WIDTH
    ));

    for txn in category.ledger() {
        let description: String = txn.description().chars().take(DESCRIPTION_WIDTH).collect();
        lines.push(format!(
            "{:<dw$}{:>aw$}",
            description,
            txn.amount().format_fixed(),
            dw = DESCRIPTION_WIDTH,
            aw = AMOUNT_WIDTH
        ));
    }

    lines.push(total_line(category));
    lines.join("\n")
}

/// The closing `Total:` line; a category with no records prints a bare `0`
fn total_line(category: &Category) -> String {
    if category.ledger().is_empty() {
        "Total: 0".to_string()
    } else {
        format!("Total: {}", category.balance())
    }
}

/// Format a list of categories with their balances
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'ledger category add <name>' to create one.\n"
            .to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name().chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>12}  {:>7}\n",
        "Category",
        "Balance",
        "Records",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->12}  {:->7}\n",
        "",
        "",
        "",
        width = name_width
    ));

    for category in categories {
        output.push_str(&format!(
            "{:<width$}  {:>12}  {:>7}\n",
            category.name(),
            category.balance().format_fixed(),
            category.ledger().len(),
            width = name_width
        ));
    }

    output
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_ledger(self))
    }
}
