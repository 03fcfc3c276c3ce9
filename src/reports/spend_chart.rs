//! Spend chart
//!
//! Aggregates each category's outflows as a share of total spend and renders
//! it as a vertical bar chart:
//!
//! ```text
//! Percentage spent by category
//! 100|
//!  ...
//!  50| o
//!  ...
//!   0| o  o  o
//!     ----------
//!      F  C  A
//!      o  l  u
//! ```
//!
//! Percentages are rounded to the nearest ten. When nothing has been spent
//! every percentage is 0. A category is marked on every row whose tick is at
//! or below its percentage, so the `0` row always carries a marker for each
//! category.

use tracing::debug;

use crate::config::RoundingMode;
use crate::error::BudgetResult;
use crate::models::{Amount, Budget, Category};

/// First line of the chart
pub const CHART_TITLE: &str = "Percentage spent by category";

const MARKER: &str = " o ";
const BLANK: &str = "   ";
const GUTTER: &str = "    ";

/// Spending share of one category
#[derive(Debug, Clone, PartialEq)]
pub struct SpendByCategory {
    /// Category name, also the column label
    pub category_name: String,
    /// Total outflow (positive)
    pub spend: Amount,
    /// Share of total spend, rounded to a multiple of ten
    pub percentage: u32,
}

/// Spend chart over an ordered list of categories
#[derive(Debug, Clone, PartialEq)]
pub struct SpendChart {
    /// One column per category, in the order given
    pub categories: Vec<SpendByCategory>,
    /// Sum of every category's spend
    pub total_spend: Amount,
}

impl SpendChart {
    /// Aggregate spend for the given categories
    pub fn generate<'a, I>(categories: I, rounding: RoundingMode) -> Self
    where
        I: IntoIterator<Item = &'a Category>,
    {
        let spends: Vec<(String, Amount)> = categories
            .into_iter()
            .map(|c| (c.name().to_string(), c.spent()))
            .collect();

        let total_spend: Amount = spends.iter().map(|(_, spend)| spend).sum();

        let categories = spends
            .into_iter()
            .map(|(category_name, spend)| {
                let percentage = if total_spend.is_zero() {
                    0
                } else {
                    rounding.round_to_tens(spend.value() / total_spend.value() * 100.0)
                };
                SpendByCategory {
                    category_name,
                    spend,
                    percentage,
                }
            })
            .collect::<Vec<_>>();

        debug!(
            columns = categories.len(),
            total_spend = %total_spend.format_fixed(),
            "generated spend chart"
        );

        Self {
            categories,
            total_spend,
        }
    }

    /// Aggregate spend for named categories of a budget
    ///
    /// An empty name list charts every category in budget order.
    pub fn for_budget<S: AsRef<str>>(
        budget: &Budget,
        names: &[S],
        rounding: RoundingMode,
    ) -> BudgetResult<Self> {
        let selected = budget.select(names)?;
        Ok(Self::generate(selected, rounding))
    }

    /// Render the chart; the result has no trailing newline
    pub fn format_terminal(&self) -> String {
        let mut lines = Vec::with_capacity(13);
        lines.push(CHART_TITLE.to_string());

        for tick in (0..=100u32).rev().step_by(10) {
            let cells: String = self
                .categories
                .iter()
                .map(|c| if c.percentage >= tick { MARKER } else { BLANK })
                .collect();
            lines.push(format!("{:>3}|{} ", tick, cells));
        }

        lines.push(format!(
            "{}{}",
            GUTTER,
            "-".repeat(3 * self.categories.len() + 1)
        ));

        lines.extend(self.name_rows());
        lines.join("\n")
    }

    /// Category names spelled downwards, one character per row
    ///
    /// Each row is one character wider than the bars above it: letters sit
    /// under the markers and every column keeps two trailing spaces.
    fn name_rows(&self) -> Vec<String> {
        let names: Vec<Vec<char>> = self
            .categories
            .iter()
            .map(|c| c.category_name.chars().collect())
            .collect();
        let height = names.iter().map(Vec::len).max().unwrap_or(0);

        (0..height)
            .map(|row| {
                let cells: String = names
                    .iter()
                    .map(|letters| match letters.get(row) {
                        Some(letter) => format!("{}  ", letter),
                        None => BLANK.to_string(),
                    })
                    .collect();
                format!("{} {} ", GUTTER, cells)
            })
            .collect()
    }
}

/// Render the spend chart for `categories` with the default rounding
pub fn create_spend_chart(categories: &[Category]) -> String {
    SpendChart::generate(categories, RoundingMode::default()).format_terminal()
}
