//! Budget model
//!
//! A budget is an ordered collection of uniquely named categories. Names
//! are the lookup key, so transfers and charts can be driven by name.

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::category::Category;
use crate::error::{BudgetError, BudgetResult};

/// The set of categories being tracked
///
/// Deserialization runs [`Budget::validate`], so a stored budget with a
/// blank or repeated name is refused instead of loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BudgetDocument")]
pub struct Budget {
    #[serde(default)]
    categories: Vec<Category>,
}

/// Unchecked on-disk shape of a [`Budget`]
#[derive(Deserialize)]
struct BudgetDocument {
    #[serde(default)]
    categories: Vec<Category>,
}

impl TryFrom<BudgetDocument> for Budget {
    type Error = BudgetError;

    fn try_from(doc: BudgetDocument) -> Result<Self, Self::Error> {
        let budget = Self {
            categories: doc.categories,
        };
        budget.validate()?;
        Ok(budget)
    }
}

impl Budget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new, empty category
    pub fn add_category(&mut self, name: impl Into<String>) -> BudgetResult<&mut Category> {
        let category = Category::new(name);
        category
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        if self.position(category.name()).is_some() {
            return Err(BudgetError::duplicate_category(category.name()));
        }

        self.categories.push(category);
        let index = self.categories.len() - 1;
        Ok(&mut self.categories[index])
    }

    /// Categories in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(Category::name)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.name() == name)
    }

    /// Look up a category, failing with a "not found" error
    pub fn find(&self, name: &str) -> BudgetResult<&Category> {
        self.get(name)
            .ok_or_else(|| BudgetError::category_not_found(name))
    }

    /// Look up a category mutably, failing with a "not found" error
    pub fn find_mut(&mut self, name: &str) -> BudgetResult<&mut Category> {
        self.get_mut(name)
            .ok_or_else(|| BudgetError::category_not_found(name))
    }

    /// Resolve names to categories, keeping the requested order
    ///
    /// An empty list selects every category.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> BudgetResult<Vec<&Category>> {
        if names.is_empty() {
            return Ok(self.categories.iter().collect());
        }
        names.iter().map(|name| self.find(name.as_ref())).collect()
    }

    /// Transfer between two categories of this budget by name
    pub fn transfer(&mut self, from: &str, to: &str, amount: impl Into<Amount>) -> BudgetResult<()> {
        let source = self
            .position(from)
            .ok_or_else(|| BudgetError::category_not_found(from))?;
        let target = self
            .position(to)
            .ok_or_else(|| BudgetError::category_not_found(to))?;

        if source == target {
            return Err(BudgetError::Validation(format!(
                "Cannot transfer from '{}' to itself",
                from
            )));
        }

        let (source, target) = pair_mut(&mut self.categories, source, target);
        source.transfer(amount, target)?;
        Ok(())
    }

    /// Check that every name is non-blank and appears once
    pub fn validate(&self) -> BudgetResult<()> {
        for (index, category) in self.categories.iter().enumerate() {
            category
                .validate()
                .map_err(|e| BudgetError::Validation(e.to_string()))?;

            if self.categories[..index]
                .iter()
                .any(|earlier| earlier.name() == category.name())
            {
                return Err(BudgetError::duplicate_category(category.name()));
            }
        }
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name() == name)
    }
}

/// Borrow two distinct elements mutably
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Budget {
        let mut budget = Budget::new();
        budget.add_category("Food").unwrap().deposit(100.0, "deposit");
        budget.add_category("Clothing").unwrap();
        budget.add_category("Auto").unwrap().deposit(50.0, "deposit");
        budget
    }

    #[test]
    fn test_add_category_keeps_order() {
        let budget = sample();
        let names: Vec<_> = budget.names().collect();
        assert_eq!(names, vec!["Food", "Clothing", "Auto"]);
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let mut budget = sample();
        let err = budget.add_category("Food").unwrap_err();
        assert!(matches!(err, BudgetError::Duplicate { .. }));
        assert_eq!(budget.categories().len(), 3);
    }

    #[test]
    fn test_add_empty_name_rejected() {
        let mut budget = Budget::new();
        assert!(matches!(
            budget.add_category(" "),
            Err(BudgetError::Validation(_))
        ));
        assert!(budget.is_empty());
    }

    #[test]
    fn test_find() {
        let budget = sample();
        assert_eq!(budget.find("Auto").unwrap().balance().value(), 50.0);
        assert!(budget.find("auto").unwrap_err().is_not_found());
    }

    #[test]
    fn test_transfer_by_name_both_directions() {
        let mut budget = sample();
        budget.transfer("Food", "Auto", 30.0).unwrap();
        budget.transfer("Auto", "Clothing", 80.0).unwrap();

        assert_eq!(budget.find("Food").unwrap().balance().value(), 70.0);
        assert_eq!(budget.find("Auto").unwrap().balance().value(), 0.0);
        assert_eq!(budget.find("Clothing").unwrap().balance().value(), 80.0);
        assert_eq!(
            budget.find("Clothing").unwrap().ledger()[0].description(),
            "Transfer from Auto"
        );
    }

    #[test]
    fn test_transfer_failures() {
        let mut budget = sample();

        assert!(budget
            .transfer("Clothing", "Food", 1.0)
            .unwrap_err()
            .is_insufficient_funds());
        assert!(budget.transfer("Food", "Travel", 1.0).unwrap_err().is_not_found());
        assert!(matches!(
            budget.transfer("Food", "Food", 1.0),
            Err(BudgetError::Validation(_))
        ));

        assert_eq!(budget, sample());
    }

    #[test]
    fn test_select() {
        let budget = sample();
        let all = budget.select::<&str>(&[]).unwrap();
        assert_eq!(all.len(), 3);

        let picked = budget.select(&["Auto", "Food"]).unwrap();
        assert_eq!(picked[0].name(), "Auto");
        assert_eq!(picked[1].name(), "Food");

        assert!(budget.select(&["Nope"]).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let budget = sample();
        let json = serde_json::to_string(&budget).unwrap();
        let loaded: Budget = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, budget);
    }

    #[test]
    fn test_deserialize_rejects_repeated_names() {
        let json = r#"{"categories": [
            {"name": "Food", "ledger": [{"amount": 10.0, "description": "deposit"}]},
            {"name": "Food", "ledger": []}
        ]}"#;
        let err = serde_json::from_str::<Budget>(json).unwrap_err();
        assert!(err.to_string().contains("Category already exists: Food"));
    }

    #[test]
    fn test_deserialize_rejects_blank_name() {
        let json = r#"{"categories": [{"name": "  "}]}"#;
        let err = serde_json::from_str::<Budget>(json).unwrap_err();
        assert!(err.to_string().contains("Category name cannot be empty"));
    }

    #[test]
    fn test_deserialize_missing_categories_is_empty() {
        let budget: Budget = serde_json::from_str("{}").unwrap();
        assert!(budget.is_empty());
        assert!(budget.validate().is_ok());
    }
}
