//! Storage layer for category-ledger
//!
//! The whole budget lives in one JSON document, `data/budget.json`. Saves
//! go through a sibling `budget.json.tmp` that is renamed over the real
//! file, so a failed save leaves the previous budget readable.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::paths::LedgerPaths;
use crate::error::BudgetError;
use crate::models::Budget;

/// Loads and saves the budget under the configured paths
pub struct Storage {
    paths: LedgerPaths,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: LedgerPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Load the budget, or an empty one if nothing has been saved yet
    ///
    /// A file that does not parse, or that names a category twice, is a
    /// storage error naming the file.
    pub fn load_budget(&self) -> Result<Budget, BudgetError> {
        let path = self.paths.budget_file();
        if !path.exists() {
            debug!(path = %path.display(), "no budget file, starting empty");
            return Ok(Budget::new());
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| storage_error("read", &path, e))?;
        let budget: Budget =
            serde_json::from_str(&contents).map_err(|e| storage_error("parse", &path, e))?;

        debug!(categories = budget.categories().len(), "loaded budget");
        Ok(budget)
    }

    /// Save the budget, replacing the previous file in one rename
    pub fn save_budget(&self, budget: &Budget) -> Result<(), BudgetError> {
        let path = self.paths.budget_file();
        let staged = staging_path(&path);

        let contents = serde_json::to_string_pretty(budget)
            .map_err(|e| storage_error("serialize", &path, e))?;
        fs::write(&staged, contents).map_err(|e| storage_error("write", &staged, e))?;

        if let Err(e) = fs::rename(&staged, &path) {
            let _ = fs::remove_file(&staged);
            return Err(storage_error("replace", &path, e));
        }

        debug!(categories = budget.categories().len(), "saved budget");
        Ok(())
    }

    /// Write an empty budget file unless one already exists
    pub fn initialize(&self) -> Result<(), BudgetError> {
        if !self.paths.budget_file().exists() {
            self.save_budget(&Budget::new())?;
        }
        Ok(())
    }
}

fn staging_path(path: &Path) -> PathBuf {
    path.with_extension("json.tmp")
}

fn storage_error(action: &str, path: &Path, err: impl std::fmt::Display) -> BudgetError {
    BudgetError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}
