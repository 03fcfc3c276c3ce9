//! Path management for category-ledger
//!
//! ## Path Resolution Order
//!
//! 1. `CATEGORY_LEDGER_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/category-ledger` or `~/.config/category-ledger`
//! 3. Windows: `%APPDATA%\category-ledger`

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::BudgetError;

/// Environment variable that overrides the base directory
pub const DIR_ENV_VAR: &str = "CATEGORY_LEDGER_DIR";

const APP_DIR_NAME: &str = "category-ledger";

/// Manages all paths used by category-ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, BudgetError> {
        Self::from_override(std::env::var_os(DIR_ENV_VAR))
    }

    /// Use `custom` as the base directory, or the platform default when it
    /// is unset or empty
    pub fn from_override(custom: Option<OsString>) -> Result<Self, BudgetError> {
        let base_dir = match custom {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to budget.json (categories and their ledgers)
    pub fn budget_file(&self) -> PathBuf {
        self.data_dir().join("budget.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if the ledger has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Ok(PathBuf::from(xdg).join(APP_DIR_NAME));
        }
    }

    let dirs = directories::BaseDirs::new()
        .ok_or_else(|| BudgetError::Config("Could not determine home directory".into()))?;
    Ok(dirs.home_dir().join(".config").join(APP_DIR_NAME))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    let dirs = directories::BaseDirs::new()
        .ok_or_else(|| BudgetError::Config("Could not determine APPDATA directory".into()))?;
    Ok(dirs.config_dir().join(APP_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_override_dir() {
        let temp_dir = TempDir::new().unwrap();
        let custom = temp_dir.path().as_os_str().to_os_string();

        let paths = LedgerPaths::from_override(Some(custom)).unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_empty_override_falls_back_to_default() {
        let unset = LedgerPaths::from_override(None).map(|p| p.base_dir().clone());
        let empty = LedgerPaths::from_override(Some(OsString::new())).map(|p| p.base_dir().clone());

        // Without a home directory both fail the same way
        assert_eq!(unset.is_ok(), empty.is_ok());
        if let (Ok(unset), Ok(empty)) = (unset, empty) {
            assert_eq!(unset, empty);
            assert!(unset.ends_with(APP_DIR_NAME));
        }
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.budget_file(),
            temp_dir.path().join("data").join("budget.json")
        );
    }
}
