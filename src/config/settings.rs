//! User settings for category-ledger
//!
//! Manages report preferences. Every field has a default so older or
//! partial settings files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::BudgetError;

/// Tie-break used when rounding spend percentages to the nearest ten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Exact halves go to the even ten (25 -> 20, 35 -> 40)
    #[default]
    HalfEven,
    /// Exact halves go up (25 -> 30)
    HalfAwayFromZero,
}

impl RoundingMode {
    /// Round a percentage to the nearest multiple of ten, clamped to 0..=100
    pub fn round_to_tens(self, percentage: f64) -> u32 {
        let tens = percentage / 10.0;
        let rounded = match self {
            Self::HalfEven => tens.round_ties_even(),
            Self::HalfAwayFromZero => tens.round(),
        };
        // NaN saturates to 0
        (rounded * 10.0).clamp(0.0, 100.0) as u32
    }
}

/// User settings for category-ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Rounding used by the spend chart
    #[serde(default)]
    pub rounding: RoundingMode,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            rounding: RoundingMode::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not persisted until the caller saves
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
