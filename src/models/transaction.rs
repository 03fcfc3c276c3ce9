//! Transaction record model
//!
//! A record is a signed amount with an optional description. Records are
//! never edited once they are part of a ledger.

use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// A single ledger entry (positive for inflow, negative for outflow)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    amount: Amount,

    #[serde(default)]
    description: String,
}

impl Transaction {
    /// Create a new record
    pub fn new(amount: impl Into<Amount>, description: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            description: description.into(),
        }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Check if this is an inflow (positive amount)
    pub fn is_inflow(&self) -> bool {
        self.amount.is_positive()
    }

    /// Check if this is an outflow (negative amount)
    pub fn is_outflow(&self) -> bool {
        self.amount.is_negative()
    }
}
