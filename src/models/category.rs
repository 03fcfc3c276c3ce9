//! Category model
//!
//! A category is a named budget bucket that owns an append-only ledger of
//! [`Transaction`] records. The balance is always recomputed from the ledger
//! so it can never drift from the records that make it up.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::amount::Amount;
use super::transaction::Transaction;
use crate::error::{LedgerError, LedgerResult};

/// A named budget category and its ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    name: String,

    #[serde(default)]
    ledger: Vec<Transaction>,
}

impl Category {
    /// Create a category with an empty ledger
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ledger: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ledger records in insertion order
    pub fn ledger(&self) -> &[Transaction] {
        &self.ledger
    }

    /// Record an inflow
    ///
    /// The amount is stored as given; passing a positive value is the
    /// caller's responsibility.
    pub fn deposit(&mut self, amount: impl Into<Amount>, description: impl Into<String>) {
        self.append(amount.into(), description.into());
    }

    /// Record an outflow of `amount`, stored as its negation
    ///
    /// Fails without touching the ledger when `amount` exceeds the current
    /// balance. A zero amount succeeds and records nothing.
    pub fn withdraw(
        &mut self,
        amount: impl Into<Amount>,
        description: impl Into<String>,
    ) -> LedgerResult<()> {
        let amount = amount.into();
        if self.check_debit(amount)? {
            self.append(-amount, description.into());
        }
        Ok(())
    }

    /// Sum of every record amount
    pub fn balance(&self) -> Amount {
        self.ledger.iter().map(Transaction::amount).sum()
    }

    /// Whether `amount` can be debited from the current balance
    pub fn check_funds(&self, amount: impl Into<Amount>) -> bool {
        let amount: Amount = amount.into();
        amount <= self.balance()
    }

    /// Move `amount` from this category into `target`
    ///
    /// The source is debited first and the target credited only after the
    /// debit has been recorded. On failure neither ledger changes.
    pub fn transfer(&mut self, amount: impl Into<Amount>, target: &mut Category) -> LedgerResult<()> {
        let amount = amount.into();
        if !self.check_debit(amount)? {
            return Ok(());
        }

        self.append(-amount, format!("Transfer to {}", target.name));
        target.append(amount, format!("Transfer from {}", self.name));

        info!(
            from = %self.name,
            to = %target.name,
            amount = %amount.format_fixed(),
            "transfer completed"
        );
        Ok(())
    }

    /// Total outflow: absolute value of the sum of all negative records
    pub fn spent(&self) -> Amount {
        self.ledger
            .iter()
            .filter(|txn| txn.is_outflow())
            .map(Transaction::amount)
            .sum::<Amount>()
            .abs()
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        Ok(())
    }

    /// Validate a debit and report whether a record needs appending
    fn check_debit(&self, amount: Amount) -> LedgerResult<bool> {
        if !amount.is_finite() || amount.is_negative() {
            warn!(category = %self.name, amount = amount.value(), "rejected invalid debit amount");
            return Err(LedgerError::InvalidAmount(amount.value()));
        }

        if amount.is_zero() {
            return Ok(false);
        }

        if !self.check_funds(amount) {
            let available = self.balance();
            warn!(
                category = %self.name,
                needed = %amount.format_fixed(),
                available = %available.format_fixed(),
                "insufficient funds"
            );
            return Err(LedgerError::InsufficientFunds {
                category: self.name.clone(),
                needed: amount.value(),
                available: available.value(),
            });
        }

        Ok(true)
    }

    fn append(&mut self, amount: Amount, description: String) {
        debug!(category = %self.name, amount = amount.value(), %description, "appending record");
        self.ledger.push(Transaction::new(amount, description));
    }
}

/// Validation errors for categories
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    #[error("Category name cannot be empty")]
    EmptyName,
}
