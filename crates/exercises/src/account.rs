//! Bank accounts whose balance can never go negative
//!
//! Balances are whole cents carried as [`Balance`], a value tagged
//! [`NonNegative`]. Operations never mutate an account: they return a new
//! one, so a failed withdrawal leaves the original untouched.

use modelkit_validator::prelude::*;
use serde::{Deserialize, Serialize};

use crate::person::Name;

refinement! {
    /// Zero or more.
    pub NonNegative for i64 => [at_least(0)]
}

/// An amount of money in cents that is never negative.
pub type Balance = Validated<i64, NonNegative>;

/// Errors from account operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    /// Deposits and withdrawals must move a positive amount.
    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(i64),

    /// The withdrawal would overdraw the account.
    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Balance before the attempted withdrawal.
        balance: i64,
        /// Requested amount.
        requested: i64,
    },

    /// The deposit would overflow the balance.
    #[error("balance overflow")]
    Overflow,
}

/// A bank account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    owner: Name,
    balance: Balance,
}

impl Account {
    /// Opens an account with a starting balance.
    pub fn open(owner: Name, balance: Balance) -> Self {
        Self { owner, balance }
    }

    /// The account holder.
    pub fn owner(&self) -> &Name {
        &self.owner
    }

    /// The current balance in cents.
    pub fn balance(&self) -> Balance {
        self.balance
    }

    /// Returns the account after adding `amount`.
    pub fn deposit(&self, amount: i64) -> Result<Self, AccountError> {
        let amount = positive(amount)?;
        let total = self
            .balance
            .get()
            .checked_add(amount)
            .ok_or(AccountError::Overflow)?;
        // The sum of two non-negative amounts is non-negative.
        let balance = Balance::new(total).map_err(|_| AccountError::Overflow)?;
        tracing::debug!(owner = %self.owner, amount, balance = total, "deposit");
        Ok(Self {
            owner: self.owner.clone(),
            balance,
        })
    }

    /// Returns the account after removing `amount`.
    pub fn withdraw(&self, amount: i64) -> Result<Self, AccountError> {
        let amount = positive(amount)?;
        let insufficient = || AccountError::InsufficientFunds {
            balance: *self.balance,
            requested: amount,
        };
        let remaining = self.balance.get().checked_sub(amount).ok_or_else(insufficient)?;
        let balance = Balance::new(remaining).map_err(|_| insufficient())?;
        tracing::debug!(owner = %self.owner, amount, balance = remaining, "withdrawal");
        Ok(Self {
            owner: self.owner.clone(),
            balance,
        })
    }
}

fn positive(amount: i64) -> Result<i64, AccountError> {
    if amount > 0 {
        Ok(amount)
    } else {
        Err(AccountError::NonPositiveAmount(amount))
    }
}
