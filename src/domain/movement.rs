//! Movement
//!
//! Immutable record of a single deposit or withdrawal.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry in an account's history.
///
/// The amount is always stored as given (positive for movements created by
/// the account); the direction lives in `is_deposit`. No validation happens
/// here, the account is responsible for that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    date: NaiveDate,
    amount: Decimal,
    is_deposit: bool,
}

impl Movement {
    pub fn new(date: NaiveDate, amount: Decimal, is_deposit: bool) -> Self {
        Self {
            date,
            amount,
            is_deposit,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn is_deposit(&self) -> bool {
        self.is_deposit
    }

    pub fn is_withdrawal(&self) -> bool {
        !self.is_deposit
    }

    /// True for a deposit made exactly on `date`
    pub fn was_deposited_on(&self, date: NaiveDate) -> bool {
        self.is_deposit && self.date == date
    }

    /// True for a withdrawal made exactly on `date`
    pub fn was_withdrawn_on(&self, date: NaiveDate) -> bool {
        !self.is_deposit && self.date == date
    }

    /// Amount with the sign of its effect on the balance.
    pub fn signed_amount(&self) -> Decimal {
        if self.is_deposit {
            self.amount
        } else {
            -self.amount
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_deposit {
            "deposit"
        } else {
            "withdrawal"
        };
        write!(f, "{} {} {}", self.date, kind, self.amount)
    }
}
