//! Domain Error Types
//!
//! Business rule violations raised by the account.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for account operations
pub type AccountResult<T> = Result<T, AccountError>;

/// Errors returned by [`Account`](crate::aggregate::Account) operations.
///
/// Every variant aborts the triggering call before the account is mutated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// Deposit or withdrawal amount was zero or negative
    #[error("{amount}: amount must be a positive value")]
    NonPositiveAmount { amount: Decimal },

    /// The deposit cap has been reached
    #[error("Already made {limit} daily deposits")]
    TooManyDailyDeposits { limit: usize },

    /// The withdrawal would leave the balance below zero
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        requested: Decimal,
        available: Decimal,
    },

    /// The withdrawal would exceed the daily ceiling
    #[error("Cannot withdraw more than {limit} per day, remaining: {remaining}")]
    DailyWithdrawalLimitExceeded { limit: Decimal, remaining: Decimal },

    /// The deposit does not fit in the balance's decimal range
    #[error("Balance overflow")]
    BalanceOverflow,

    /// Backfilled history sums past the decimal range
    #[error("Movement history total overflows")]
    HistoryOverflow,
}

impl AccountError {
    /// Create an insufficient balance error
    pub fn insufficient_balance(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientBalance {
            requested,
            available,
        }
    }

    /// Create a daily withdrawal limit error
    pub fn daily_withdrawal_limit(limit: Decimal, remaining: Decimal) -> Self {
        Self::DailyWithdrawalLimitExceeded { limit, remaining }
    }

    /// Check if the amount itself was rejected
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::NonPositiveAmount { .. })
    }

    /// Check if a business limit was hit (retrying later may succeed)
    pub fn is_limit_error(&self) -> bool {
        matches!(
            self,
            Self::TooManyDailyDeposits { .. }
                | Self::InsufficientBalance { .. }
                | Self::DailyWithdrawalLimitExceeded { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_insufficient_balance_error() {
        let err = AccountError::insufficient_balance(dec!(100), dec!(50));

        assert!(err.is_limit_error());
        assert!(!err.is_validation_error());
        assert!(err.to_string().contains("100"));
        assert!(err.to_string().contains("50"));
    }

    #[test]
    fn test_daily_limit_reports_remaining() {
        let err = AccountError::daily_withdrawal_limit(dec!(1000), dec!(300));

        assert!(err.is_limit_error());
        assert_eq!(
            err.to_string(),
            "Cannot withdraw more than 1000 per day, remaining: 300"
        );
    }

    #[test]
    fn test_non_positive_is_validation_error() {
        let err = AccountError::NonPositiveAmount { amount: dec!(-5) };

        assert!(err.is_validation_error());
        assert!(!err.is_limit_error());
        assert_eq!(err.to_string(), "-5: amount must be a positive value");
    }

    #[test]
    fn test_too_many_deposits_message() {
        let err = AccountError::TooManyDailyDeposits { limit: 3 };
        assert_eq!(err.to_string(), "Already made 3 daily deposits");
    }
}
