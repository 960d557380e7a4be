//! cash_account Library
//!
//! A single cash account with daily deposit and withdrawal rules.
//!
//! ```
//! use cash_account::{Account, AccountError};
//! use rust_decimal::Decimal;
//!
//! let mut account = Account::new();
//! account.deposit(Decimal::new(100, 0)).unwrap();
//! assert_eq!(account.balance(), Decimal::new(100, 0));
//!
//! let err = account.withdraw(Decimal::new(500, 0)).unwrap_err();
//! assert!(matches!(err, AccountError::InsufficientBalance { .. }));
//! ```

pub mod aggregate;
pub mod config;
pub mod domain;

pub use aggregate::Account;
pub use config::{AccountLimits, ConfigError, DepositCapScope};
pub use domain::{AccountError, AccountResult, Amount, AmountError, Movement};
