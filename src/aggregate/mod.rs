//! Aggregate module
//!
//! The account aggregate and its business rules.

pub mod account;

pub use account::Account;
