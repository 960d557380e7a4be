//! Domain module
//!
//! Core domain types shared by the account.

pub mod amount;
pub mod error;
pub mod movement;

pub use amount::{Amount, AmountError};
pub use error::{AccountError, AccountResult};
pub use movement::Movement;
