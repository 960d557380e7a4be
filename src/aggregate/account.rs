//! Account Aggregate
//!
//! Account holds a running balance and the ordered history of movements.
//! Deposits and withdrawals are validated against that history before any
//! state changes.
//!
//! Mutating operations take `&mut self`; callers sharing an account across
//! threads wrap it in a `Mutex` so validation and mutation stay atomic.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::config::{AccountLimits, DepositCapScope};
use crate::domain::{AccountError, AccountResult, Amount, Movement};

/// Account Aggregate
///
/// # Invariants
/// - A withdrawal never drives the balance below zero
/// - The number of deposits never exceeds `max_daily_deposits` (all-time by default)
/// - Withdrawals on one date never exceed `daily_withdrawal_limit`
///
/// `record_movement` and `replace_movements` bypass every rule above and
/// leave the balance alone; they exist for seeding history.
#[derive(Debug, Clone, Default)]
pub struct Account {
    /// Current balance
    balance: Decimal,

    /// Append-only history, in insertion order
    movements: Vec<Movement>,

    /// Business rules applied to deposits and withdrawals
    limits: AccountLimits,
}

impl Account {
    /// Create an account with a zero balance and default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account with an initial balance and default limits
    pub fn with_balance(initial_balance: Decimal) -> Self {
        Self::with_limits(initial_balance, AccountLimits::default())
    }

    /// Create an account with an initial balance and custom limits
    pub fn with_limits(initial_balance: Decimal, limits: AccountLimits) -> Self {
        Self {
            balance: initial_balance,
            movements: Vec::new(),
            limits,
        }
    }

    // =========================================================================
    // Deposit
    // =========================================================================

    /// Deposit `amount`, dated today
    pub fn deposit(&mut self, amount: Decimal) -> AccountResult<()> {
        self.deposit_on(today(), amount)
    }

    /// Deposit `amount`, dated `date`
    ///
    /// # Errors
    /// - `NonPositiveAmount` if amount <= 0
    /// - `TooManyDailyDeposits` if the deposit cap is already reached
    /// - `BalanceOverflow` if the new balance does not fit
    pub fn deposit_on(&mut self, date: NaiveDate, amount: Decimal) -> AccountResult<()> {
        let amount = self.validate_deposit(date, amount).inspect_err(|e| {
            tracing::warn!(%date, %amount, error = %e, "Deposit rejected");
        })?;

        let new_balance = self
            .balance
            .checked_add(amount.value())
            .ok_or(AccountError::BalanceOverflow)?;

        self.movements.push(Movement::new(date, amount.value(), true));
        self.balance = new_balance;

        tracing::debug!(%date, %amount, balance = %self.balance, "Deposit accepted");
        Ok(())
    }

    fn validate_deposit(&self, date: NaiveDate, amount: Decimal) -> AccountResult<Amount> {
        let amount = positive(amount)?;

        let deposits = match self.limits.deposit_cap_scope {
            DepositCapScope::AllTime => self.movements.iter().filter(|m| m.is_deposit()).count(),
            DepositCapScope::PerDay => self.deposit_count_on(date),
        };
        if deposits >= self.limits.max_daily_deposits {
            return Err(AccountError::TooManyDailyDeposits {
                limit: self.limits.max_daily_deposits,
            });
        }

        Ok(amount)
    }

    // =========================================================================
    // Withdraw
    // =========================================================================

    /// Withdraw `amount`, dated today
    pub fn withdraw(&mut self, amount: Decimal) -> AccountResult<()> {
        self.withdraw_on(today(), amount)
    }

    /// Withdraw `amount`, dated `date`
    ///
    /// # Errors
    /// - `NonPositiveAmount` if amount <= 0
    /// - `InsufficientBalance` if the balance would go below zero
    /// - `DailyWithdrawalLimitExceeded` if the total withdrawn on `date`
    ///   would pass the daily limit; carries the amount still allowed
    pub fn withdraw_on(&mut self, date: NaiveDate, amount: Decimal) -> AccountResult<()> {
        let amount = self.validate_withdrawal(date, amount).inspect_err(|e| {
            tracing::warn!(%date, %amount, error = %e, "Withdrawal rejected");
        })?;

        self.movements.push(Movement::new(date, amount.value(), false));
        self.balance -= amount.value();

        tracing::debug!(%date, %amount, balance = %self.balance, "Withdrawal accepted");
        Ok(())
    }

    fn validate_withdrawal(&self, date: NaiveDate, amount: Decimal) -> AccountResult<Amount> {
        let amount = positive(amount)?;

        if amount.value() > self.balance {
            return Err(AccountError::insufficient_balance(amount.value(), self.balance));
        }

        let remaining = self
            .checked_total(|m| m.was_withdrawn_on(date))
            .and_then(|total| self.limits.daily_withdrawal_limit.checked_sub(total))
            .ok_or(AccountError::HistoryOverflow)?;
        if amount.value() > remaining {
            return Err(AccountError::daily_withdrawal_limit(
                self.limits.daily_withdrawal_limit,
                remaining,
            ));
        }

        Ok(amount)
    }

    // =========================================================================
    // History seeding
    // =========================================================================

    /// Append a movement without validation or balance update
    pub fn record_movement(&mut self, date: NaiveDate, amount: Decimal, is_deposit: bool) {
        tracing::debug!(%date, %amount, is_deposit, "Movement recorded");
        self.movements.push(Movement::new(date, amount, is_deposit));
    }

    /// Replace the whole history without validation or balance update
    pub fn replace_movements(&mut self, movements: Vec<Movement>) {
        tracing::debug!(count = movements.len(), "Movement history replaced");
        self.movements = movements;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Sum of withdrawals dated exactly `date`.
    /// Saturates at the decimal range when backfilled amounts overflow it.
    pub fn total_withdrawn_on(&self, date: NaiveDate) -> Decimal {
        self.saturating_total(|m| m.was_withdrawn_on(date))
    }

    /// Sum of deposits dated exactly `date`, saturating like `total_withdrawn_on`
    pub fn total_deposited_on(&self, date: NaiveDate) -> Decimal {
        self.saturating_total(|m| m.was_deposited_on(date))
    }

    /// Number of deposits dated exactly `date`
    pub fn deposit_count_on(&self, date: NaiveDate) -> usize {
        self.movements
            .iter()
            .filter(|m| m.was_deposited_on(date))
            .count()
    }

    /// How much can still be withdrawn on `date` before hitting the daily limit.
    /// Negative when backfilled history already exceeds it.
    pub fn remaining_withdrawal_on(&self, date: NaiveDate) -> Decimal {
        self.limits
            .daily_withdrawal_limit
            .saturating_sub(self.total_withdrawn_on(date))
    }

    /// Sum of the matching amounts, `None` on overflow
    fn checked_total<F>(&self, pred: F) -> Option<Decimal>
    where
        F: Fn(&Movement) -> bool,
    {
        self.movements
            .iter()
            .filter(|m| pred(*m))
            .try_fold(Decimal::ZERO, |acc, m| acc.checked_add(m.amount()))
    }

    fn saturating_total<F>(&self, pred: F) -> Decimal
    where
        F: Fn(&Movement) -> bool,
    {
        self.movements
            .iter()
            .filter(|m| pred(*m))
            .fold(Decimal::ZERO, |acc, m| acc.saturating_add(m.amount()))
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    pub fn limits(&self) -> &AccountLimits {
        &self.limits
    }
}

fn positive(amount: Decimal) -> AccountResult<Amount> {
    Amount::new(amount).map_err(|_| AccountError::NonPositiveAmount { amount })
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
