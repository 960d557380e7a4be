//! Configuration module
//!
//! Business-rule limits for an account, loadable from environment variables.

use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;

/// Default number of deposits allowed
pub const DEFAULT_MAX_DAILY_DEPOSITS: usize = 3;

/// Default ceiling for the total withdrawn on one calendar date
pub const DEFAULT_DAILY_WITHDRAWAL_LIMIT: Decimal = Decimal::ONE_THOUSAND;

/// Which deposits count against the deposit cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepositCapScope {
    /// Every deposit ever recorded counts, whatever its date.
    #[default]
    AllTime,
    /// Only deposits dated on the day of the new deposit count.
    PerDay,
}

impl FromStr for DepositCapScope {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all_time" => Ok(Self::AllTime),
            "per_day" => Ok(Self::PerDay),
            _ => Err(ConfigError::InvalidValue("ACCOUNT_DEPOSIT_CAP_SCOPE")),
        }
    }
}

/// Account limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountLimits {
    /// Maximum number of deposits (see `deposit_cap_scope`)
    pub max_daily_deposits: usize,

    /// Maximum total withdrawn per calendar date
    pub daily_withdrawal_limit: Decimal,

    /// Which deposits count against `max_daily_deposits`
    pub deposit_cap_scope: DepositCapScope,
}

impl Default for AccountLimits {
    fn default() -> Self {
        Self {
            max_daily_deposits: DEFAULT_MAX_DAILY_DEPOSITS,
            daily_withdrawal_limit: DEFAULT_DAILY_WITHDRAWAL_LIMIT,
            deposit_cap_scope: DepositCapScope::AllTime,
        }
    }
}

impl AccountLimits {
    /// Load limits from environment variables, using defaults for unset ones
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load limits through `lookup`, which returns the raw value of a variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_daily_deposits = match lookup("ACCOUNT_MAX_DAILY_DEPOSITS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("ACCOUNT_MAX_DAILY_DEPOSITS"))?,
            None => defaults.max_daily_deposits,
        };

        let daily_withdrawal_limit = match lookup("ACCOUNT_DAILY_WITHDRAWAL_LIMIT") {
            Some(raw) => Decimal::from_str(raw.trim())
                .ok()
                .filter(|limit| *limit > Decimal::ZERO)
                .ok_or(ConfigError::InvalidValue("ACCOUNT_DAILY_WITHDRAWAL_LIMIT"))?,
            None => defaults.daily_withdrawal_limit,
        };

        let deposit_cap_scope = match lookup("ACCOUNT_DEPOSIT_CAP_SCOPE") {
            Some(raw) => raw.parse()?,
            None => defaults.deposit_cap_scope,
        };

        Ok(Self {
            max_daily_deposits,
            daily_withdrawal_limit,
            deposit_cap_scope,
        })
    }
}

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let limits = AccountLimits::default();

        assert_eq!(limits.max_daily_deposits, 3);
        assert_eq!(limits.daily_withdrawal_limit, dec!(1000));
        assert_eq!(limits.deposit_cap_scope, DepositCapScope::AllTime);
    }

    #[test]
    fn test_lookup_without_vars_uses_defaults() {
        let limits = AccountLimits::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(limits, AccountLimits::default());
    }

    #[test]
    fn test_lookup_overrides() {
        let limits = AccountLimits::from_lookup(lookup_from(&[
            ("ACCOUNT_MAX_DAILY_DEPOSITS", "5"),
            ("ACCOUNT_DAILY_WITHDRAWAL_LIMIT", "250.50"),
            ("ACCOUNT_DEPOSIT_CAP_SCOPE", "per_day"),
        ]))
        .unwrap();

        assert_eq!(limits.max_daily_deposits, 5);
        assert_eq!(limits.daily_withdrawal_limit, dec!(250.50));
        assert_eq!(limits.deposit_cap_scope, DepositCapScope::PerDay);
    }

    #[test]
    fn test_invalid_values() {
        let err = AccountLimits::from_lookup(lookup_from(&[("ACCOUNT_MAX_DAILY_DEPOSITS", "-1")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue("ACCOUNT_MAX_DAILY_DEPOSITS"));

        let err =
            AccountLimits::from_lookup(lookup_from(&[("ACCOUNT_DAILY_WITHDRAWAL_LIMIT", "0")]))
                .unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue("ACCOUNT_DAILY_WITHDRAWAL_LIMIT"));

        let err =
            AccountLimits::from_lookup(lookup_from(&[("ACCOUNT_DEPOSIT_CAP_SCOPE", "weekly")]))
                .unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue("ACCOUNT_DEPOSIT_CAP_SCOPE"));
    }

    #[test]
    fn test_scope_parse_is_case_insensitive() {
        assert_eq!("ALL_TIME".parse::<DepositCapScope>(), Ok(DepositCapScope::AllTime));
        assert_eq!(" Per_Day ".parse::<DepositCapScope>(), Ok(DepositCapScope::PerDay));
    }
}
