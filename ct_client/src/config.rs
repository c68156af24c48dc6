//! Host settings gathered from the environment and the command line.
//!
//! Flags take priority over `CT_*` environment variables, which take
//! priority over the table defaults.

use craps_table::{TableConfig, game::PropOdds, table::ConfigError as TableConfigError};
use pico_args::Arguments;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
    #[error(transparent)]
    Args(#[from] pico_args::Error),
    #[error(transparent)]
    Table(#[from] TableConfigError),
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub table: TableConfig,
    /// Fixed RNG seed for a repeatable session.
    pub seed: Option<u64>,
    pub shooters: Vec<String>,
    /// Print roll reports as JSON lines.
    pub json: bool,
}

impl ClientConfig {
    /// Read settings from the process environment and `args`.
    ///
    /// # Errors
    ///
    /// Returns an error for an unparsable flag or variable, or when the
    /// resulting table config fails validation.
    pub fn from_env(args: &mut Arguments) -> Result<Self, ConfigError> {
        Self::load(|key| std::env::var(key).ok(), args)
    }

    /// Same as [`ClientConfig::from_env`] with an injectable lookup.
    pub fn load<F>(lookup: F, args: &mut Arguments) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = TableConfig::default();

        let odds = if args.contains("--true-odds") {
            PropOdds::TrueOdds
        } else {
            parse_env_or(&lookup, "CT_ODDS", defaults.odds)?
        };

        let table = TableConfig {
            name: args
                .opt_value_from_str("--name")?
                .or_else(|| lookup("CT_TABLE_NAME"))
                .unwrap_or(defaults.name),
            min_bet: flag_or_env(args, &lookup, "--min-bet", "CT_MIN_BET", defaults.min_bet)?,
            max_bet: flag_or_env(args, &lookup, "--max-bet", "CT_MAX_BET", defaults.max_bet)?,
            odds,
            starting_balance: flag_or_env(
                args,
                &lookup,
                "--balance",
                "CT_STARTING_BALANCE",
                defaults.starting_balance,
            )?,
        };
        table.validate()?;

        let seed = match args.opt_value_from_str("--seed")? {
            Some(seed) => Some(seed),
            None => lookup("CT_SEED")
                .map(|value| parse_value("CT_SEED", &value))
                .transpose()?,
        };

        let shooters = args
            .opt_value_from_str::<_, String>("--shooters")?
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            table,
            seed,
            shooters,
            json: args.contains("--json"),
        })
    }
}

fn flag_or_env<T, F>(
    args: &mut Arguments,
    lookup: &F,
    flag: &'static str,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match args.opt_value_from_str(flag)? {
        Some(value) => Ok(value),
        None => parse_env_or(lookup, key, default),
    }
}

/// Parse `key` from the environment, falling back to `default` when unset.
fn parse_env_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => parse_value(key, &value),
        None => Ok(default),
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
