//! Runtime settings for a platform session.
//!
//! Every field has a default; `NUTRI_*` environment variables override them.
//! Unset or empty variables fall back to the default, malformed ones are an
//! error rather than being silently ignored.
//!
//! | Variable | Default |
//! |---|---|
//! | `NUTRI_CHANNEL_CAPACITY` | 32 |
//! | `NUTRI_PROGRESS_INTERVAL_SECS` | 10 |
//! | `NUTRI_DELIVERY_FEE` | 99 |
//! | `NUTRI_TAX_PERCENT` | 5 |
//! | `NUTRI_SEED` | true |

use crate::checkout::Pricing;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const DEFAULT_CHANNEL_CAPACITY: usize = 32;
const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key}={value:?} is not a valid {expected}")]
    Malformed {
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("{key} must be greater than zero")]
    Zero { key: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Bounded mailbox size of every actor.
    pub channel_capacity: usize,
    /// Tick of the order tracking demo timer.
    pub progress_interval: Duration,
    pub delivery_fee: u32,
    pub tax_percent: u32,
    /// Load the mock fixtures when the platform starts.
    pub seed_on_start: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let pricing = Pricing::default();
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            delivery_fee: pricing.delivery_fee,
            tax_percent: pricing.tax_percent,
            seed_on_start: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let channel_capacity =
            parse(&lookup, "NUTRI_CHANNEL_CAPACITY", "count")?.unwrap_or(defaults.channel_capacity);
        if channel_capacity == 0 {
            return Err(ConfigError::Zero {
                key: "NUTRI_CHANNEL_CAPACITY",
            });
        }

        let progress_interval = match parse::<u64, _>(&lookup, "NUTRI_PROGRESS_INTERVAL_SECS", "number of seconds")? {
            Some(0) => {
                return Err(ConfigError::Zero {
                    key: "NUTRI_PROGRESS_INTERVAL_SECS",
                })
            }
            Some(secs) => Duration::from_secs(secs),
            None => defaults.progress_interval,
        };

        let config = Self {
            channel_capacity,
            progress_interval,
            delivery_fee: parse(&lookup, "NUTRI_DELIVERY_FEE", "amount in rupees")?
                .unwrap_or(defaults.delivery_fee),
            tax_percent: parse(&lookup, "NUTRI_TAX_PERCENT", "whole percent")?
                .unwrap_or(defaults.tax_percent),
            seed_on_start: parse_flag(&lookup, "NUTRI_SEED")?.unwrap_or(defaults.seed_on_start),
        };
        debug!(?config, "Loaded config");
        Ok(config)
    }

    pub fn pricing(&self) -> Pricing {
        Pricing {
            delivery_fee: self.delivery_fee,
            tax_percent: self.tax_percent,
        }
    }
}

fn read<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse<T, F>(lookup: &F, key: &'static str, expected: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    read(lookup, key)
        .map(|value| {
            value.parse().map_err(|_| ConfigError::Malformed {
                key,
                value: value.clone(),
                expected,
            })
        })
        .transpose()
}

fn parse_flag<F>(lookup: &F, key: &'static str) -> Result<Option<bool>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    read(lookup, key)
        .map(|value| match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Malformed {
                key,
                value,
                expected: "flag",
            }),
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.pricing(), Pricing::default());
        assert_eq!(config.progress_interval, Duration::from_secs(10));
    }

    #[test]
    fn overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("NUTRI_CHANNEL_CAPACITY", "8"),
            ("NUTRI_PROGRESS_INTERVAL_SECS", "2"),
            ("NUTRI_DELIVERY_FEE", "150"),
            ("NUTRI_TAX_PERCENT", " 16 "),
            ("NUTRI_SEED", "off"),
        ]))
        .unwrap();

        assert_eq!(config.channel_capacity, 8);
        assert_eq!(config.progress_interval, Duration::from_secs(2));
        assert_eq!(config.pricing().delivery_fee, 150);
        assert_eq!(config.pricing().tax_percent, 16);
        assert!(!config.seed_on_start);
    }

    #[test]
    fn empty_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[("NUTRI_DELIVERY_FEE", "")])).unwrap();
        assert_eq!(config.delivery_fee, 99);
    }

    #[test]
    fn malformed_values_are_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("NUTRI_TAX_PERCENT", "five")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Malformed {
                key: "NUTRI_TAX_PERCENT",
                value: "five".into(),
                expected: "whole percent",
            }
        );

        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("NUTRI_SEED", "maybe")])),
            Err(ConfigError::Malformed { key: "NUTRI_SEED", .. })
        ));
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("NUTRI_CHANNEL_CAPACITY", "0")])),
            Err(ConfigError::Zero {
                key: "NUTRI_CHANNEL_CAPACITY"
            })
        );
    }
}
