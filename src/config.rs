//! Runtime configuration from the environment.
//!
//! A `.env` file in the working directory is loaded first when present.
//! Loading happens before tracing is installed, so nothing here logs while
//! loading; call [`PricingConfig::log_settings`] once the subscriber is up.

use std::env;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use tracing::info;

use crate::error::{AppError, Result};

/// Largest scale a `Decimal` can carry
const MAX_MONEY_PLACES: u32 = 28;

#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    /// Currency code attached to every amount in responses
    pub currency: String,
    /// Decimal places amounts are rounded to for display
    pub money_places: u32,
    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
    /// Keys that were unset and fell back to their default
    pub defaulted: Vec<&'static str>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: "INR".to_string(),
            money_places: 2,
            log_filter: "info".to_string(),
            defaulted: Vec::new(),
        }
    }
}

impl PricingConfig {
    /// Load `.env` (if any) and read settings from the environment
    pub fn load() -> Result<Self> {
        Self::load_with_env_file(".env")
    }

    /// Load the given env file (a missing file is fine) and read settings.
    ///
    /// A file that exists but cannot be read or parsed is a config error.
    pub fn load_with_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match dotenvy::from_path(path) {
            Ok(()) => {}
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(AppError::Config(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let mut defaulted = Vec::new();

        let currency = match lookup("TIFFIN_CURRENCY") {
            Some(c) => c.trim().to_uppercase(),
            None => {
                defaulted.push("TIFFIN_CURRENCY");
                defaults.currency
            }
        };
        if currency.is_empty() {
            return Err(AppError::Config("TIFFIN_CURRENCY must not be empty".to_string()));
        }

        let money_places: u32 = parse_or(
            "TIFFIN_MONEY_PLACES",
            &lookup,
            defaults.money_places,
            &mut defaulted,
        )?;
        if money_places > MAX_MONEY_PLACES {
            return Err(AppError::Config(format!(
                "TIFFIN_MONEY_PLACES must be at most {}, got {}",
                MAX_MONEY_PLACES, money_places
            )));
        }

        let log_filter = match lookup("TIFFIN_LOG") {
            Some(filter) => filter,
            None => {
                defaulted.push("TIFFIN_LOG");
                defaults.log_filter
            }
        };

        Ok(Self {
            currency,
            money_places,
            log_filter,
            defaulted,
        })
    }

    /// Report the effective settings. Call after tracing is installed.
    pub fn log_settings(&self) {
        for key in &self.defaulted {
            info!("{} not set, using default", key);
        }
        info!(
            "Pricing in {} rounded to {} places",
            self.currency, self.money_places
        );
    }
}

fn parse_or<T>(
    key: &'static str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: T,
    defaulted: &mut Vec<&'static str>,
) -> Result<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid {} value '{}': {}", key, raw, e))),
        None => {
            defaulted.push(key);
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = PricingConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.currency, "INR");
        assert_eq!(config.money_places, 2);
        assert_eq!(config.log_filter, "info");
        assert_eq!(
            config.defaulted,
            vec!["TIFFIN_CURRENCY", "TIFFIN_MONEY_PLACES", "TIFFIN_LOG"]
        );
    }

    #[test]
    fn test_reads_overrides() {
        let config = PricingConfig::from_lookup(lookup_from(&[
            ("TIFFIN_CURRENCY", " usd "),
            ("TIFFIN_MONEY_PLACES", "0"),
            ("TIFFIN_LOG", "tiffin_pricing=debug"),
        ]))
        .unwrap();

        assert_eq!(config.currency, "USD");
        assert_eq!(config.money_places, 0);
        assert_eq!(config.log_filter, "tiffin_pricing=debug");
        assert!(config.defaulted.is_empty());
    }

    #[test]
    fn test_rejects_invalid_places() {
        let err = PricingConfig::from_lookup(lookup_from(&[("TIFFIN_MONEY_PLACES", "two")]))
            .unwrap_err();
        assert!(err.to_string().contains("TIFFIN_MONEY_PLACES"));

        let err = PricingConfig::from_lookup(lookup_from(&[("TIFFIN_MONEY_PLACES", "29")]))
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_rejects_blank_currency() {
        assert!(PricingConfig::from_lookup(lookup_from(&[("TIFFIN_CURRENCY", "  ")])).is_err());
    }

    #[test]
    fn test_malformed_env_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "BAD LINE \"unterminated\n").unwrap();

        let err = PricingConfig::load_with_env_file(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains(".env"));
    }

    #[test]
    fn test_missing_env_file_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        assert!(PricingConfig::load_with_env_file(dir.path().join(".env")).is_ok());
    }
}
