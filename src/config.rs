use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reference conversion rate for catalogs priced in USD, into BDT.
pub const USD_TO_BDT: f64 = 125.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Currency rate must be finite and positive, got {0}")]
    InvalidCurrencyRate(f64),
    #[error("Selection policy must allow at least one suggestion")]
    NoSuggestionsAllowed,
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Multiplier from catalog currency into the target currency.
    pub currency_rate: f64,
}

impl PricingConfig {
    /// Catalog costs already in the target currency.
    pub fn v0() -> Self {
        Self { currency_rate: 1.0 }
    }

    pub fn usd() -> Self {
        Self {
            currency_rate: USD_TO_BDT,
        }
    }

    pub fn with_rate(currency_rate: f64) -> Result<Self, ConfigError> {
        let config = Self { currency_rate };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.currency_rate.is_finite() || self.currency_rate <= 0.0 {
            return Err(ConfigError::InvalidCurrencyRate(self.currency_rate));
        }
        Ok(())
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::v0()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionPolicy {
    /// Budgets at or above this only consider International trips.
    pub high_budget_threshold: u64,
    /// Budgets below `travelers * this` only consider Domestic and Day Tour trips.
    pub low_budget_per_traveler: u64,
    pub max_suggestions: usize,
}

impl SelectionPolicy {
    pub fn v0() -> Self {
        Self {
            high_budget_threshold: 300_000,
            low_budget_per_traveler: 50_000,
            max_suggestions: 3,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_suggestions == 0 {
            return Err(ConfigError::NoSuggestionsAllowed);
        }
        Ok(())
    }
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::v0()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub policy: SelectionPolicy,
}

impl PlannerConfig {
    pub fn v0() -> Self {
        Self {
            pricing: PricingConfig::v0(),
            policy: SelectionPolicy::v0(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pricing.validate()?;
        self.policy.validate()
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&data)
    }
}
