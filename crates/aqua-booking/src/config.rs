// File: src/config.rs
// Purpose: Configuration parsing from aqua.toml

use crate::request::PaymentMethod;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub pricing: PricingConfig,

    #[serde(default)]
    pub booking: BookingConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Price calculation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Rentals this long or longer are billed at the daily rate
    #[serde(default = "default_daily_rate_threshold_hours")]
    pub daily_rate_threshold_hours: f64,

    #[serde(default = "default_currency")]
    pub currency: String,
}

/// Booking form settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    #[serde(default = "default_payment_methods")]
    pub payment_methods: Vec<PaymentMethod>,

    /// Preselected on new booking forms; must be one of `payment_methods`
    #[serde(default)]
    pub default_payment_method: PaymentMethod,
}

/// Where the item catalog lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

// Default values
fn default_daily_rate_threshold_hours() -> f64 {
    8.0
}

fn default_currency() -> String {
    "EUR".to_string()
}

fn default_payment_methods() -> Vec<PaymentMethod> {
    vec![PaymentMethod::Card, PaymentMethod::Paypal, PaymentMethod::Transfer]
}

fn default_catalog_path() -> String {
    "catalog.toml".to_string()
}

// Default implementations
impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            daily_rate_threshold_hours: default_daily_rate_threshold_hours(),
            currency: default_currency(),
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            payment_methods: default_payment_methods(),
            default_payment_method: PaymentMethod::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

impl Config {
    /// Load configuration from aqua.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path))?;

        Ok(config)
    }

    /// Check settings that parse but cannot be used
    pub fn validate(&self) -> Result<()> {
        let threshold = self.pricing.daily_rate_threshold_hours;
        if !threshold.is_finite() || threshold <= 0.0 {
            bail!("pricing.daily_rate_threshold_hours must be a positive number of hours, got {threshold}");
        }

        let booking = &self.booking;
        if booking.payment_methods.is_empty() {
            bail!("booking.payment_methods must list at least one method");
        }
        if !booking.payment_methods.contains(&booking.default_payment_method) {
            bail!(
                "booking.default_payment_method \"{}\" is not in booking.payment_methods",
                booking.default_payment_method
            );
        }

        Ok(())
    }
}
