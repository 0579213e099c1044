//! Summary configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::money::{Currency, DEFAULT_CURRENCY_SYMBOL};

/// Errors from [`SummaryConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The currency symbol is empty or whitespace.
    #[error("currency symbol must not be empty")]
    EmptyCurrencySymbol,

    /// The GST rate is not a fraction.
    #[error("GST rate must be between 0 and 1, got {0}")]
    InvalidGstRate(Decimal),
}

/// How figures are displayed and how GST is applied by the host bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub currency_symbol: String,
    /// GST as a fraction of the subtotal (0.18 is 18%).
    pub gst_rate: Decimal,
    /// Whether GST starts out applied to new bills.
    pub include_gst: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            gst_rate: Decimal::new(18, 2),
            include_gst: true,
        }
    }
}

impl SummaryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::EmptyCurrencySymbol);
        }
        if self.gst_rate < Decimal::ZERO || self.gst_rate > Decimal::ONE {
            return Err(ConfigError::InvalidGstRate(self.gst_rate));
        }
        Ok(())
    }

    pub fn currency(&self) -> Currency {
        Currency::new(self.currency_symbol.clone())
    }
}
