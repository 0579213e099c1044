//! TOML configuration for the billing window.
//!
//! Every section is optional; anything missing falls back to its default.

use std::{
    fs,
    path::{Path, PathBuf},
};

use billing_core::{ConfigError, LineItem, SummaryConfig};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::logging::DEFAULT_DIRECTIVE;

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Summary(#[from] ConfigError),
}

pub const DEFAULT_WINDOW_TITLE: &str = "Price Summary";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Shown in the title bar and as the heading above the bill.
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_WINDOW_TITLE.to_string(),
            width: 480.0,
            height: 420.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Bare level or full `EnvFilter` directive. `RUST_LOG` wins when set.
    pub level: String,
    pub stdout: bool,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_DIRECTIVE.to_string(),
            stdout: true,
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub summary: SummaryConfig,
    pub logging: LoggingConfig,
    pub line_items: Vec<LineItem>,
}

impl AppConfig {
    /// Reads and validates the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        let text = fs::read_to_string(path).map_err(|source| AppConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, AppConfigError> {
        let config: Self = toml::from_str(text)?;
        config.summary.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.summary.currency_symbol, "₹");
        assert!(config.logging.stdout);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [summary]
            include_gst = false

            [window]
            width = 600.0
            "#,
        )
        .unwrap();

        assert!(!config.summary.include_gst);
        assert_eq!(config.summary.gst_rate, dec!(0.18));
        assert_eq!(config.window.width, 600.0);
        assert_eq!(config.window.height, 420.0);
        assert_eq!(config.window.title, DEFAULT_WINDOW_TITLE);
    }

    #[test]
    fn window_title_can_be_set() {
        let config = AppConfig::from_toml_str(
            r#"
            [window]
            title = "Counter 2 billing"
            "#,
        )
        .unwrap();

        assert_eq!(config.window.title, "Counter 2 billing");
        assert_eq!(config.window.width, 480.0);
    }

    #[test]
    fn line_items_are_read() {
        let config = AppConfig::from_toml_str(
            r#"
            [[line_items]]
            name = "Rice (5 kg)"
            quantity = 2
            unit_price = "349.50"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.line_items,
            vec![LineItem::new("Rice (5 kg)", 2, dec!(349.50))]
        );
    }

    #[test]
    fn invalid_gst_rate_is_rejected() {
        let result = AppConfig::from_toml_str(
            r#"
            [summary]
            gst_rate = "1.5"
            "#,
        );

        assert!(matches!(
            result,
            Err(AppConfigError::Summary(ConfigError::InvalidGstRate(_)))
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = AppConfig::from_toml_str("[summary");

        assert!(matches!(result, Err(AppConfigError::Parse(_))));
    }
}
