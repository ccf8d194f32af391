//! TOML configuration file.
//!
//! Every section and key is optional. Command-line flags override whatever
//! the file provides, and the file overrides the built-in defaults.
//!
//! ```toml
//! [provider]
//! backend = "sqlite"
//! connection_string = "states.db"
//!
//! [defaults]
//! income = "105000"
//! house_value = "200000"
//! savings_rate = "20"
//!
//! [logging]
//! level = "info"
//! file = "analytica.log"
//! ```

use std::path::{Path, PathBuf};

use analytica_core::{MovingInputs, ProviderConfig};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub provider: ProviderSection,
    pub defaults: DefaultsSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderSection {
    pub backend: Option<String>,
    pub connection_string: Option<String>,
}

/// Financial inputs used when the matching flag is omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsSection {
    pub income: Option<Decimal>,
    pub house_value: Option<Decimal>,
    pub savings_rate: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    pub level: Option<String>,
    /// Log records are appended here in addition to the console.
    pub file: Option<PathBuf>,
}

/// Values given on the command line for the financial inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputOverrides {
    pub income: Option<Decimal>,
    pub house_value: Option<Decimal>,
    pub savings_rate: Option<Decimal>,
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Loads `path` when given, otherwise returns the empty configuration.
    pub fn load_optional(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolves the provider: flag, then file, then [`ProviderConfig::default`].
    pub fn provider_config(
        &self,
        backend: Option<&str>,
        source: Option<&str>,
    ) -> ProviderConfig {
        let fallback = ProviderConfig::default();
        ProviderConfig {
            backend: backend
                .map(str::to_string)
                .or_else(|| self.provider.backend.clone())
                .unwrap_or(fallback.backend),
            connection_string: source
                .map(str::to_string)
                .or_else(|| self.provider.connection_string.clone())
                .unwrap_or(fallback.connection_string),
        }
    }

    /// Resolves each input independently: flag, then file, then
    /// [`MovingInputs::default`].
    pub fn moving_inputs(
        &self,
        overrides: InputOverrides,
    ) -> MovingInputs {
        let fallback = MovingInputs::default();
        MovingInputs {
            income: overrides
                .income
                .or(self.defaults.income)
                .unwrap_or(fallback.income),
            house_value: overrides
                .house_value
                .or(self.defaults.house_value)
                .unwrap_or(fallback.house_value),
            savings_rate: overrides
                .savings_rate
                .or(self.defaults.savings_rate)
                .unwrap_or(fallback.savings_rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn empty_file_is_default() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn full_file_parses() {
        let config = AppConfig::from_toml_str(
            r#"
            [provider]
            backend = "http"
            connection_string = "https://analytica.example.com"

            [defaults]
            income = "90000"
            house_value = 350000
            savings_rate = "12.5"

            [logging]
            level = "debug"
            file = "analytica.log"
            "#,
        )
        .unwrap();

        assert_eq!(config.provider.backend.as_deref(), Some("http"));
        assert_eq!(
            config.provider.connection_string.as_deref(),
            Some("https://analytica.example.com")
        );
        assert_eq!(config.defaults.income, Some(dec!(90000)));
        assert_eq!(config.defaults.house_value, Some(dec!(350000)));
        assert_eq!(config.defaults.savings_rate, Some(dec!(12.5)));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.file, Some(PathBuf::from("analytica.log")));
    }

    #[test]
    fn partial_section_leaves_other_keys_unset() {
        let config = AppConfig::from_toml_str("[defaults]\nsavings_rate = \"5\"\n").unwrap();

        assert_eq!(config.defaults.savings_rate, Some(dec!(5)));
        assert_eq!(config.defaults.income, None);
        assert_eq!(config.provider, ProviderSection::default());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = AppConfig::from_toml_str("[provider]\ndatabase = \"states.db\"\n").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = AppConfig::load(Path::new("/nonexistent/analytica.toml")).unwrap_err();

        let ConfigError::Io { path, .. } = err else {
            panic!("Expected Io error, got: {:?}", err);
        };
        assert_eq!(path, PathBuf::from("/nonexistent/analytica.toml"));
    }

    #[test]
    fn no_path_loads_default() {
        assert_eq!(AppConfig::load_optional(None).unwrap(), AppConfig::default());
    }

    // =========================================================================
    // Precedence
    // =========================================================================

    #[test]
    fn provider_defaults_to_in_memory_sqlite() {
        let provider = AppConfig::default().provider_config(None, None);

        assert_eq!(provider, ProviderConfig::default());
    }

    #[test]
    fn provider_flags_override_file() {
        let config = AppConfig {
            provider: ProviderSection {
                backend: Some("http".to_string()),
                connection_string: Some("http://localhost:8080".to_string()),
            },
            ..AppConfig::default()
        };

        let from_file = config.provider_config(None, None);
        let overridden = config.provider_config(Some("sqlite"), Some("states.db"));

        assert_eq!(from_file.backend, "http");
        assert_eq!(from_file.connection_string, "http://localhost:8080");
        assert_eq!(overridden.backend, "sqlite");
        assert_eq!(overridden.connection_string, "states.db");
    }

    #[test]
    fn inputs_resolve_field_by_field() {
        let config = AppConfig {
            defaults: DefaultsSection {
                income: Some(dec!(80000)),
                house_value: Some(dec!(300000)),
                savings_rate: None,
            },
            ..AppConfig::default()
        };

        let inputs = config.moving_inputs(InputOverrides {
            income: Some(dec!(120000)),
            ..InputOverrides::default()
        });

        assert_eq!(
            inputs,
            MovingInputs {
                income: dec!(120000),
                house_value: dec!(300000),
                savings_rate: dec!(20),
            }
        );
    }
}
