//! Configuration for the Sneakers web application

use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_flag, env_or_default, env_parse};
use core_config::server::ServerConfig;
use domain_sneakers::DisplaySettings;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub catalog: CatalogConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let catalog = CatalogConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            catalog,
        })
    }
}

/// Catalog contents and display preferences
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Start with the bundled sample sneakers instead of an empty catalog
    pub seed_sample_data: bool,
    pub recent_count: usize,
    /// ISO currency code, upper case
    pub currency: String,
}

impl CatalogConfig {
    pub fn display_settings(&self) -> DisplaySettings {
        DisplaySettings {
            currency: self.currency.clone(),
            recent_count: self.recent_count,
        }
    }
}

impl FromEnv for CatalogConfig {
    /// Reads from environment variables:
    /// - SEED_SAMPLE_DATA: defaults to true
    /// - RECENT_SNEAKERS: defaults to 6
    /// - DISPLAY_CURRENCY: defaults to EUR
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = DisplaySettings::default();

        let seed_sample_data = env_flag("SEED_SAMPLE_DATA", true)?;
        let recent_count = env_parse("RECENT_SNEAKERS", defaults.recent_count)?;
        let currency = env_or_default("DISPLAY_CURRENCY", &defaults.currency)
            .trim()
            .to_ascii_uppercase();

        if currency.is_empty() {
            return Err(ConfigError::ParseError {
                key: "DISPLAY_CURRENCY".to_string(),
                details: "currency code must not be empty".to_string(),
            });
        }

        Ok(Self {
            seed_sample_data,
            recent_count,
            currency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_VARS: [&str; 3] = ["SEED_SAMPLE_DATA", "RECENT_SNEAKERS", "DISPLAY_CURRENCY"];

    #[test]
    fn test_catalog_config_defaults() {
        temp_env::with_vars_unset(CATALOG_VARS, || {
            let config = CatalogConfig::from_env().unwrap();
            assert!(config.seed_sample_data);
            assert_eq!(config.recent_count, 6);
            assert_eq!(config.currency, "EUR");
        });
    }

    #[test]
    fn test_catalog_config_custom_values() {
        temp_env::with_vars(
            [
                ("SEED_SAMPLE_DATA", Some("false")),
                ("RECENT_SNEAKERS", Some("3")),
                ("DISPLAY_CURRENCY", Some(" usd ")),
            ],
            || {
                let config = CatalogConfig::from_env().unwrap();
                assert!(!config.seed_sample_data);

                let settings = config.display_settings();
                assert_eq!(settings.recent_count, 3);
                assert_eq!(settings.currency, "USD");
            },
        );
    }

    #[test]
    fn test_catalog_config_rejects_bad_values() {
        temp_env::with_var("RECENT_SNEAKERS", Some("-1"), || {
            let err = CatalogConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("RECENT_SNEAKERS"));
        });

        temp_env::with_var("DISPLAY_CURRENCY", Some("  "), || {
            assert!(CatalogConfig::from_env().is_err());
        });

        temp_env::with_var("SEED_SAMPLE_DATA", Some("sometimes"), || {
            assert!(CatalogConfig::from_env().is_err());
        });
    }

    #[test]
    fn test_config_from_env() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("PORT", Some("9000")),
                ("SEED_SAMPLE_DATA", None),
                ("RECENT_SNEAKERS", None),
                ("DISPLAY_CURRENCY", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "sneakers_web");
                assert!(config.environment.is_production());
                assert_eq!(config.server.port, 9000);
                assert_eq!(config.catalog.currency, "EUR");
            },
        );
    }
}
