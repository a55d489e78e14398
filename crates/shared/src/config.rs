//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Organization defaults.
    #[serde(default)]
    pub organization: OrganizationDefaults,
    /// Reporting configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
}

/// Defaults applied when an organization has not configured its own values.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationDefaults {
    /// Default base currency code for new organizations.
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
}

fn default_base_currency() -> String {
    "USD".to_string()
}

impl Default for OrganizationDefaults {
    fn default() -> Self {
        Self {
            base_currency: default_base_currency(),
        }
    }
}

/// Reporting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Number of entries in top-N rankings (clients, products).
    #[serde(default = "default_top_limit")]
    pub top_limit: usize,
}

fn default_top_limit() -> usize {
    20
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            top_limit: default_top_limit(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINVO").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig {
            organization: OrganizationDefaults::default(),
            reporting: ReportingConfig::default(),
        };
        assert_eq!(config.organization.base_currency, "USD");
        assert_eq!(config.reporting.top_limit, 20);
    }

    #[test]
    fn test_load_from_env() {
        temp_env::with_vars(
            [
                ("FINVO__ORGANIZATION__BASE_CURRENCY", Some("EUR")),
                ("FINVO__REPORTING__TOP_LIMIT", Some("5")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.organization.base_currency, "EUR");
                assert_eq!(config.reporting.top_limit, 5);
            },
        );
    }

    #[test]
    fn test_load_without_env_uses_defaults() {
        temp_env::with_vars_unset(
            ["FINVO__ORGANIZATION__BASE_CURRENCY", "FINVO__REPORTING__TOP_LIMIT"],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.organization.base_currency, "USD");
                assert_eq!(config.reporting.top_limit, 20);
            },
        );
    }
}
