//! Environment configuration for different deployment stages

use std::env;

use strum::Display;

use crate::world_id::{verifier::DEFAULT_DEVELOPER_PORTAL_URL, AppId, WorldIdConfig};

/// Application environment configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => Self::Development,
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// Identifiers sent along with every proof verification
    ///
    /// Read from `WORLD_ID_APP_ID` and `WORLD_ID_ACTION`. Development falls back
    /// to empty values and leaves it to the verifier to reject them.
    ///
    /// # Panics
    ///
    /// Panics if either variable is not set in production or staging
    #[must_use]
    pub fn world_id_config(&self) -> WorldIdConfig {
        let app_id = AppId::new(self.required_var("WORLD_ID_APP_ID"));
        let action = self.required_var("WORLD_ID_ACTION");

        if !app_id.is_well_formed() {
            tracing::warn!(%app_id, "WORLD_ID_APP_ID does not look like app_<id>");
        }

        WorldIdConfig { app_id, action }
    }

    /// Base URL of the World Developer Portal API
    ///
    /// The same portal serves staging and production apps, so this does not
    /// depend on the environment.
    #[must_use]
    pub fn developer_portal_url() -> String {
        env::var("WORLD_ID_DEVELOPER_PORTAL_URL")
            .unwrap_or_else(|_| DEFAULT_DEVELOPER_PORTAL_URL.to_string())
    }

    /// Whether to show API docs
    #[must_use]
    pub const fn show_api_docs(&self) -> bool {
        matches!(self, Self::Development | Self::Staging)
    }

    /// Whether logs should be emitted as JSON for Datadog
    #[must_use]
    pub const fn json_logs(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }

    fn required_var(&self, name: &str) -> String {
        match self {
            Self::Production | Self::Staging => {
                env::var(name).unwrap_or_else(|_| panic!("{name} environment variable is not set"))
            }
            Self::Development => env::var(name).unwrap_or_else(|_| {
                tracing::warn!("{name} is not set, falling back to an empty value");
                String::new()
            }),
        }
    }
}
