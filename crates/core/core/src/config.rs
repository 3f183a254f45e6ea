//! Client configuration for an Auth0 application.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::builder::ParameterBuilder;
use crate::constants::SCOPE_OPENID;
use crate::error::{ParamsError, ParamsResult};

/// Default database connection of a new Auth0 tenant.
pub const DEFAULT_DATABASE_CONNECTION: &str = "Username-Password-Authentication";

/// Identity of the application talking to the Authentication API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// The application's client id.
    pub client_id: String,
    /// Tenant domain, e.g. "tenant.auth0.com".
    pub domain: String,
    /// Database connection used for signup and password reset.
    pub database_connection: String,
    /// API identifier requested in token calls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    /// Scope requested by login calls.
    pub scope: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            domain: String::new(),
            database_connection: DEFAULT_DATABASE_CONNECTION.to_string(),
            audience: None,
            scope: SCOPE_OPENID.to_string(),
        }
    }
}

impl ClientConfig {
    /// Creates a new config for the given application.
    pub fn new(client_id: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            domain: domain.into(),
            ..Default::default()
        }
    }

    /// Sets the database connection.
    pub fn database_connection(mut self, connection: impl Into<String>) -> Self {
        self.database_connection = connection.into();
        self
    }

    /// Sets the audience.
    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Sets the login scope.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Parses the `[auth0]` table of a TOML document.
    pub fn from_toml_str(content: &str) -> ParamsResult<Self> {
        let document: toml::Value = toml::from_str(content)?;

        let table = document
            .get("auth0")
            .cloned()
            .ok_or_else(|| ParamsError::missing_config("auth0"))?;
        let config: ClientConfig = toml::Value::try_into(table)?;

        config.validate()?;
        Ok(config)
    }

    /// Checks that the identifying fields are present.
    pub fn validate(&self) -> ParamsResult<()> {
        if self.client_id.trim().is_empty() {
            return Err(ParamsError::missing_config("client_id"));
        }
        if self.domain.trim().is_empty() {
            return Err(ParamsError::missing_config("domain"));
        }
        if self.scope.trim().is_empty() {
            return Err(ParamsError::invalid_field("scope", "must not be empty"));
        }
        Ok(())
    }

    /// Returns the tenant base URL, adding `https://` when no scheme is given.
    pub fn domain_url(&self) -> String {
        let domain = self.domain.trim_end_matches('/');
        if domain.starts_with("http://") || domain.starts_with("https://") {
            domain.to_string()
        } else {
            format!("https://{}", domain)
        }
    }

    /// Returns a builder seeded with this application's client id and audience.
    pub fn parameter_builder(&self) -> ParameterBuilder {
        ParameterBuilder::new_builder()
            .set_client_id(self.client_id.as_str())
            .set(crate::constants::AUDIENCE_KEY, self.audience.as_deref())
    }
}

/// Loads the client configuration from a TOML file.
pub fn load_config(path: impl AsRef<Path>) -> ParamsResult<ClientConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let config = ClientConfig::from_toml_str(&content)?;

    tracing::debug!(
        path = %path.display(),
        domain = %config.domain,
        "Loaded Auth0 client configuration"
    );

    Ok(config)
}
