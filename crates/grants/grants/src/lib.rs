//! # Auth0 Grants
//!
//! Parameter recipes for the Auth0 Authentication API. Each method of
//! [`AuthenticationApi`] assembles the body of one endpoint call and returns
//! it as an [`AuthenticationRequest`] for the caller's HTTP layer.
//!
//! ## Features
//!
//! - Token endpoint grants (password realm, MFA OTP, refresh, authorization
//!   code, token exchange)
//! - Passwordless start and login by email or SMS
//! - Database connection signup and password reset
//!
//! ## Example
//!
//! ```rust
//! use auth0_core::{ClientConfig, PasswordlessType};
//! use auth0_grants::AuthenticationApi;
//!
//! let api = AuthenticationApi::new(ClientConfig::new("client_id", "tenant.auth0.com"));
//!
//! let request = api.passwordless_with_email("user@example.com", PasswordlessType::Code, None);
//! assert_eq!(request.path(), "passwordless/start");
//! assert_eq!(request.parameter("send"), Some("code"));
//! ```

mod database;
mod passwordless;
mod token;

pub use passwordless::{EMAIL_CONNECTION, SMS_CONNECTION};

use auth0_core::constants::{CLIENT_ID_KEY, GRANT_TYPE_KEY};
use auth0_core::{
    AuthenticationRequest, ClientConfig, ParameterBuilder, ParamsResult, TELEMETRY_HEADER,
    Telemetry,
};

/// Endpoint paths, relative to the tenant domain.
pub mod paths {
    pub const OAUTH_TOKEN: &str = "oauth/token";
    pub const OAUTH_REVOKE: &str = "oauth/revoke";
    pub const OAUTH_ACCESS_TOKEN: &str = "oauth/access_token";
    pub const TOKEN_INFO: &str = "tokeninfo";
    pub const PASSWORDLESS_START: &str = "passwordless/start";
    pub const DB_SIGNUP: &str = "dbconnections/signup";
    pub const DB_CHANGE_PASSWORD: &str = "dbconnections/change_password";
    pub const USER_INFO: &str = "userinfo";
}

/// Assembles Authentication API requests for one application.
#[derive(Debug, Clone)]
pub struct AuthenticationApi {
    config: ClientConfig,
    telemetry_header: Option<String>,
}

impl AuthenticationApi {
    /// Creates a new API for the given client configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            telemetry_header: None,
        }
    }

    /// Sends the given telemetry in the `Auth0-Client` header of every request.
    pub fn with_telemetry(mut self, telemetry: &Telemetry) -> ParamsResult<Self> {
        self.telemetry_header = Some(telemetry.header_value()?);
        Ok(self)
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the application's client id.
    pub fn client_id(&self) -> &str {
        &self.config.client_id
    }

    /// Returns the full URL of a request against this tenant.
    pub fn url_for(&self, request: &AuthenticationRequest) -> String {
        request.url(&self.config.domain_url())
    }

    /// Parameters shared by calls that do not go through the token endpoint.
    fn client_parameters(&self) -> ParameterBuilder {
        ParameterBuilder::new_builder().set_client_id(self.config.client_id.as_str())
    }

    /// Parameters shared by token endpoint grants: client id and audience.
    fn token_parameters(&self) -> ParameterBuilder {
        self.config.parameter_builder()
    }

    fn post(&self, path: &str, parameters: ParameterBuilder) -> AuthenticationRequest {
        tracing::debug!(
            path,
            grant_type = parameters.get(GRANT_TYPE_KEY).unwrap_or("-"),
            client_id = parameters.get(CLIENT_ID_KEY).unwrap_or("-"),
            "Prepared authentication request"
        );
        self.with_client_headers(
            AuthenticationRequest::post(path).add_authentication_parameters(&parameters),
        )
    }

    fn with_client_headers(&self, request: AuthenticationRequest) -> AuthenticationRequest {
        match &self.telemetry_header {
            Some(value) => request.add_header(TELEMETRY_HEADER, value.as_str()),
            None => request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> AuthenticationApi {
        let config = ClientConfig::new("CLIENT", "tenant.auth0.com").audience("https://api");
        AuthenticationApi::new(config)
    }

    #[test]
    fn test_client_parameters_skip_audience() {
        let parameters = api().client_parameters().as_dictionary();
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters.get(CLIENT_ID_KEY).map(String::as_str), Some("CLIENT"));
    }

    #[test]
    fn test_token_parameters_include_audience() {
        let parameters = api().token_parameters();
        assert_eq!(parameters.get("audience"), Some("https://api"));
    }

    #[test]
    fn test_url_for() {
        let api = api();
        let request = api.post(paths::OAUTH_TOKEN, api.token_parameters());
        assert_eq!(api.url_for(&request), "https://tenant.auth0.com/oauth/token");
    }

    #[test]
    fn test_telemetry_header() {
        let plain = api().renew_auth("rt");
        assert_eq!(plain.header(TELEMETRY_HEADER), None);

        let telemetry = Telemetry::new("auth0-rs", "1.0.0");
        let api = api().with_telemetry(&telemetry).unwrap();
        let expected = telemetry.header_value().unwrap();

        let refresh = api.renew_auth("rt");
        assert_eq!(refresh.header("auth0-client"), Some(expected.as_str()));

        let info = api.user_info("at");
        assert_eq!(info.header(TELEMETRY_HEADER), Some(expected.as_str()));
    }
}
