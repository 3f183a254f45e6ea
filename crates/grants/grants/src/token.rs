//! Grants against the token endpoints, plus revocation and profile lookups.

use auth0_core::constants::body_keys::{
    CODE, CODE_VERIFIER, MFA_TOKEN, OTP, PASSWORD, REDIRECT_URI, SUBJECT_TOKEN,
    SUBJECT_TOKEN_TYPE, TOKEN, USERNAME,
};
use auth0_core::constants::{ID_TOKEN_KEY, SCOPE_OPENID};
use auth0_core::{AuthenticationRequest, GrantType, ParameterBuilder};

use crate::{paths, AuthenticationApi};

impl AuthenticationApi {
    /// Logs in with username (or email) and password against a realm.
    pub fn login(
        &self,
        username_or_email: &str,
        password: &str,
        realm: &str,
    ) -> AuthenticationRequest {
        let parameters = self
            .token_parameters()
            .set_scope(self.config.scope.as_str())
            .set_grant_type(GrantType::PasswordRealm)
            .set(USERNAME, Some(username_or_email))
            .set(PASSWORD, Some(password))
            .set_realm(realm);
        self.post(paths::OAUTH_TOKEN, parameters)
    }

    /// Logs in with the access token of an identity provider such as Facebook.
    pub fn login_with_oauth_access_token(
        &self,
        token: &str,
        connection: &str,
    ) -> AuthenticationRequest {
        let parameters = ParameterBuilder::new_authentication_builder()
            .set_client_id(self.config.client_id.as_str())
            .set_connection(connection)
            .set_access_token(token);
        self.post(paths::OAUTH_ACCESS_TOKEN, parameters)
    }

    /// Completes a login that required multi-factor authentication.
    pub fn login_with_otp(&self, mfa_token: &str, otp: &str) -> AuthenticationRequest {
        let parameters = self
            .token_parameters()
            .set_grant_type(GrantType::MfaOtp)
            .set(MFA_TOKEN, Some(mfa_token))
            .set(OTP, Some(otp));
        self.post(paths::OAUTH_TOKEN, parameters)
    }

    /// Requests new credentials with a refresh token.
    pub fn renew_auth(&self, refresh_token: &str) -> AuthenticationRequest {
        let parameters = self
            .token_parameters()
            .set_refresh_token(refresh_token)
            .set_grant_type(GrantType::RefreshToken);
        self.post(paths::OAUTH_TOKEN, parameters)
    }

    /// Exchanges an authorization code obtained with PKCE.
    pub fn token(
        &self,
        authorization_code: &str,
        code_verifier: &str,
        redirect_uri: &str,
    ) -> AuthenticationRequest {
        let parameters = self
            .token_parameters()
            .set_grant_type(GrantType::AuthorizationCode)
            .set(CODE, Some(authorization_code))
            .set(CODE_VERIFIER, Some(code_verifier))
            .set(REDIRECT_URI, Some(redirect_uri));
        self.post(paths::OAUTH_TOKEN, parameters)
    }

    /// Exchanges an external token for Auth0 credentials.
    pub fn custom_token_exchange(
        &self,
        subject_token_type: &str,
        subject_token: &str,
    ) -> AuthenticationRequest {
        let parameters = self
            .token_parameters()
            .set_scope(SCOPE_OPENID)
            .set_grant_type(GrantType::TokenExchange)
            .set(SUBJECT_TOKEN_TYPE, Some(subject_token_type))
            .set(SUBJECT_TOKEN, Some(subject_token));
        self.post(paths::OAUTH_TOKEN, parameters)
    }

    /// Revokes a refresh token.
    pub fn revoke_token(&self, refresh_token: &str) -> AuthenticationRequest {
        let parameters = self.client_parameters().set(TOKEN, Some(refresh_token));
        self.post(paths::OAUTH_REVOKE, parameters)
    }

    /// Fetches the profile of the user owning an access token.
    pub fn user_info(&self, access_token: &str) -> AuthenticationRequest {
        self.with_client_headers(
            AuthenticationRequest::get(paths::USER_INFO)
                .add_header("Authorization", format!("Bearer {}", access_token)),
        )
    }

    /// Fetches the profile encoded in an id token.
    pub fn token_info(&self, id_token: &str) -> AuthenticationRequest {
        let parameters = ParameterBuilder::new_builder().set(ID_TOKEN_KEY, Some(id_token));
        self.post(paths::TOKEN_INFO, parameters)
    }
}
