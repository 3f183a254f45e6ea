//! Well-known parameter names and values of the Auth0 Authentication API.
//!
//! These literals are sent verbatim to the server and must not change.

// ==================== Grant types ====================

pub const GRANT_TYPE_REFRESH_TOKEN: &str = "refresh_token";
pub const GRANT_TYPE_PASSWORD: &str = "password";
pub const GRANT_TYPE_PASSWORD_REALM: &str = "http://auth0.com/oauth/grant-type/password-realm";
pub const GRANT_TYPE_AUTHORIZATION_CODE: &str = "authorization_code";
pub const GRANT_TYPE_MFA_OTP: &str = "http://auth0.com/oauth/grant-type/mfa-otp";
pub const GRANT_TYPE_PASSWORDLESS_OTP: &str = "http://auth0.com/oauth/grant-type/passwordless/otp";
pub const GRANT_TYPE_TOKEN_EXCHANGE: &str = "urn:ietf:params:oauth:grant-type:token-exchange";

// ==================== Scopes ====================

pub const SCOPE_OPENID: &str = "openid";
pub const SCOPE_OFFLINE_ACCESS: &str = "openid offline_access";

// ==================== Parameter keys ====================

pub const SCOPE_KEY: &str = "scope";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const CONNECTION_KEY: &str = "connection";
pub const REALM_KEY: &str = "realm";
pub const SEND_KEY: &str = "send";
pub const CLIENT_ID_KEY: &str = "client_id";
pub const GRANT_TYPE_KEY: &str = "grant_type";
pub const AUDIENCE_KEY: &str = "audience";
pub const DEVICE_KEY: &str = "device";
pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const ID_TOKEN_KEY: &str = "id_token";

/// Request body keys used by the authentication endpoints.
pub mod body_keys {
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
    pub const EMAIL: &str = "email";
    pub const PHONE_NUMBER: &str = "phone_number";
    pub const OTP: &str = "otp";
    pub const MFA_TOKEN: &str = "mfa_token";
    pub const CODE: &str = "code";
    pub const CODE_VERIFIER: &str = "code_verifier";
    pub const REDIRECT_URI: &str = "redirect_uri";
    pub const SUBJECT_TOKEN: &str = "subject_token";
    pub const SUBJECT_TOKEN_TYPE: &str = "subject_token_type";
    pub const TOKEN: &str = "token";
}
