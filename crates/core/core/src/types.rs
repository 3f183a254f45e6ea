//! Typed values for Authentication API parameters.
//!
//! Closed enums for the values the server recognizes, each mapped to the
//! exact string it expects on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    GRANT_TYPE_AUTHORIZATION_CODE, GRANT_TYPE_MFA_OTP, GRANT_TYPE_PASSWORD,
    GRANT_TYPE_PASSWORDLESS_OTP, GRANT_TYPE_PASSWORD_REALM, GRANT_TYPE_REFRESH_TOKEN,
    GRANT_TYPE_TOKEN_EXCHANGE,
};
use crate::error::ParamsError;

/// How a passwordless one-time code or link is delivered to the user.
///
/// # Example
///
/// ```rust
/// use auth0_core::PasswordlessType;
///
/// assert_eq!(PasswordlessType::WebLink.as_str(), "link");
/// assert_eq!("code".parse::<PasswordlessType>().unwrap(), PasswordlessType::Code);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PasswordlessType {
    /// A one-time code the user types back into the app.
    #[serde(rename = "code")]
    Code,
    /// A link that opens in the browser.
    #[serde(rename = "link")]
    WebLink,
    /// A link that opens the Android application.
    #[serde(rename = "link_android")]
    AndroidLink,
}

impl PasswordlessType {
    /// Returns the value sent in the `send` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordlessType::Code => "code",
            PasswordlessType::WebLink => "link",
            PasswordlessType::AndroidLink => "link_android",
        }
    }
}

impl fmt::Display for PasswordlessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PasswordlessType {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "code" => Ok(PasswordlessType::Code),
            "link" => Ok(PasswordlessType::WebLink),
            "link_android" => Ok(PasswordlessType::AndroidLink),
            other => Err(ParamsError::unknown_passwordless_type(other)),
        }
    }
}

/// The OAuth grant types understood by the `/oauth/token` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrantType {
    RefreshToken,
    Password,
    PasswordRealm,
    AuthorizationCode,
    MfaOtp,
    PasswordlessOtp,
    TokenExchange,
}

impl GrantType {
    /// All grant types, in catalog order.
    pub const ALL: [GrantType; 7] = [
        GrantType::RefreshToken,
        GrantType::Password,
        GrantType::PasswordRealm,
        GrantType::AuthorizationCode,
        GrantType::MfaOtp,
        GrantType::PasswordlessOtp,
        GrantType::TokenExchange,
    ];

    /// Returns the grant type identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantType::RefreshToken => GRANT_TYPE_REFRESH_TOKEN,
            GrantType::Password => GRANT_TYPE_PASSWORD,
            GrantType::PasswordRealm => GRANT_TYPE_PASSWORD_REALM,
            GrantType::AuthorizationCode => GRANT_TYPE_AUTHORIZATION_CODE,
            GrantType::MfaOtp => GRANT_TYPE_MFA_OTP,
            GrantType::PasswordlessOtp => GRANT_TYPE_PASSWORDLESS_OTP,
            GrantType::TokenExchange => GRANT_TYPE_TOKEN_EXCHANGE,
        }
    }
}

impl fmt::Display for GrantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GrantType {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GrantType::ALL
            .into_iter()
            .find(|grant| grant.as_str() == s)
            .ok_or_else(|| ParamsError::unknown_grant_type(s))
    }
}

impl From<GrantType> for String {
    fn from(grant: GrantType) -> Self {
        grant.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passwordless_type_strings() {
        assert_eq!(PasswordlessType::Code.as_str(), "code");
        assert_eq!(PasswordlessType::WebLink.as_str(), "link");
        assert_eq!(PasswordlessType::AndroidLink.as_str(), "link_android");
        assert_eq!(PasswordlessType::AndroidLink.to_string(), "link_android");
    }

    #[test]
    fn test_passwordless_type_parse_unknown() {
        let err = "sms".parse::<PasswordlessType>().unwrap_err();
        assert!(matches!(err, ParamsError::UnknownPasswordlessType { .. }));
    }

    #[test]
    fn test_passwordless_type_serde() {
        let json = serde_json::to_string(&PasswordlessType::WebLink).unwrap();
        assert_eq!(json, "\"link\"");

        let parsed: PasswordlessType = serde_json::from_str("\"link_android\"").unwrap();
        assert_eq!(parsed, PasswordlessType::AndroidLink);
    }

    #[test]
    fn test_grant_type_parse() {
        for grant in GrantType::ALL {
            assert_eq!(grant.as_str().parse::<GrantType>().unwrap(), grant);
        }
        assert!("client_credentials".parse::<GrantType>().is_err());
    }

    #[test]
    fn test_grant_type_into_string() {
        let value: String = GrantType::MfaOtp.into();
        assert_eq!(value, "http://auth0.com/oauth/grant-type/mfa-otp");
    }
}
