//! Passwordless flows: start by email or SMS, then log in with the received code.

use auth0_core::constants::body_keys::{EMAIL, OTP, PHONE_NUMBER, USERNAME};
use auth0_core::{AuthenticationRequest, GrantType, PasswordlessType};

use crate::{paths, AuthenticationApi};

/// Default passwordless connection for email delivery.
pub const EMAIL_CONNECTION: &str = "email";
/// Default passwordless connection for SMS delivery.
pub const SMS_CONNECTION: &str = "sms";

impl AuthenticationApi {
    /// Starts a passwordless flow that delivers a code or link by email.
    pub fn passwordless_with_email(
        &self,
        email: &str,
        passwordless_type: PasswordlessType,
        connection: Option<&str>,
    ) -> AuthenticationRequest {
        let parameters = self
            .client_parameters()
            .set(EMAIL, Some(email))
            .set_send(passwordless_type)
            .set_connection(connection.unwrap_or(EMAIL_CONNECTION));
        self.post(paths::PASSWORDLESS_START, parameters)
    }

    /// Starts a passwordless flow that delivers a code or link by SMS.
    pub fn passwordless_with_sms(
        &self,
        phone_number: &str,
        passwordless_type: PasswordlessType,
        connection: Option<&str>,
    ) -> AuthenticationRequest {
        let parameters = self
            .client_parameters()
            .set(PHONE_NUMBER, Some(phone_number))
            .set_send(passwordless_type)
            .set_connection(connection.unwrap_or(SMS_CONNECTION));
        self.post(paths::PASSWORDLESS_START, parameters)
    }

    /// Logs in with the code received by email.
    pub fn login_with_email(
        &self,
        email: &str,
        verification_code: &str,
        realm: Option<&str>,
    ) -> AuthenticationRequest {
        self.login_with_passwordless_otp(
            email,
            verification_code,
            realm.unwrap_or(EMAIL_CONNECTION),
        )
    }

    /// Logs in with the code received by SMS.
    pub fn login_with_phone_number(
        &self,
        phone_number: &str,
        verification_code: &str,
        realm: Option<&str>,
    ) -> AuthenticationRequest {
        self.login_with_passwordless_otp(
            phone_number,
            verification_code,
            realm.unwrap_or(SMS_CONNECTION),
        )
    }

    fn login_with_passwordless_otp(
        &self,
        username: &str,
        verification_code: &str,
        realm: &str,
    ) -> AuthenticationRequest {
        let parameters = self
            .token_parameters()
            .set_scope(self.config.scope.as_str())
            .set_grant_type(GrantType::PasswordlessOtp)
            .set(USERNAME, Some(username))
            .set(OTP, Some(verification_code))
            .set_realm(realm);
        self.post(paths::OAUTH_TOKEN, parameters)
    }
}
