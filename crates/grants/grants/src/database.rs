//! Database connection signup and password reset.

use auth0_core::constants::body_keys::{EMAIL, PASSWORD, USERNAME};
use auth0_core::AuthenticationRequest;

use crate::{paths, AuthenticationApi};

impl AuthenticationApi {
    /// Creates a user in a database connection.
    ///
    /// The username is only sent when given; the connection defaults to the
    /// configured database connection.
    pub fn create_user(
        &self,
        email: &str,
        password: &str,
        username: Option<&str>,
        connection: Option<&str>,
    ) -> AuthenticationRequest {
        let parameters = self
            .client_parameters()
            .set(USERNAME, username)
            .set(EMAIL, Some(email))
            .set(PASSWORD, Some(password))
            .set_connection(connection.unwrap_or(self.config.database_connection.as_str()));
        self.post(paths::DB_SIGNUP, parameters)
    }

    /// Requests a password reset email.
    pub fn reset_password(&self, email: &str, connection: Option<&str>) -> AuthenticationRequest {
        let parameters = self
            .client_parameters()
            .set(EMAIL, Some(email))
            .set_connection(connection.unwrap_or(self.config.database_connection.as_str()));
        self.post(paths::DB_CHANGE_PASSWORD, parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth0_core::constants::{CLIENT_ID_KEY, CONNECTION_KEY};
    use auth0_core::ClientConfig;

    fn api() -> AuthenticationApi {
        AuthenticationApi::new(ClientConfig::new("CLIENT", "tenant.auth0.com"))
    }

    #[test]
    fn test_create_user_without_username() {
        let request = api().create_user("a@b.com", "pw", None, None);

        assert_eq!(request.path(), "dbconnections/signup");
        assert_eq!(request.parameter("username"), None);
        assert_eq!(request.parameter("email"), Some("a@b.com"));
        assert_eq!(request.parameter("password"), Some("pw"));
        assert_eq!(
            request.parameter(CONNECTION_KEY),
            Some("Username-Password-Authentication")
        );
        assert_eq!(request.parameter(CLIENT_ID_KEY), Some("CLIENT"));
    }

    #[test]
    fn test_create_user_with_username_and_connection() {
        let request = api().create_user("a@b.com", "pw", Some("alice"), Some("partners"));
        assert_eq!(request.parameter("username"), Some("alice"));
        assert_eq!(request.parameter(CONNECTION_KEY), Some("partners"));
    }

    #[test]
    fn test_reset_password() {
        let api = AuthenticationApi::new(
            ClientConfig::new("CLIENT", "tenant.auth0.com").database_connection("legacy-db"),
        );
        let request = api.reset_password("a@b.com", None);

        assert_eq!(request.path(), "dbconnections/change_password");
        assert_eq!(request.parameter(CONNECTION_KEY), Some("legacy-db"));
        assert_eq!(request.parameters().len(), 3);
    }
}
