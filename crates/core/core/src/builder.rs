//! Fluent builder for Authentication API request parameters.

use std::collections::HashMap;

use crate::constants::{
    ACCESS_TOKEN_KEY, AUDIENCE_KEY, CLIENT_ID_KEY, CONNECTION_KEY, DEVICE_KEY, GRANT_TYPE_KEY,
    REALM_KEY, REFRESH_TOKEN_KEY, SCOPE_KEY, SCOPE_OPENID, SEND_KEY,
};
use crate::types::PasswordlessType;

/// Builder for Auth0 Authentication API parameters.
///
/// Every mutator consumes the builder and hands it back, so calls chain.
/// Extracting a dictionary does not freeze the builder: it can keep being
/// extended to produce parameters for a family of related requests.
///
/// # Example
///
/// ```rust
/// use auth0_core::ParameterBuilder;
///
/// let parameters = ParameterBuilder::new_builder()
///     .set_client_id("{CLIENT_ID}")
///     .set_connection("{CONNECTION}")
///     .set("{PARAMETER_NAME}", Some("{PARAMETER_VALUE}"))
///     .as_dictionary();
///
/// assert_eq!(parameters.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterBuilder {
    parameters: HashMap<String, String>,
}

impl ParameterBuilder {
    /// Creates an empty builder.
    pub fn new_builder() -> Self {
        Self::default()
    }

    /// Creates a builder seeded with a copy of the given parameters.
    pub fn with_parameters<I, K, V>(parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            parameters: parameters
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Creates a builder with the defaults of a login request, i.e. `openid` scope.
    pub fn new_authentication_builder() -> Self {
        Self::new_builder().set_scope(SCOPE_OPENID)
    }

    /// Sets the `client_id` parameter.
    pub fn set_client_id(self, client_id: impl Into<String>) -> Self {
        let client_id: String = client_id.into();
        self.set(CLIENT_ID_KEY, Some(client_id.as_str()))
    }

    /// Sets the `grant_type` parameter.
    ///
    /// Accepts either a raw identifier or a [`GrantType`](crate::GrantType).
    pub fn set_grant_type(self, grant_type: impl Into<String>) -> Self {
        let grant_type: String = grant_type.into();
        self.set(GRANT_TYPE_KEY, Some(grant_type.as_str()))
    }

    /// Sets the `connection` parameter.
    pub fn set_connection(self, connection: impl Into<String>) -> Self {
        let connection: String = connection.into();
        self.set(CONNECTION_KEY, Some(connection.as_str()))
    }

    /// Sets the `realm` parameter. A realm identifies the host against which
    /// the authentication is made.
    pub fn set_realm(self, realm: impl Into<String>) -> Self {
        let realm: String = realm.into();
        self.set(REALM_KEY, Some(realm.as_str()))
    }

    /// Sets the `scope` parameter.
    pub fn set_scope(self, scope: impl Into<String>) -> Self {
        let scope: String = scope.into();
        self.set(SCOPE_KEY, Some(scope.as_str()))
    }

    /// Sets the `audience` parameter.
    pub fn set_audience(self, audience: impl Into<String>) -> Self {
        let audience: String = audience.into();
        self.set(AUDIENCE_KEY, Some(audience.as_str()))
    }

    /// Sets the `refresh_token` parameter.
    pub fn set_refresh_token(self, refresh_token: impl Into<String>) -> Self {
        let refresh_token: String = refresh_token.into();
        self.set(REFRESH_TOKEN_KEY, Some(refresh_token.as_str()))
    }

    /// Sets the `access_token` parameter.
    pub fn set_access_token(self, access_token: impl Into<String>) -> Self {
        let access_token: String = access_token.into();
        self.set(ACCESS_TOKEN_KEY, Some(access_token.as_str()))
    }

    /// Sets the `device` parameter.
    pub fn set_device(self, device: impl Into<String>) -> Self {
        let device: String = device.into();
        self.set(DEVICE_KEY, Some(device.as_str()))
    }

    /// Sets the `send` parameter to the delivery channel of a passwordless flow.
    pub fn set_send(self, passwordless_type: PasswordlessType) -> Self {
        self.set(SEND_KEY, Some(passwordless_type.as_str()))
    }

    /// Sets a parameter. A `None` value removes the key if present.
    ///
    /// Every named setter goes through here.
    pub fn set(mut self, key: impl Into<String>, value: Option<&str>) -> Self {
        let key = key.into();
        match value {
            Some(value) => {
                tracing::trace!(key = %key, "Setting parameter");
                self.parameters.insert(key, value.to_string());
            }
            None => {
                if self.parameters.remove(&key).is_some() {
                    tracing::trace!(key = %key, "Removed parameter");
                }
            }
        }
        self
    }

    /// Adds every entry that carries a value. Entries with a `None` value
    /// are skipped and leave any existing value for that key untouched.
    pub fn add_all<I, K, V>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in parameters {
            if let Some(value) = value {
                let key = key.into();
                tracing::trace!(key = %key, "Merging parameter");
                self.parameters.insert(key, value.into());
            }
        }
        self
    }

    /// Clears all existing parameters.
    pub fn clear_all(mut self) -> Self {
        tracing::debug!(count = self.parameters.len(), "Clearing parameters");
        self.parameters.clear();
        self
    }

    /// Returns a copy of all parameters added so far.
    pub fn as_dictionary(&self) -> HashMap<String, String> {
        self.parameters.clone()
    }

    /// Consumes the builder and returns its parameters.
    pub fn into_dictionary(self) -> HashMap<String, String> {
        self.parameters
    }

    /// Gets the value of a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Returns true if no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl From<ParameterBuilder> for HashMap<String, String> {
    fn from(builder: ParameterBuilder) -> Self {
        builder.into_dictionary()
    }
}
