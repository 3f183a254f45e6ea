//! Transport-agnostic description of an Authentication API request.
//!
//! An [`AuthenticationRequest`] carries everything an HTTP layer needs to
//! submit a call: method, endpoint path, body parameters and headers. It
//! performs no I/O itself.

use std::collections::HashMap;

use crate::builder::ParameterBuilder;
use crate::constants::{AUDIENCE_KEY, CONNECTION_KEY, GRANT_TYPE_KEY, REALM_KEY, SCOPE_KEY};

/// HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    GET,
    POST,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::GET => write!(f, "GET"),
            Method::POST => write!(f, "POST"),
        }
    }
}

/// A request to the Authentication API, ready to hand to an HTTP client.
#[derive(Debug, Clone)]
pub struct AuthenticationRequest {
    method: Method,
    path: String,
    parameters: HashMap<String, String>,
    headers: HashMap<String, String>,
}

impl AuthenticationRequest {
    /// Creates a new request.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            parameters: HashMap::new(),
            headers: HashMap::new(),
        }
    }

    /// Creates a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Creates a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Sets the `grant_type` parameter.
    pub fn set_grant_type(self, grant_type: impl Into<String>) -> Self {
        self.add_parameter(GRANT_TYPE_KEY, grant_type)
    }

    /// Sets the `connection` parameter.
    pub fn set_connection(self, connection: impl Into<String>) -> Self {
        self.add_parameter(CONNECTION_KEY, connection)
    }

    /// Sets the `realm` parameter.
    pub fn set_realm(self, realm: impl Into<String>) -> Self {
        self.add_parameter(REALM_KEY, realm)
    }

    /// Sets the `scope` parameter.
    pub fn set_scope(self, scope: impl Into<String>) -> Self {
        self.add_parameter(SCOPE_KEY, scope)
    }

    /// Sets the `audience` parameter.
    pub fn set_audience(self, audience: impl Into<String>) -> Self {
        self.add_parameter(AUDIENCE_KEY, audience)
    }

    /// Adds a single body parameter, replacing any previous value.
    pub fn add_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Adds all the given body parameters.
    pub fn add_parameters<I, K, V>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters.extend(
            parameters
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        self
    }

    /// Adds every parameter of a builder.
    pub fn add_authentication_parameters(self, builder: &ParameterBuilder) -> Self {
        self.add_parameters(builder.as_dictionary())
    }

    /// Adds a header. Header names are stored lowercase.
    pub fn add_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers.insert(name.as_ref().to_lowercase(), value.into());
        self
    }

    /// Returns the HTTP method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the endpoint path, relative to the tenant domain.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the body parameters.
    pub fn parameters(&self) -> &HashMap<String, String> {
        &self.parameters
    }

    /// Gets a body parameter.
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    /// Returns the headers.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Gets a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Joins a base URL and this request's path.
    pub fn url(&self, base: &str) -> String {
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}
