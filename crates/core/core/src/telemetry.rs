//! Client identification sent with every Authentication API request.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::error::ParamsResult;

/// Name of the header carrying the encoded telemetry.
pub const TELEMETRY_HEADER: &str = "Auth0-Client";

/// Library name and version reported to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Telemetry {
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lib_version: Option<String>,
}

impl Telemetry {
    /// Creates telemetry for the given library.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            lib_version: None,
        }
    }

    /// Telemetry describing this crate.
    pub fn for_crate() -> Self {
        Self::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    /// Sets the version of the wrapping library.
    pub fn with_lib_version(mut self, lib_version: impl Into<String>) -> Self {
        self.lib_version = Some(lib_version.into());
        self
    }

    /// Returns the header value: URL-safe, unpadded base64 of the JSON form.
    pub fn header_value(&self) -> ParamsResult<String> {
        let json = serde_json::to_string(self)?;
        Ok(URL_SAFE_NO_PAD.encode(json))
    }
}
