//! # Auth0
//!
//! Typed, fluent builders for the parameters of Auth0 Authentication API
//! requests.
//!
//! ## Quick Start
//!
//! ```rust
//! use auth0::prelude::*;
//!
//! let parameters = ParameterBuilder::new_authentication_builder()
//!     .set_client_id("{CLIENT_ID}")
//!     .set_grant_type(GrantType::PasswordRealm)
//!     .set_realm("Username-Password-Authentication")
//!     .as_dictionary();
//!
//! assert_eq!(parameters["scope"], "openid");
//! assert_eq!(parameters["grant_type"], GRANT_TYPE_PASSWORD_REALM);
//! ```

// Re-export core types
pub use auth0_core::*;

// Re-export flow recipes
pub use auth0_grants as grants;
pub use auth0_grants::AuthenticationApi;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use auth0_core::constants::*;
    pub use auth0_core::error::{ParamsError, ParamsResult};
    pub use auth0_core::types::{GrantType, PasswordlessType};
    pub use auth0_core::{AuthenticationRequest, ClientConfig, ParameterBuilder, Telemetry};
    pub use auth0_grants::AuthenticationApi;
}
