//! # Auth0 Core
//!
//! This crate provides the building blocks for Auth0 Authentication API
//! requests: the catalog of well-known parameter names and values, the
//! fluent [`ParameterBuilder`], typed grant and passwordless values, a
//! transport-agnostic [`AuthenticationRequest`], client telemetry and the
//! client configuration.

pub mod builder;
pub mod config;
pub mod constants;
pub mod error;
pub mod request;
pub mod telemetry;
pub mod types;

// Re-export commonly used items at the crate root
pub use builder::ParameterBuilder;
pub use config::{load_config, ClientConfig, DEFAULT_DATABASE_CONNECTION};
pub use error::{ParamsError, ParamsResult};
pub use request::{AuthenticationRequest, Method};
pub use telemetry::{Telemetry, TELEMETRY_HEADER};
pub use types::{GrantType, PasswordlessType};
