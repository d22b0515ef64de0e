#![allow(clippy::must_use_candidate)]

mod env;
pub mod health;
mod loader;
pub mod provider;
pub mod server;
pub mod session;
pub mod telemetry;

use serde::Deserialize;

pub use health::*;
pub use provider::*;
pub use server::*;
pub use session::SessionConfig;
pub use telemetry::{LogFormat, TelemetryConfig};

/// Top-level playground configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Generation provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
