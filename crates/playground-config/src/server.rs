use std::net::SocketAddr;

use serde::Deserialize;

use crate::health::HealthConfig;
use crate::session::SessionConfig;

/// Address the playground listens on when none is configured
pub const DEFAULT_LISTEN_ADDRESS: ([u8; 4], u16) = ([127, 0, 0, 1], 8501);

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_address: Option<SocketAddr>,
    #[serde(default)]
    pub health: HealthConfig,
    /// Session store limits
    #[serde(default)]
    pub sessions: SessionConfig,
}

impl ServerConfig {
    /// Configured listen address, falling back to `127.0.0.1:8501`
    pub fn listen_address(&self) -> SocketAddr {
        self.listen_address
            .unwrap_or_else(|| SocketAddr::from(DEFAULT_LISTEN_ADDRESS))
    }
}
