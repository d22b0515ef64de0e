//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use playground_config::{Config, HealthConfig, ProviderConfig, ServerConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig {
                        enabled: true,
                        ..HealthConfig::default()
                    },
                    ..ServerConfig::default()
                },
                provider: ProviderConfig::default(),
                ..Config::default()
            },
        }
    }

    /// Point the provider at a mock backend
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.config.provider.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Pre-fill new sessions with an API key
    pub fn with_default_api_key(mut self, key: &str) -> Self {
        self.config.provider.api_key = Some(SecretString::from(key.to_owned()));
        self
    }

    /// Transmit frequency and presence penalties upstream
    pub fn forwarding_penalties(mut self) -> Self {
        self.config.provider.forward_penalties = true;
        self
    }

    /// Drop sessions after `seconds` without a request
    pub fn with_idle_ttl(mut self, seconds: u64) -> Self {
        self.config.server.sessions.idle_ttl = seconds;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
