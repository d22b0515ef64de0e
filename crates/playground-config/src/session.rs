use serde::Deserialize;

/// Limits on the in-memory session store
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Maximum number of sessions kept at once
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
    /// Seconds without a request after which a session is dropped
    #[serde(default = "default_idle_ttl")]
    pub idle_ttl: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
            idle_ttl: default_idle_ttl(),
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_sessions() -> u64 {
    10_000
}

#[allow(clippy::missing_const_for_fn)]
fn default_idle_ttl() -> u64 {
    3600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_empty_table() {
        let config: SessionConfig = toml::from_str("").unwrap();
        assert_eq!(config.max_sessions, 10_000);
        assert_eq!(config.idle_ttl, 3600);
    }

    #[test]
    fn overrides_are_read() {
        let config: SessionConfig = toml::from_str("max_sessions = 50\nidle_ttl = 120").unwrap();
        assert_eq!(config.max_sessions, 50);
        assert_eq!(config.idle_ttl, 120);
    }
}
