use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the health path, session limits, or provider
    /// base URL are unusable
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_health_config()?;
        self.validate_session_config()?;
        self.validate_provider_config()?;
        Ok(())
    }

    fn validate_health_config(&self) -> anyhow::Result<()> {
        let health = &self.server.health;

        if health.enabled && !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/', got '{}'", health.path);
        }

        Ok(())
    }

    fn validate_session_config(&self) -> anyhow::Result<()> {
        let sessions = &self.server.sessions;

        if sessions.max_sessions == 0 {
            anyhow::bail!("server.sessions.max_sessions must be at least 1");
        }
        if sessions.idle_ttl == 0 {
            anyhow::bail!("server.sessions.idle_ttl must be at least 1 second");
        }

        Ok(())
    }

    fn validate_provider_config(&self) -> anyhow::Result<()> {
        if let Some(ref base_url) = self.provider.base_url
            && !matches!(base_url.scheme(), "http" | "https")
        {
            anyhow::bail!("provider.base_url must use http or https, got '{}'", base_url.scheme());
        }

        Ok(())
    }
}
