use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

/// Configuration for the Google Generative Language API provider
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Base URL override (defaults to the public `v1beta` endpoint)
    #[serde(default)]
    pub base_url: Option<Url>,
    /// API key used to pre-fill new sessions
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Send frequency and presence penalties along with the other settings
    ///
    /// Off by default: penalties are always recorded and displayed, but only
    /// transmitted when this is enabled.
    #[serde(default)]
    pub forward_penalties: bool,
}

impl ProviderConfig {
    /// Configured default API key, treating an empty value as unset
    ///
    /// Lets `{{ env.GEMINI_API_KEY | default("") }}` expand to nothing
    /// without pre-filling sessions with a blank key.
    pub fn default_api_key(&self) -> Option<SecretString> {
        self.api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .cloned()
    }
}
