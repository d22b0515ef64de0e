use thiserror::Error;

/// Errors that can occur while generating content
///
/// Authentication, rejected parameters, network failures and quota
/// rejections all surface through the same variant: the playground shows
/// the provider's description to the user without classifying it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LlmError {
    /// The generation call failed; carries a human-readable description
    #[error("{0}")]
    ProviderCallFailed(String),
}

impl LlmError {
    /// Description shown to the user
    pub fn description(&self) -> &str {
        match self {
            Self::ProviderCallFailed(description) => description,
        }
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(error: reqwest::Error) -> Self {
        Self::ProviderCallFailed(error.to_string())
    }
}
