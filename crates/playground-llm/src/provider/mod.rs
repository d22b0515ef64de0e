//! Provider trait and the request handed to it

pub mod google;

use async_trait::async_trait;
use secrecy::SecretString;

use crate::error::LlmError;
use crate::types::{GenerationParameters, ModelName};

/// Settings transmitted with a generation call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub stop_sequences: Option<Vec<String>>,
    /// Only set when penalty forwarding is enabled
    pub frequency_penalty: Option<f64>,
    /// Only set when penalty forwarding is enabled
    pub presence_penalty: Option<f64>,
}

impl GenerationConfig {
    pub fn from_parameters(params: &GenerationParameters, forward_penalties: bool) -> Self {
        Self {
            temperature: params.temperature,
            top_p: params.top_p,
            top_k: params.top_k,
            max_output_tokens: params.max_output_tokens,
            stop_sequences: params.stop_sequences.clone(),
            frequency_penalty: forward_penalties.then_some(params.frequency_penalty),
            presence_penalty: forward_penalties.then_some(params.presence_penalty),
        }
    }
}

/// A model handle bound to one model, its settings and a prompt
#[derive(Debug)]
pub struct GenerateContent<'a> {
    pub api_key: &'a SecretString,
    pub model: ModelName,
    pub config: GenerationConfig,
    pub prompt: &'a str,
}

/// Trait implemented by each generation backend
#[async_trait]
pub trait Provider: Send + Sync {
    /// Human-readable provider name
    fn name(&self) -> &str;

    /// Generate text for a single prompt
    async fn generate_content(&self, request: &GenerateContent<'_>) -> Result<String, LlmError>;
}
