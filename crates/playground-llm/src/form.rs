//! Parameter form state and the values a submission carries

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::types::{
    FREQUENCY_PENALTY, GenerationParameters, MAX_OUTPUT_TOKENS, ModelName, PRESENCE_PENALTY, SamplePrompt, TEMPERATURE,
    TOP_K, TOP_P, parse_stop_sequences,
};

/// Current contents of the form for one session
#[derive(Debug, Clone)]
pub struct FormState {
    pub api_key: Option<SecretString>,
    pub model: ModelName,
    pub sample: SamplePrompt,
    pub prompt: String,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
    /// Raw stop-sequence text, one sequence per line
    pub stop_sequences: String,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            api_key: None,
            model: ModelName::default(),
            sample: SamplePrompt::default(),
            prompt: String::new(),
            temperature: TEMPERATURE.default,
            top_p: TOP_P.default,
            top_k: TOP_K.default,
            max_output_tokens: MAX_OUTPUT_TOKENS.default,
            stop_sequences: String::new(),
            frequency_penalty: FREQUENCY_PENALTY.default,
            presence_penalty: PRESENCE_PENALTY.default,
        }
    }
}

/// Field values posted by the page
///
/// Missing numeric fields keep their current value.
#[derive(Debug, Default, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub model: Option<ModelName>,
    #[serde(default)]
    pub sample: Option<SamplePrompt>,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub top_p: Option<f64>,
    #[serde(default)]
    pub top_k: Option<i64>,
    #[serde(default)]
    pub max_output_tokens: Option<i64>,
    #[serde(default)]
    pub stop_sequences: String,
    #[serde(default)]
    pub frequency_penalty: Option<f64>,
    #[serde(default)]
    pub presence_penalty: Option<f64>,
}

impl FormState {
    /// Form pre-filled with a default API key
    pub fn with_api_key(api_key: Option<SecretString>) -> Self {
        Self {
            api_key,
            ..Self::default()
        }
    }

    /// Copy posted values into the form, clamping numbers into range
    ///
    /// Does not apply the sample prompt: that only happens on an explicit
    /// [`select_sample_prompt`](Self::select_sample_prompt).
    pub fn apply(&mut self, input: FormInput) {
        self.api_key = (!input.api_key.is_empty()).then(|| SecretString::from(input.api_key));
        self.prompt = input.prompt;
        self.stop_sequences = input.stop_sequences;

        if let Some(model) = input.model {
            self.model = model;
        }
        if let Some(sample) = input.sample {
            self.sample = sample;
        }
        if let Some(value) = input.temperature {
            self.temperature = TEMPERATURE.clamp(value);
        }
        if let Some(value) = input.top_p {
            self.top_p = TOP_P.clamp(value);
        }
        if let Some(value) = input.top_k {
            self.top_k = TOP_K.clamp(value);
        }
        if let Some(value) = input.max_output_tokens {
            self.max_output_tokens = MAX_OUTPUT_TOKENS.clamp(value);
        }
        if let Some(value) = input.frequency_penalty {
            self.frequency_penalty = FREQUENCY_PENALTY.clamp(value);
        }
        if let Some(value) = input.presence_penalty {
            self.presence_penalty = PRESENCE_PENALTY.clamp(value);
        }
    }

    /// Select a sample prompt, overwriting the prompt field
    pub fn select_sample_prompt(&mut self, sample: SamplePrompt) {
        self.sample = sample;
        sample.text().clone_into(&mut self.prompt);
    }

    /// API key and prompt, when both are non-empty
    pub fn submission(&self) -> Option<(&SecretString, &str)> {
        let api_key = self.api_key.as_ref().filter(|key| !key.expose_secret().is_empty())?;
        (!self.prompt.is_empty()).then_some((api_key, self.prompt.as_str()))
    }

    /// Whether the generate button is enabled
    pub fn can_submit(&self) -> bool {
        self.submission().is_some()
    }

    /// Generation parameters for the current form contents
    pub fn parameters(&self) -> GenerationParameters {
        GenerationParameters {
            temperature: self.temperature,
            top_p: self.top_p,
            top_k: self.top_k,
            max_output_tokens: self.max_output_tokens,
            stop_sequences: parse_stop_sequences(&self.stop_sequences),
            frequency_penalty: self.frequency_penalty,
            presence_penalty: self.presence_penalty,
        }
    }
}
