use serde::{Deserialize, Serialize};

use super::model::ModelName;
use super::params::GenerationParameters;

/// Parameters actually used for a generation, kept for display
///
/// Includes settings that are not forwarded to the provider so the user
/// sees everything the form held when they pressed generate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestRecord {
    model: ModelName,
    parameters: GenerationParameters,
}

impl RequestRecord {
    pub const fn new(model: ModelName, parameters: GenerationParameters) -> Self {
        Self { model, parameters }
    }

    pub const fn model(&self) -> ModelName {
        self.model
    }

    pub const fn parameters(&self) -> &GenerationParameters {
        &self.parameters
    }

    /// `(name, value)` pairs for the parameter summary
    ///
    /// Fractional settings show one decimal like their sliders. Stop
    /// sequences read as a JSON array, or `None` when absent.
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        let p = &self.parameters;
        let stop_sequences = p.stop_sequences.as_ref().map_or_else(
            || "None".to_owned(),
            |seqs| serde_json::to_string(seqs).unwrap_or_else(|_| seqs.join(", ")),
        );

        vec![
            ("model", self.model.to_string()),
            ("temperature", format!("{:.1}", p.temperature)),
            ("top_p", format!("{:.1}", p.top_p)),
            ("top_k", p.top_k.to_string()),
            ("max_output_tokens", p.max_output_tokens.to_string()),
            ("stop_sequences", stop_sequences),
            ("frequency_penalty", format!("{:.1}", p.frequency_penalty)),
            ("presence_penalty", format!("{:.1}", p.presence_penalty)),
        ]
    }
}
