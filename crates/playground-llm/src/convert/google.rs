//! Conversion between internal types and Google Generative Language wire format

use crate::error::LlmError;
use crate::protocol::google::{
    GoogleContent, GoogleErrorResponse, GoogleGenerationConfig, GooglePart, GoogleRequest, GoogleResponse,
};
use crate::provider::{GenerateContent, GenerationConfig};

// -- Outbound: model handle -> Google wire request --

impl From<&GenerationConfig> for GoogleGenerationConfig {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            temperature: Some(config.temperature),
            top_p: Some(config.top_p),
            top_k: Some(config.top_k),
            max_output_tokens: Some(config.max_output_tokens),
            stop_sequences: config.stop_sequences.clone().filter(|seqs| !seqs.is_empty()),
            frequency_penalty: config.frequency_penalty,
            presence_penalty: config.presence_penalty,
        }
    }
}

impl From<&GenerateContent<'_>> for GoogleRequest {
    fn from(request: &GenerateContent<'_>) -> Self {
        Self {
            contents: vec![GoogleContent {
                role: Some("user".to_owned()),
                parts: vec![GooglePart {
                    text: Some(request.prompt.to_owned()),
                }],
            }],
            generation_config: Some((&request.config).into()),
        }
    }
}

// -- Inbound: Google wire response -> text --

impl GoogleResponse {
    /// Concatenated text of the first candidate
    ///
    /// A response without candidates, or whose first candidate carries no
    /// text (e.g. blocked by safety filters), is a failure.
    pub fn into_text(self) -> Result<String, LlmError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            let description = match self.prompt_feedback.and_then(|f| f.block_reason) {
                Some(reason) => format!("prompt was blocked (reason: {reason})"),
                None => "response contained no candidates".to_owned(),
            };
            return Err(LlmError::ProviderCallFailed(description));
        };

        let text: String = candidate
            .content
            .into_iter()
            .flat_map(|content| content.parts)
            .filter_map(|part| part.text)
            .collect();

        if text.is_empty() {
            let reason = candidate.finish_reason.as_deref().unwrap_or("unknown");
            return Err(LlmError::ProviderCallFailed(format!(
                "response contained no text (finish reason: {reason})"
            )));
        }

        Ok(text)
    }
}

/// Describe a non-2xx response
///
/// Uses the message from Google's error envelope when the body has one.
pub fn describe_error(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<GoogleErrorResponse>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => {
            format!("{} {}", status.as_u16(), envelope.error.message)
        }
        _ => format!("provider returned {status}: {body}"),
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;
    use serde_json::json;

    use super::*;
    use crate::types::{GenerationParameters, ModelName};

    fn request<'a>(api_key: &'a SecretString, params: &GenerationParameters, forward: bool) -> GenerateContent<'a> {
        GenerateContent {
            api_key,
            model: ModelName::Gemini15Flash,
            config: GenerationConfig::from_parameters(params, forward),
            prompt: "Tell me a joke",
        }
    }

    #[test]
    fn request_serializes_generation_config() {
        let key = SecretString::from("k".to_owned());
        let params = GenerationParameters {
            stop_sequences: Some(vec!["END".to_owned()]),
            ..GenerationParameters::default()
        };

        let wire: GoogleRequest = (&request(&key, &params, false)).into();
        let value = serde_json::to_value(&wire).unwrap();

        assert_eq!(
            value,
            json!({
                "contents": [{"role": "user", "parts": [{"text": "Tell me a joke"}]}],
                "generationConfig": {
                    "temperature": 0.7,
                    "topP": 0.9,
                    "topK": 40,
                    "maxOutputTokens": 1024,
                    "stopSequences": ["END"]
                }
            })
        );
    }

    #[test]
    fn absent_stop_sequences_are_omitted() {
        let key = SecretString::from("k".to_owned());
        let wire: GoogleRequest = (&request(&key, &GenerationParameters::default(), false)).into();
        let value = serde_json::to_value(&wire).unwrap();

        assert!(value["generationConfig"].get("stopSequences").is_none());
        assert!(value["generationConfig"].get("presencePenalty").is_none());
    }

    #[test]
    fn forwarded_penalties_are_serialized() {
        let key = SecretString::from("k".to_owned());
        let params = GenerationParameters {
            frequency_penalty: 0.5,
            presence_penalty: 1.5,
            ..GenerationParameters::default()
        };
        let wire: GoogleRequest = (&request(&key, &params, true)).into();
        let value = serde_json::to_value(&wire).unwrap();

        assert_eq!(value["generationConfig"]["frequencyPenalty"], 0.5);
        assert_eq!(value["generationConfig"]["presencePenalty"], 1.5);
    }

    #[test]
    fn text_joins_parts_of_first_candidate() {
        let response: GoogleResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Hello, "}, {"text": "world"}]}, "finishReason": "STOP"},
                {"content": {"role": "model", "parts": [{"text": "ignored"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 3, "candidatesTokenCount": 2, "totalTokenCount": 5}
        }))
        .unwrap();

        assert_eq!(response.into_text().unwrap(), "Hello, world");
    }

    #[test]
    fn blocked_prompt_is_a_failure() {
        let response: GoogleResponse =
            serde_json::from_value(json!({"promptFeedback": {"blockReason": "SAFETY"}})).unwrap();

        let err = response.into_text().unwrap_err();
        assert_eq!(err.description(), "prompt was blocked (reason: SAFETY)");
    }

    #[test]
    fn candidate_without_text_is_a_failure() {
        let response: GoogleResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "SAFETY", "index": 0}]})).unwrap();

        let err = response.into_text().unwrap_err();
        assert_eq!(err.description(), "response contained no text (finish reason: SAFETY)");
    }

    #[test]
    fn error_envelope_message_is_used() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(
            describe_error(reqwest::StatusCode::BAD_REQUEST, body),
            "400 API key not valid. Please pass a valid API key."
        );
    }

    #[test]
    fn unparseable_error_body_is_kept_verbatim() {
        assert_eq!(
            describe_error(reqwest::StatusCode::BAD_GATEWAY, "upstream down"),
            "provider returned 502 Bad Gateway: upstream down"
        );
    }
}
