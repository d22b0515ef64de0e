//! Turns a submitted form into one provider call and records the outcome

use std::sync::Arc;
use std::time::{Duration, Instant};

use playground_config::ProviderConfig;

use crate::provider::google::GoogleProvider;
use crate::provider::{GenerateContent, GenerationConfig, Provider};
use crate::session::{Outcome, SessionState};
use crate::types::RequestRecord;

/// Runs generation requests on behalf of a session
#[derive(Clone)]
pub struct Mediator {
    provider: Arc<dyn Provider>,
    forward_penalties: bool,
}

impl Mediator {
    pub fn new(provider: Arc<dyn Provider>, forward_penalties: bool) -> Self {
        Self {
            provider,
            forward_penalties,
        }
    }

    /// Mediator backed by the Google provider described by `config`
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(Arc::new(GoogleProvider::new(config)), config.forward_penalties)
    }

    /// Generate a response for the session's current form
    ///
    /// Returns `None` without touching the session when the form cannot be
    /// submitted (missing API key or prompt). Otherwise the previous error is
    /// cleared, the request record replaced, and exactly one provider call
    /// made; its success or failure becomes the session's outcome.
    pub async fn generate<'s>(&self, session: &'s mut SessionState) -> Option<&'s Outcome> {
        let Some((api_key, prompt)) = session.form.submission() else {
            tracing::debug!("generation skipped: API key or prompt missing");
            return None;
        };
        let api_key = api_key.clone();
        let prompt = prompt.to_owned();

        session.clear_error();

        let model = session.form.model;
        let parameters = session.form.parameters();
        let config = GenerationConfig::from_parameters(&parameters, self.forward_penalties);
        session.record_request(RequestRecord::new(model, parameters));

        let request = GenerateContent {
            api_key: &api_key,
            model,
            config,
            prompt: &prompt,
        };

        let start = Instant::now();
        let result = self.provider.generate_content(&request).await;
        let elapsed = start.elapsed();

        let outcome = match result {
            Ok(text) => {
                tracing::info!(
                    provider = self.provider.name(),
                    %model,
                    elapsed_ms = elapsed.as_millis(),
                    "generation succeeded"
                );
                Outcome::Success {
                    text,
                    elapsed: format_elapsed(elapsed),
                }
            }
            Err(e) => {
                tracing::warn!(
                    provider = self.provider.name(),
                    %model,
                    elapsed_ms = elapsed.as_millis(),
                    error = %e,
                    "generation failed"
                );
                Outcome::Failure {
                    description: e.description().to_owned(),
                }
            }
        };

        session.record_outcome(outcome);
        session.outcome()
    }
}

/// Seconds with two decimals, e.g. `1.23 seconds`
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2} seconds", elapsed.as_secs_f64())
}
