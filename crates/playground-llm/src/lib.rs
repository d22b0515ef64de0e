//! Core of the Gemini hyperparameter playground
//!
//! Collects generation parameters from a form, turns them into a single
//! `generateContent` call against the Google Generative Language API, and
//! keeps the outcome in an explicit per-session state for re-display.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod convert;
pub mod error;
pub mod form;
pub mod mediator;
pub mod protocol;
pub mod provider;
pub mod session;
pub mod types;

pub use error::LlmError;
pub use form::{FormInput, FormState};
pub use mediator::Mediator;
pub use provider::{GenerateContent, GenerationConfig, Provider};
pub use session::{Outcome, SessionState, Theme};
pub use types::{GenerationParameters, ModelName, RequestRecord, SamplePrompt};
