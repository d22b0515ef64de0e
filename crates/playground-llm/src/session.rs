//! Explicit per-session state re-displayed after every interaction

use secrecy::SecretString;

use crate::form::FormState;
use crate::types::RequestRecord;

/// Page colour scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Result of the most recent generation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success {
        text: String,
        /// e.g. `1.23 seconds`
        elapsed: String,
    },
    Failure {
        description: String,
    },
}

/// Everything a session shows between interactions
///
/// A success and a failure never coexist: recording one replaces the other.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub theme: Theme,
    pub form: FormState,
    last_request: Option<RequestRecord>,
    outcome: Option<Outcome>,
}

impl SessionState {
    /// New session whose form is pre-filled with `api_key`
    pub fn new(api_key: Option<SecretString>) -> Self {
        Self {
            form: FormState::with_api_key(api_key),
            ..Self::default()
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Parameters of the most recent attempt
    pub const fn last_request(&self) -> Option<&RequestRecord> {
        self.last_request.as_ref()
    }

    pub const fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Text of the last successful response
    pub fn response(&self) -> Option<&str> {
        match &self.outcome {
            Some(Outcome::Success { text, .. }) => Some(text),
            _ => None,
        }
    }

    /// Elapsed time of the last successful response
    pub fn response_time(&self) -> Option<&str> {
        match &self.outcome {
            Some(Outcome::Success { elapsed, .. }) => Some(elapsed),
            _ => None,
        }
    }

    /// Description of the last failure
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Some(Outcome::Failure { description }) => Some(description),
            _ => None,
        }
    }

    /// Take the form and generation results of `other`, keeping this
    /// session's theme
    pub fn adopt_generation(&mut self, other: Self) {
        self.form = other.form;
        self.last_request = other.last_request;
        self.outcome = other.outcome;
    }

    pub(crate) fn clear_error(&mut self) {
        if matches!(self.outcome, Some(Outcome::Failure { .. })) {
            self.outcome = None;
        }
    }

    pub(crate) fn record_request(&mut self, record: RequestRecord) {
        self.last_request = Some(record);
    }

    pub(crate) fn record_outcome(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
    }
}
