use serde::{Deserialize, Serialize};

/// Range, step and default of a numeric form control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSpec<T> {
    /// Form field name
    pub name: &'static str,
    /// Label shown next to the control
    pub label: &'static str,
    pub min: T,
    pub max: T,
    pub step: T,
    pub default: T,
    /// Help text shown under the control
    pub help: &'static str,
}

impl ParameterSpec<f64> {
    /// Clamp a value into range; non-finite input falls back to the default
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_finite() {
            value.clamp(self.min, self.max)
        } else {
            self.default
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Step for a range input; every fractional control's default and
    /// maximum already sit on its `step` grid
    pub const fn input_step(&self) -> f64 {
        self.step
    }
}

impl ParameterSpec<u32> {
    /// Clamp a possibly out-of-range integer into range
    pub fn clamp(&self, value: i64) -> u32 {
        let clamped = value.clamp(i64::from(self.min), i64::from(self.max));
        u32::try_from(clamped).unwrap_or(self.default)
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Step for a range input whose grid holds both the default and the
    /// maximum
    ///
    /// A range input only accepts `min + n * step`, so when the default or
    /// maximum is off the `step` grid the largest step that divides all
    /// three offsets is used instead.
    pub const fn input_step(&self) -> u32 {
        gcd(gcd(self.step, self.default - self.min), self.max - self.min)
    }
}

const fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 { a } else { gcd(b, a % b) }
}

pub const TEMPERATURE: ParameterSpec<f64> = ParameterSpec {
    name: "temperature",
    label: "Temperature",
    min: 0.0,
    max: 1.0,
    step: 0.1,
    default: 0.7,
    help: "Controls randomness. Lower values make responses more focused and deterministic, higher values make \
           responses more creative and varied.",
};

pub const TOP_P: ParameterSpec<f64> = ParameterSpec {
    name: "top_p",
    label: "Top-p (Nucleus Sampling)",
    min: 0.0,
    max: 1.0,
    step: 0.1,
    default: 0.9,
    help: "Controls diversity by considering tokens with top_p probability mass. Lower values make responses more \
           focused, higher values introduce more diversity.",
};

pub const TOP_K: ParameterSpec<u32> = ParameterSpec {
    name: "top_k",
    label: "Top-k",
    min: 1,
    max: 100,
    step: 1,
    default: 40,
    help: "Limits token selection to the top k most likely tokens. Lower values generate more predictable text, \
           higher values allow more variety.",
};

pub const MAX_OUTPUT_TOKENS: ParameterSpec<u32> = ParameterSpec {
    name: "max_output_tokens",
    label: "Maximum Output Tokens",
    min: 50,
    max: 8192,
    step: 50,
    default: 1024,
    help: "Maximum number of tokens to generate in the response.",
};

pub const FREQUENCY_PENALTY: ParameterSpec<f64> = ParameterSpec {
    name: "frequency_penalty",
    label: "Frequency Penalty",
    min: 0.0,
    max: 2.0,
    step: 0.1,
    default: 0.0,
    help: "Reduces repetition by penalizing tokens based on their frequency in the text so far.",
};

pub const PRESENCE_PENALTY: ParameterSpec<f64> = ParameterSpec {
    name: "presence_penalty",
    label: "Presence Penalty",
    min: 0.0,
    max: 2.0,
    step: 0.1,
    default: 0.0,
    help: "Reduces repetition by penalizing tokens that have appeared at all in the text so far.",
};

/// Settings for one generation request
///
/// Every numeric field lies within the bounds of its `ParameterSpec`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
    /// `None` means no restriction; never `Some` of an empty list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE.default,
            top_p: TOP_P.default,
            top_k: TOP_K.default,
            max_output_tokens: MAX_OUTPUT_TOKENS.default,
            stop_sequences: None,
            frequency_penalty: FREQUENCY_PENALTY.default,
            presence_penalty: PRESENCE_PENALTY.default,
        }
    }
}

impl GenerationParameters {
    /// Whether every numeric field is within its control's range
    pub fn is_within_bounds(&self) -> bool {
        TEMPERATURE.contains(self.temperature)
            && TOP_P.contains(self.top_p)
            && TOP_K.contains(self.top_k)
            && MAX_OUTPUT_TOKENS.contains(self.max_output_tokens)
            && FREQUENCY_PENALTY.contains(self.frequency_penalty)
            && PRESENCE_PENALTY.contains(self.presence_penalty)
    }
}

/// Split free text into stop sequences, one per line
///
/// Lines are trimmed and blank lines dropped. Returns `None` when nothing
/// remains so that an empty list is never sent to the provider.
pub fn parse_stop_sequences(text: &str) -> Option<Vec<String>> {
    let sequences: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();

    (!sequences.is_empty()).then_some(sequences)
}
