use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Gemini models offered by the model selector
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum ModelName {
    #[default]
    #[serde(rename = "gemini-1.0-pro")]
    #[strum(serialize = "gemini-1.0-pro")]
    Gemini10Pro,
    #[serde(rename = "gemini-1.5-pro")]
    #[strum(serialize = "gemini-1.5-pro")]
    Gemini15Pro,
    #[serde(rename = "gemini-1.5-flash")]
    #[strum(serialize = "gemini-1.5-flash")]
    Gemini15Flash,
}

/// Canned prompts offered by the sample prompt selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SamplePrompt {
    /// Empty, user-editable prompt
    #[default]
    Custom,
    CreativeWriting,
    FactualQuery,
    CodeGeneration,
    ProblemSolving,
    ReasoningTask,
}

impl SamplePrompt {
    /// Label shown in the selector
    pub const fn label(self) -> &'static str {
        match self {
            Self::Custom => "Create your own prompt",
            Self::CreativeWriting => "Creative Writing",
            Self::FactualQuery => "Factual Query",
            Self::CodeGeneration => "Code Generation",
            Self::ProblemSolving => "Problem Solving",
            Self::ReasoningTask => "Reasoning Task",
        }
    }

    /// Literal prompt text; empty for `Custom`
    pub const fn text(self) -> &'static str {
        match self {
            Self::Custom => "",
            Self::CreativeWriting => "Write a short story about an AI that learns to feel emotions.",
            Self::FactualQuery => "Explain how transformer neural networks work in simple terms.",
            Self::CodeGeneration => {
                "Write a Python function that takes a list of numbers and returns the median value."
            }
            Self::ProblemSolving => {
                "I need to organize a team dinner for 12 people with various dietary restrictions. How should I \
                 approach this?"
            }
            Self::ReasoningTask => {
                "If it takes 5 machines 5 minutes to make 5 widgets, how long would it take 100 machines to make \
                 100 widgets?"
            }
        }
    }
}
