//! Domain types shared by the form, mediator and presentation layer

pub mod model;
pub mod params;
pub mod record;

pub use model::{ModelName, SamplePrompt};
pub use params::{
    FREQUENCY_PENALTY, GenerationParameters, MAX_OUTPUT_TOKENS, PRESENCE_PENALTY, ParameterSpec, TEMPERATURE, TOP_K,
    TOP_P, parse_stop_sequences,
};
pub use record::RequestRecord;
