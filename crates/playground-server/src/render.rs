//! HTML rendering of a session's state

use minijinja::Environment;
use playground_llm::{FormState, SessionState};
use playground_llm::types::{
    FREQUENCY_PENALTY, MAX_OUTPUT_TOKENS, ModelName, PRESENCE_PENALTY, ParameterSpec, SamplePrompt, TEMPERATURE,
    TOP_K, TOP_P,
};
use secrecy::ExposeSecret;
use serde::Serialize;
use strum::IntoEnumIterator;

const PAGE_TEMPLATE: &str = "page.html";

/// Renders the single playground page
pub struct PageRenderer {
    env: Environment<'static>,
}

#[derive(Serialize)]
struct PageView<'a> {
    theme: &'static str,
    theme_toggle_label: &'static str,
    api_key: &'a str,
    models: Vec<OptionView>,
    samples: Vec<OptionView>,
    prompt: &'a str,
    controls: Vec<ControlView>,
    stop_sequences: &'a str,
    can_submit: bool,
    response: Option<&'a str>,
    response_time: Option<&'a str>,
    summary: Vec<SummaryLine>,
    error: Option<&'a str>,
}

#[derive(Serialize)]
struct OptionView {
    value: String,
    label: String,
    selected: bool,
}

#[derive(Serialize)]
struct ControlView {
    name: &'static str,
    label: &'static str,
    help: &'static str,
    min: String,
    max: String,
    step: String,
    value: String,
}

#[derive(Serialize)]
struct SummaryLine {
    key: &'static str,
    value: String,
}

impl ControlView {
    fn new<T: ToString + Copy>(spec: &ParameterSpec<T>, step: T, value: T) -> Self {
        Self {
            name: spec.name,
            label: spec.label,
            help: spec.help,
            min: spec.min.to_string(),
            max: spec.max.to_string(),
            step: step.to_string(),
            value: value.to_string(),
        }
    }
}

fn controls(form: &FormState) -> Vec<ControlView> {
    vec![
        ControlView::new(&TEMPERATURE, TEMPERATURE.input_step(), form.temperature),
        ControlView::new(&TOP_P, TOP_P.input_step(), form.top_p),
        ControlView::new(&TOP_K, TOP_K.input_step(), form.top_k),
        ControlView::new(&MAX_OUTPUT_TOKENS, MAX_OUTPUT_TOKENS.input_step(), form.max_output_tokens),
        ControlView::new(&FREQUENCY_PENALTY, FREQUENCY_PENALTY.input_step(), form.frequency_penalty),
        ControlView::new(&PRESENCE_PENALTY, PRESENCE_PENALTY.input_step(), form.presence_penalty),
    ]
}

impl PageRenderer {
    /// Compile the page template
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(PAGE_TEMPLATE, include_str!("../templates/page.html"))?;
        Ok(Self { env })
    }

    /// Render the page for a session
    pub fn render(&self, session: &SessionState) -> Result<String, minijinja::Error> {
        let form = &session.form;

        let models = ModelName::iter()
            .map(|model| OptionView {
                value: model.to_string(),
                label: model.to_string(),
                selected: model == form.model,
            })
            .collect();

        let samples = SamplePrompt::iter()
            .map(|sample| OptionView {
                value: sample.as_ref().to_owned(),
                label: sample.label().to_owned(),
                selected: sample == form.sample,
            })
            .collect();

        // The summary accompanies a successful response only
        let summary = match (session.response(), session.last_request()) {
            (Some(_), Some(record)) => record
                .summary()
                .into_iter()
                .map(|(key, value)| SummaryLine { key, value })
                .collect(),
            _ => Vec::new(),
        };

        let view = PageView {
            theme: session.theme.as_str(),
            theme_toggle_label: match session.theme {
                playground_llm::Theme::Light => "Dark Mode",
                playground_llm::Theme::Dark => "Light Mode",
            },
            api_key: form.api_key.as_ref().map_or("", |key| key.expose_secret()),
            models,
            samples,
            prompt: &form.prompt,
            controls: controls(form),
            stop_sequences: &form.stop_sequences,
            can_submit: form.can_submit(),
            response: session.response(),
            response_time: session.response_time(),
            summary,
            error: session.error(),
        };

        self.env.get_template(PAGE_TEMPLATE)?.render(view)
    }
}

#[cfg(test)]
mod tests {
    use playground_llm::FormInput;

    use super::*;

    fn render(session: &SessionState) -> String {
        PageRenderer::new().unwrap().render(session).unwrap()
    }

    #[test]
    fn fresh_session_disables_generate() {
        let html = render(&SessionState::default());
        assert!(html.contains("id=\"generate\""));
        assert!(html.contains("disabled"));
        assert!(html.contains("gemini-1.5-flash"));
        assert!(html.contains("Create your own prompt"));
        assert!(html.contains("Learn About Hyperparameters"));
    }

    #[test]
    fn prompt_text_is_escaped() {
        let mut session = SessionState::default();
        session.form.apply(FormInput {
            prompt: "<script>alert(1)</script>".to_owned(),
            ..FormInput::default()
        });

        let html = render(&session);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    fn on_grid(value: &str, min: &str, step: &str) -> bool {
        let (value, min, step): (f64, f64, f64) = (value.parse().unwrap(), min.parse().unwrap(), step.parse().unwrap());
        let steps = (value - min) / step;
        (steps - steps.round()).abs() < 1e-6
    }

    #[test]
    fn defaults_and_maxima_sit_on_input_grid() {
        for control in controls(&FormState::default()) {
            assert!(
                on_grid(&control.value, &control.min, &control.step),
                "{} default {} off grid",
                control.name,
                control.value
            );
            assert!(
                on_grid(&control.max, &control.min, &control.step),
                "{} max {} off grid",
                control.name,
                control.max
            );
        }
    }

    #[test]
    fn token_slider_keeps_default_and_max() {
        let html = render(&SessionState::default());
        assert!(html.contains("min=\"50\" max=\"8192\" step=\"2\" value=\"1024\""));
    }

    #[test]
    fn dark_theme_is_applied() {
        let mut session = SessionState::default();
        session.toggle_theme();

        let html = render(&session);
        assert!(html.contains("class=\"dark-theme\""));
        assert!(html.contains("Light Mode"));
    }
}
