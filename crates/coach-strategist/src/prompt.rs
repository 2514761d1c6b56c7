//! Prompt template loading and rendering via `minijinja`.
//!
//! Templates are loaded from the filesystem (default: `templates/`
//! directory) so the coach's tone and output format can be tuned without
//! recompiling. The engine renders the serialized game-state snapshot
//! into a system/user prompt pair for the LLM backend.

use minijinja::Environment;

use crate::error::StrategistError;

/// Manages prompt template loading and rendering.
///
/// Wraps a `minijinja` [`Environment`] with the coach prompt templates
/// pre-loaded. Templates are read once at construction.
pub struct PromptEngine {
    env: Environment<'static>,
}

/// The complete rendered prompt ready to send to the LLM backend.
#[derive(Debug, Clone)]
pub struct RenderedPrompt {
    /// System message establishing the coach persona.
    pub system: String,
    /// User message containing the match situation and output format.
    pub user: String,
}

impl PromptEngine {
    /// Create a prompt engine loading templates from the given directory.
    ///
    /// The directory must contain: `system.j2`, `situation.j2`,
    /// `format.j2`.
    pub fn new(templates_dir: &str) -> Result<Self, StrategistError> {
        let mut env = Environment::new();

        let system_tpl = load_template(templates_dir, "system.j2")?;
        let situation_tpl = load_template(templates_dir, "situation.j2")?;
        let format_tpl = load_template(templates_dir, "format.j2")?;

        env.add_template_owned("system", system_tpl)
            .map_err(|e| StrategistError::Template(format!("failed to add system template: {e}")))?;
        env.add_template_owned("situation", situation_tpl).map_err(|e| {
            StrategistError::Template(format!("failed to add situation template: {e}"))
        })?;
        env.add_template_owned("format", format_tpl)
            .map_err(|e| StrategistError::Template(format!("failed to add format template: {e}")))?;

        Ok(Self { env })
    }

    /// Render the full prompt for one analysis call.
    ///
    /// Takes the game state serialized as a `serde_json::Value` and
    /// produces a [`RenderedPrompt`] with system and user messages.
    pub fn render(&self, state: &serde_json::Value) -> Result<RenderedPrompt, StrategistError> {
        let system = self
            .env
            .get_template("system")
            .map_err(|e| StrategistError::Template(format!("missing system template: {e}")))?
            .render(state)
            .map_err(|e| StrategistError::Template(format!("system render failed: {e}")))?;

        let situation = self
            .env
            .get_template("situation")
            .map_err(|e| StrategistError::Template(format!("missing situation template: {e}")))?
            .render(state)
            .map_err(|e| StrategistError::Template(format!("situation render failed: {e}")))?;

        let format = self
            .env
            .get_template("format")
            .map_err(|e| StrategistError::Template(format!("missing format template: {e}")))?
            .render(state)
            .map_err(|e| StrategistError::Template(format!("format render failed: {e}")))?;

        let user = format!("{situation}\n\n{format}");

        Ok(RenderedPrompt { system, user })
    }
}

/// Read a template file from disk.
fn load_template(dir: &str, filename: &str) -> Result<String, StrategistError> {
    let path = format!("{dir}/{filename}");
    std::fs::read_to_string(&path)
        .map_err(|e| StrategistError::Template(format!("failed to read {path}: {e}")))
}
