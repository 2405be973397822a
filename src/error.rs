use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlakeError>;

#[derive(Debug, Error)]
pub enum FlakeError {
    /// Fewer than two positional arguments.
    #[error("Usage: {program} <name> <language> [-p packages] [-d description]")]
    Usage { program: String },

    /// `--help` / `--version` output; the caller decides when to exit.
    #[error("{0}")]
    Clap(clap::Error),

    /// Malformed flags; holds clap's rendered message.
    #[error("{0}")]
    FlagParse(String),

    #[error("Failed to parse {template} template: {message}")]
    TemplateParse { template: String, message: String },

    #[error("Failed to render template: {0}")]
    TemplateExec(String),

    #[error("Failed to load config: {0:#}")]
    Config(#[source] anyhow::Error),

    #[error("Failed to write flake: {0}")]
    Io(#[from] std::io::Error),
}

impl FlakeError {
    pub fn template_parse(template: &str, message: impl Into<String>) -> Self {
        FlakeError::TemplateParse {
            template: template.to_string(),
            message: message.into(),
        }
    }

    pub fn template_exec(message: impl Into<String>) -> Self {
        FlakeError::TemplateExec(message.into())
    }
}
