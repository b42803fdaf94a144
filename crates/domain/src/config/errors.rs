#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),

    #[error("Invalid record '{text}': {reason}")]
    RecordSyntax { text: String, reason: String },

    #[error("unknown property '{0}'")]
    UnknownDirective(String),

    #[error("deleg directive can only be declared once per server block without zones")]
    DuplicateBlock,

    #[error("Wrong argument count or unexpected line ending after '{0}'")]
    MissingArgument(String),
}

impl ConfigError {
    pub fn record_syntax(text: &str, reason: impl Into<String>) -> Self {
        Self::RecordSyntax {
            text: text.to_string(),
            reason: reason.into(),
        }
    }
}
