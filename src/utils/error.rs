use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Environment variable not set: {name}")]
    MissingEnvVar { name: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FetchError {
    /// Whether the error came from the config layer rather than the network.
    pub fn is_config_error(&self) -> bool {
        !matches!(self, FetchError::Transport(_))
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
