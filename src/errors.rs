use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("invalid settings: {0}")]
    Config(String),

    #[error("invalid target configuration {path}: {reason}")]
    Targets { path: String, reason: String },

    #[error("API key rejected: {0}")]
    Credential(String),

    #[error("{endpoint} failed with status {status}: {message}")]
    Api {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed settings file: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
