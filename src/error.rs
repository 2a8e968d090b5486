use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Image encoding error: {0}")]
    Encode(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Empty response from translation service")]
    EmptyResponse,

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Invalid state transition: {current} -> {requested}")]
    InvalidTransition { current: String, requested: String },

    #[error("A translation request is already in flight")]
    RequestInFlight,

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// The message shown to the user when a translate call ends in this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Encode(_) => "Failed to process the image.".to_string(),
            Self::Transport(e) => format!("Error: {}", e),
            Self::EmptyResponse => "No data received from the server.".to_string(),
            Self::Parse(_) => "Failed to parse server response.".to_string(),
            Self::Server(msg) => format!("Error: {}", msg),
            other => other.to_string(),
        }
    }
}
