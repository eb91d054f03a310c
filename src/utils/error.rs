use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Response is not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl ClientError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ClientError::Transport(_) => "Check that the backend is running and the base URL is reachable",
            ClientError::Decode(_) => "The backend answered with a non-JSON body; check the base URL points at the API prefix",
            ClientError::InvalidUrl(_) | ClientError::InvalidConfigValue { .. } => {
                "Fix the base URL, e.g. http://localhost:5001/api"
            }
            ClientError::Io(_) => "Check that the config file exists and is readable",
            ClientError::Serialization(_) => "Check the request arguments",
            ClientError::Config { .. } => "Check the config file syntax",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
