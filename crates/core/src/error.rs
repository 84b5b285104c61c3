use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search text is empty")]
    EmptyInput,

    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Service(String),

    #[error("invalid response from {status}: {details}")]
    BackendResponse { status: String, details: String },

    #[error("serialize error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("regex error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid global id: {0}")]
    InvalidGlobalId(String),
}

impl SearchError {
    /// Text shown in the shell's error banner. Service errors are passed
    /// through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            SearchError::Service(message) => message.clone(),
            SearchError::Transport(_) => format!("Failed to fetch professor data: {self}"),
            other => other.to_string(),
        }
    }
}
