use thiserror::Error;

use super::validation::ValidationError;

#[derive(Error, Debug)]
pub enum SpyCatError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("HTTP error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("SpyCatError: {0}")]
    Custom(String),
}

impl SpyCatError {
    /// Message shown to the user when a create request fails.
    ///
    /// Status errors surface the server's response body as-is.
    pub fn user_message(&self) -> String {
        match self {
            SpyCatError::Status { body, .. } if !body.is_empty() => body.clone(),
            other => other.to_string(),
        }
    }
}

impl From<std::io::Error> for SpyCatError {
    fn from(error: std::io::Error) -> Self {
        SpyCatError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for SpyCatError {
    fn from(error: reqwest::Error) -> Self {
        SpyCatError::Reqwest(Box::new(error))
    }
}
