use thiserror::Error;

/// Failure of a single Enso API call.
///
/// Every binding surfaces failures through this type; a failed call never
/// produces a success value.
#[derive(Error, Debug)]
pub enum EnsoError {
    /// The API answered with a non-2xx status.
    #[error("API request failed with status code: {status}")]
    Status { status: u16, body: String },

    /// The request could not be completed (DNS, connect, reset, timeout).
    #[error("An HTTP error occurred: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body is not JSON.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("invalid endpoint url: {0}")]
    InvalidUrl(String),
}

impl EnsoError {
    pub fn kind(&self) -> &'static str {
        match self {
            EnsoError::Status { .. } => "status",
            EnsoError::Transport(_) => "transport",
            EnsoError::Decode(_) => "decode",
            EnsoError::InvalidArguments(_) => "invalid_arguments",
            EnsoError::InvalidUrl(_) => "invalid_url",
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            EnsoError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn invalid_arguments(message: impl std::fmt::Display) -> Self {
        EnsoError::InvalidArguments(message.to_string())
    }
}
