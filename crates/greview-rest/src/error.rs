use thiserror::Error;

#[derive(Debug, Error)]
pub enum RestError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl RestError {
    /// The text the server sent back, when it sent any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RestError::Rejected { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            RestError::Rejected { status, .. } => Some(*status),
            RestError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
