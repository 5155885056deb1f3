use thiserror::Error;

use greview_core::{ChangeId, CoreError};
use greview_rest::RestError;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("not logged in to the review server")]
    NotAuthenticated,
    #[error("invalid review: {0}")]
    Validation(#[from] CoreError),
    #[error("failed to fetch draft comments for change {change}: {source}")]
    Fetch {
        change: ChangeId,
        #[source]
        source: RestError,
    },
    #[error("failed to post review on change {change}: {source}")]
    Submit {
        change: ChangeId,
        #[source]
        source: RestError,
    },
}

impl SubmissionError {
    pub fn server_message(&self) -> Option<&str> {
        match self {
            SubmissionError::Fetch { source, .. } | SubmissionError::Submit { source, .. } => {
                source.server_message()
            }
            _ => None,
        }
    }
}

/// The follow-up submit failed. The review itself stays posted.
#[derive(Debug, Error)]
#[error("review posted but submitting change {change} failed: {source}")]
pub struct CascadeError {
    pub change: ChangeId,
    #[source]
    pub source: RestError,
}
