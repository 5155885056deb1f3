pub mod action;
pub mod collaborators;
pub mod error;
pub mod service;

pub use action::ReviewAction;
pub use collaborators::{
    AuthGate, AutoConfirm, ChangeSubmitter, Confirmation, ConfirmationRequest,
    ConfirmationResponse, CurrentRevisionSelector, Notifier, RevisionSelector, SelectedRevisions,
    TracingNotifier, TransportChangeSubmitter,
};
pub use error::{CascadeError, SubmissionError};
pub use service::{CascadeStatus, PostedReview, ReviewOutcome, ReviewSubmissionService, SubmitOptions};

#[cfg(test)]
mod testing;
