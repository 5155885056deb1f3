use std::sync::Arc;

use greview_core::types::ReviewInput;
use greview_core::{build_review, map_drafts, ChangeId, LabelCatalog, RevisionId};
use greview_rest::ReviewTransport;

use crate::collaborators::{
    AutoConfirm, ChangeSubmitter, Confirmation, ConfirmationRequest, TransportChangeSubmitter,
};
use crate::error::{CascadeError, SubmissionError};

/// Per-invocation knobs for [`ReviewSubmissionService::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOptions {
    pub show_confirmation: bool,
    pub message: Option<String>,
    /// `false` forces the server's notify policy to `NONE`.
    pub notify: bool,
    /// Submit the change once the review has been posted.
    pub cascade_submit: bool,
}

impl Default for SubmitOptions {
    fn default() -> Self {
        Self {
            show_confirmation: false,
            message: None,
            notify: true,
            cascade_submit: false,
        }
    }
}

#[derive(Debug)]
pub enum CascadeStatus {
    NotRequested,
    Submitted,
    Failed(CascadeError),
}

impl CascadeStatus {
    pub fn ran(&self) -> bool {
        !matches!(self, CascadeStatus::NotRequested)
    }
}

#[derive(Debug)]
pub struct PostedReview {
    pub change: ChangeId,
    pub revision: RevisionId,
    pub review: ReviewInput,
    pub cascade: CascadeStatus,
}

#[derive(Debug)]
pub enum ReviewOutcome {
    /// The confirmation step was dismissed; nothing was sent.
    Cancelled,
    Posted(PostedReview),
}

impl ReviewOutcome {
    pub fn posted(&self) -> Option<&PostedReview> {
        match self {
            ReviewOutcome::Posted(posted) => Some(posted),
            ReviewOutcome::Cancelled => None,
        }
    }
}

/// Fetches drafts, builds the review, posts it and optionally submits the
/// change. Holds no per-submission state, so one instance can serve
/// concurrent submissions.
pub struct ReviewSubmissionService {
    transport: Arc<dyn ReviewTransport>,
    submitter: Arc<dyn ChangeSubmitter>,
    confirmation: Arc<dyn Confirmation>,
    labels: LabelCatalog,
}

impl ReviewSubmissionService {
    pub fn new(transport: Arc<dyn ReviewTransport>) -> Self {
        Self {
            submitter: Arc::new(TransportChangeSubmitter::new(transport.clone())),
            transport,
            confirmation: Arc::new(AutoConfirm),
            labels: LabelCatalog::default(),
        }
    }

    pub fn with_submitter(mut self, submitter: Arc<dyn ChangeSubmitter>) -> Self {
        self.submitter = submitter;
        self
    }

    pub fn with_confirmation(mut self, confirmation: Arc<dyn Confirmation>) -> Self {
        self.confirmation = confirmation;
        self
    }

    pub fn with_labels(mut self, labels: LabelCatalog) -> Self {
        self.labels = labels;
        self
    }

    pub fn labels(&self) -> &LabelCatalog {
        &self.labels
    }

    pub async fn submit(
        &self,
        change: &ChangeId,
        revision: &RevisionId,
        label: &str,
        rating: i32,
        options: SubmitOptions,
    ) -> Result<ReviewOutcome, SubmissionError> {
        self.labels.validate(label, rating)?;

        tracing::debug!(%change, %revision, "fetching draft comments");
        let drafts = self
            .transport
            .fetch_draft_comments(change, revision)
            .await
            .map_err(|source| SubmissionError::Fetch {
                change: change.clone(),
                source,
            })?;
        let draft_count: usize = drafts.values().map(Vec::len).sum();
        let comments = map_drafts(&drafts);

        let mut message = options.message;
        let mut notify = options.notify;
        let mut cascade_submit = options.cascade_submit;

        if options.show_confirmation {
            tracing::debug!(%change, "awaiting confirmation");
            let request = ConfirmationRequest {
                change: change.clone(),
                label: label.to_string(),
                rating,
                draft_count,
                message: message.clone(),
                notify,
                submit_change: cascade_submit,
            };
            let Some(response) = self.confirmation.confirm(&request).await else {
                tracing::debug!(%change, "review cancelled");
                return Ok(ReviewOutcome::Cancelled);
            };
            message = response.message;
            notify = response.notify;
            cascade_submit = response.submit_change;
        }

        let review = build_review(label, rating, message.as_deref(), notify, comments);

        tracing::debug!(%change, %revision, drafts = draft_count, "posting review");
        self.transport
            .post_review(change, revision, &review)
            .await
            .map_err(|source| SubmissionError::Submit {
                change: change.clone(),
                source,
            })?;
        tracing::info!(%change, %revision, "{label} {rating:+} posted");

        let cascade = if cascade_submit {
            tracing::debug!(%change, "submitting change");
            match self.submitter.submit_change(change).await {
                Ok(()) => CascadeStatus::Submitted,
                Err(source) => {
                    tracing::warn!(%change, "submit after review failed: {source}");
                    CascadeStatus::Failed(CascadeError {
                        change: change.clone(),
                        source,
                    })
                }
            }
        } else {
            CascadeStatus::NotRequested
        };

        Ok(ReviewOutcome::Posted(PostedReview {
            change: change.clone(),
            revision: revision.clone(),
            review,
            cascade,
        }))
    }
}
