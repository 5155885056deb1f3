use std::sync::Mutex;

use async_trait::async_trait;

use greview_core::types::{ChangeInfo, DraftMap, ReviewInput};
use greview_core::{ChangeId, RevisionId};
use greview_rest::{RestError, ReviewTransport};

use crate::collaborators::{
    AuthGate, Confirmation, ConfirmationRequest, ConfirmationResponse, Notifier,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetChange(ChangeId),
    FetchDrafts(ChangeId, RevisionId),
    PostReview(ChangeId, RevisionId, ReviewInput),
    SubmitChange(ChangeId),
}

/// In-memory review server that records every call in order.
#[derive(Default)]
pub struct FakeGerrit {
    pub drafts: DraftMap,
    pub fail_fetch: bool,
    pub reject_post: Option<String>,
    pub reject_submit: Option<String>,
    pub(crate) calls: Mutex<Vec<Call>>,
}

impl FakeGerrit {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn posted(&self) -> Vec<ReviewInput> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::PostReview(_, _, review) => Some(review),
                _ => None,
            })
            .collect()
    }

    pub fn submit_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::SubmitChange(_)))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ReviewTransport for FakeGerrit {
    async fn get_change(&self, change: &ChangeId) -> Result<ChangeInfo, RestError> {
        self.record(Call::GetChange(change.clone()));
        Ok(ChangeInfo::new(change.clone(), "Fix bug"))
    }

    async fn fetch_draft_comments(
        &self,
        change: &ChangeId,
        revision: &RevisionId,
    ) -> Result<DraftMap, RestError> {
        self.record(Call::FetchDrafts(change.clone(), revision.clone()));
        if self.fail_fetch {
            return Err(RestError::ConnectionFailed("connection refused".into()));
        }
        Ok(self.drafts.clone())
    }

    async fn post_review(
        &self,
        change: &ChangeId,
        revision: &RevisionId,
        review: &ReviewInput,
    ) -> Result<(), RestError> {
        self.record(Call::PostReview(
            change.clone(),
            revision.clone(),
            review.clone(),
        ));
        match &self.reject_post {
            Some(message) => Err(RestError::Rejected {
                status: 403,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    async fn submit_change(&self, change: &ChangeId) -> Result<(), RestError> {
        self.record(Call::SubmitChange(change.clone()));
        match &self.reject_submit {
            Some(message) => Err(RestError::Rejected {
                status: 409,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Answers every prompt with a fixed response and remembers the prompts.
pub struct ScriptedConfirmation {
    response: Option<ConfirmationResponse>,
    seen: Mutex<Vec<ConfirmationRequest>>,
}

impl ScriptedConfirmation {
    pub fn answering(response: Option<ConfirmationResponse>) -> Self {
        Self {
            response,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<ConfirmationRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Confirmation for ScriptedConfirmation {
    async fn confirm(&self, request: &ConfirmationRequest) -> Option<ConfirmationResponse> {
        self.seen.lock().unwrap().push(request.clone());
        self.response.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Information(String, String),
    Error(String, String),
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_information(&self, title: &str, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Information(title.into(), message.into()));
    }

    fn notify_error(&self, title: &str, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Error(title.into(), message.into()));
    }
}

pub struct FixedGate(pub bool);

impl AuthGate for FixedGate {
    fn is_authenticated(&self) -> bool {
        self.0
    }
}
