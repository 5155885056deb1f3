use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use greview_core::types::ChangeInfo;
use greview_core::{ChangeId, RevisionId};
use greview_rest::{HttpReviewClient, RestError, ReviewTransport};

// ---------------------------------------------------------------------------
// Confirmation
// ---------------------------------------------------------------------------

/// What the user is asked to confirm before a review is posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub change: ChangeId,
    pub label: String,
    pub rating: i32,
    pub draft_count: usize,
    pub message: Option<String>,
    pub notify: bool,
    pub submit_change: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationResponse {
    pub message: Option<String>,
    pub submit_change: bool,
    pub notify: bool,
}

#[async_trait]
pub trait Confirmation: Send + Sync {
    /// `None` means the user dismissed the prompt.
    async fn confirm(&self, request: &ConfirmationRequest) -> Option<ConfirmationResponse>;
}

/// Confirms every request with the values it was asked about.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

#[async_trait]
impl Confirmation for AutoConfirm {
    async fn confirm(&self, request: &ConfirmationRequest) -> Option<ConfirmationResponse> {
        Some(ConfirmationResponse {
            message: request.message.clone(),
            submit_change: request.submit_change,
            notify: request.notify,
        })
    }
}

// ---------------------------------------------------------------------------
// Change submission
// ---------------------------------------------------------------------------

#[async_trait]
pub trait ChangeSubmitter: Send + Sync {
    async fn submit_change(&self, change: &ChangeId) -> Result<(), RestError>;
}

/// Submits through the same transport the review was posted with.
pub struct TransportChangeSubmitter {
    transport: Arc<dyn ReviewTransport>,
}

impl TransportChangeSubmitter {
    pub fn new(transport: Arc<dyn ReviewTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl ChangeSubmitter for TransportChangeSubmitter {
    async fn submit_change(&self, change: &ChangeId) -> Result<(), RestError> {
        self.transport.submit_change(change).await
    }
}

// ---------------------------------------------------------------------------
// Revision selection
// ---------------------------------------------------------------------------

pub trait RevisionSelector: Send + Sync {
    fn selected_revision(&self, change: &ChangeInfo) -> RevisionId;
}

fn current_or_alias(change: &ChangeInfo) -> RevisionId {
    change.current_revision.clone().unwrap_or_default()
}

/// Always reviews the latest patch set.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentRevisionSelector;

impl RevisionSelector for CurrentRevisionSelector {
    fn selected_revision(&self, change: &ChangeInfo) -> RevisionId {
        current_or_alias(change)
    }
}

/// Per-change revision picks made by the caller; unpicked changes fall back
/// to the latest patch set.
#[derive(Debug, Default)]
pub struct SelectedRevisions {
    selected: RwLock<HashMap<ChangeId, RevisionId>>,
}

impl SelectedRevisions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&self, change: ChangeId, revision: RevisionId) {
        self.selected
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(change, revision);
    }

    pub fn clear(&self, change: &ChangeId) {
        self.selected
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(change);
    }
}

impl RevisionSelector for SelectedRevisions {
    fn selected_revision(&self, change: &ChangeInfo) -> RevisionId {
        self.selected
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&change.id)
            .cloned()
            .unwrap_or_else(|| current_or_alias(change))
    }
}

// ---------------------------------------------------------------------------
// Notification and availability
// ---------------------------------------------------------------------------

/// Fire-and-forget user-facing messages.
pub trait Notifier: Send + Sync {
    fn notify_information(&self, title: &str, message: &str);
    fn notify_error(&self, title: &str, message: &str);
}

/// Routes notifications into the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_information(&self, title: &str, message: &str) {
        tracing::info!("{title}: {message}");
    }

    fn notify_error(&self, title: &str, message: &str) {
        tracing::error!("{title}: {message}");
    }
}

pub trait AuthGate: Send + Sync {
    fn is_authenticated(&self) -> bool;
}

impl AuthGate for HttpReviewClient {
    fn is_authenticated(&self) -> bool {
        HttpReviewClient::is_authenticated(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(id: &str, current: Option<&str>) -> ChangeInfo {
        let mut info = ChangeInfo::new(id, "subject");
        info.current_revision = current.map(RevisionId::new);
        info
    }

    #[test]
    fn current_selector_prefers_reported_revision() {
        let selector = CurrentRevisionSelector;
        assert_eq!(
            selector.selected_revision(&change("1", Some("abc"))),
            RevisionId::new("abc")
        );
        assert!(selector.selected_revision(&change("1", None)).is_current());
    }

    #[test]
    fn selected_revisions_override_per_change() {
        let selector = SelectedRevisions::new();
        let one = change("1", Some("head1"));
        let two = change("2", Some("head2"));

        selector.select(ChangeId::new("1"), RevisionId::new("2"));
        assert_eq!(selector.selected_revision(&one), RevisionId::new("2"));
        assert_eq!(selector.selected_revision(&two), RevisionId::new("head2"));

        selector.clear(&ChangeId::new("1"));
        assert_eq!(selector.selected_revision(&one), RevisionId::new("head1"));
    }

    #[tokio::test]
    async fn auto_confirm_echoes_request() {
        let request = ConfirmationRequest {
            change: ChangeId::new("1"),
            label: "Code-Review".into(),
            rating: 1,
            draft_count: 0,
            message: Some("nice".into()),
            notify: false,
            submit_change: true,
        };
        let response = AutoConfirm.confirm(&request).await.unwrap();
        assert_eq!(response.message.as_deref(), Some("nice"));
        assert!(!response.notify);
        assert!(response.submit_change);
    }
}
