use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use greview_core::types::{ChangeInfo, DraftMap, ReviewInput};
use greview_core::{ChangeId, RevisionId};

use crate::RestError;

#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub base_url: String,
    pub credentials: Option<Credentials>,
    pub timeout: Option<Duration>,
}

impl RemoteConfig {
    pub fn anonymous(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: None,
            timeout: None,
        }
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// The review server calls the submission workflow needs.
#[async_trait]
pub trait ReviewTransport: Send + Sync {
    async fn get_change(&self, change: &ChangeId) -> Result<ChangeInfo, RestError>;

    async fn fetch_draft_comments(
        &self,
        change: &ChangeId,
        revision: &RevisionId,
    ) -> Result<DraftMap, RestError>;

    async fn post_review(
        &self,
        change: &ChangeId,
        revision: &RevisionId,
        review: &ReviewInput,
    ) -> Result<(), RestError>;

    async fn submit_change(&self, change: &ChangeId) -> Result<(), RestError>;
}
