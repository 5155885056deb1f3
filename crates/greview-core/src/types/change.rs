use serde::{Deserialize, Serialize};

use crate::id::{ChangeId, RevisionId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeInfo {
    pub id: ChangeId,
    #[serde(rename = "_number", default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_revision: Option<RevisionId>,
}

impl ChangeInfo {
    /// Minimal change record for callers that only know the id and subject.
    pub fn new(id: impl Into<ChangeId>, subject: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            number: None,
            project: None,
            branch: None,
            subject: subject.into(),
            status: None,
            current_revision: None,
        }
    }
}
