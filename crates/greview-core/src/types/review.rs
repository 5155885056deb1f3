use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::comment::CommentMap;

/// Who the server notifies about a posted review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotifyHandling {
    None,
    Owner,
    OwnerReviewers,
    All,
}

/// Body of `POST /changes/{change}/revisions/{revision}/review`.
///
/// Absent optional fields are omitted from the JSON rather than sent as
/// `null`; servers treat a missing `comments` map differently from an empty
/// one and a missing `notify` means the server default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub labels: BTreeMap<String, i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<CommentMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify: Option<NotifyHandling>,
}
