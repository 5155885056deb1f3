use crate::types::{CommentMap, NotifyHandling, ReviewInput};

/// Assemble the review body for a single label vote.
///
/// The rating is not range-checked here; callers validate against a
/// [`LabelCatalog`](crate::LabelCatalog) first.
pub fn build_review(
    label: &str,
    rating: i32,
    message: Option<&str>,
    notify: bool,
    comments: CommentMap,
) -> ReviewInput {
    let mut input = ReviewInput::default();
    input.labels.insert(label.to_string(), rating);

    if let Some(message) = message.filter(|m| !m.is_empty()) {
        input.message = Some(message.to_string());
    }
    if !notify {
        input.notify = Some(NotifyHandling::None);
    }
    if !comments.is_empty() {
        input.comments = Some(comments);
    }

    input
}
