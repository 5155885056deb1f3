use crate::types::{CommentInput, CommentMap, DraftMap};

/// Turn drafts fetched for a revision into the comment inputs that publish
/// them with a review. Fields are copied verbatim; per-path order is kept.
pub fn map_drafts(drafts: &DraftMap) -> CommentMap {
    drafts
        .iter()
        .map(|(path, comments)| {
            let inputs: Vec<CommentInput> = comments.iter().map(CommentInput::from).collect();
            (path.clone(), inputs)
        })
        .collect()
}
