use crate::types::ReviewInput;

/// Summary line shown to the user after a review was posted.
pub fn format_outcome(change_subject: &str, review: &ReviewInput) -> String {
    let mut msg = format!("Review for change '{change_subject}' posted");
    if !review.labels.is_empty() {
        let votes: Vec<String> = review
            .labels
            .iter()
            .map(|(label, rating)| format!("{label}: {rating}"))
            .collect();
        msg.push_str(": ");
        msg.push_str(&votes.join(", "));
    }
    msg
}
