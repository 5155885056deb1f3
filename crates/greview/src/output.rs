use greview_core::types::CommentInfo;

/// Format a key-value pair for display.
pub fn kv(key: &str, value: &str) -> String {
    format!("{key:>12}: {value}")
}

/// Format a header line.
pub fn header(title: &str) -> String {
    format!("=== {title} ===")
}

/// `Code-Review +2`, `Verified -1`, `Code-Review 0`.
pub fn vote(label: &str, rating: i32) -> String {
    if rating > 0 {
        format!("{label} +{rating}")
    } else {
        format!("{label} {rating}")
    }
}

/// One-line location of a draft: `line 12`, `lines 3-7`, or `file`.
pub fn location(comment: &CommentInfo) -> String {
    match (comment.range, comment.line) {
        (Some(range), _) if range.start_line != range.end_line => {
            format!("lines {}-{}", range.start_line, range.end_line)
        }
        (_, Some(line)) => format!("line {line}"),
        _ => "file".to_string(),
    }
}
