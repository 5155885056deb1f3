// Top-level errors arrive as anyhow chains; review failures that were already
// shown by the notifier only set the exit status.

/// The review was not posted.
pub const EXIT_REVIEW_FAILED: i32 = 1;
/// The review was posted but the follow-up submit failed.
pub const EXIT_SUBMIT_FAILED: i32 = 2;

pub fn format_error(err: &anyhow::Error) -> String {
    let mut msg = format!("error: {err}");
    for cause in err.chain().skip(1) {
        msg.push_str(&format!("\n  caused by: {cause}"));
    }
    msg
}
