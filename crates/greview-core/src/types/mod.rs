pub mod change;
pub mod comment;
pub mod review;

pub use change::ChangeInfo;
pub use comment::{CommentInfo, CommentInput, CommentMap, CommentRange, DraftMap, Side};
pub use review::{NotifyHandling, ReviewInput};
