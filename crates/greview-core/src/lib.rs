pub mod builder;
pub mod error;
pub mod id;
pub mod label;
pub mod mapper;
pub mod preset;
pub mod report;
pub mod types;

pub use builder::build_review;
pub use error::CoreError;
pub use id::{ChangeId, RevisionId};
pub use label::{LabelCatalog, LabelRange};
pub use mapper::map_drafts;
pub use preset::{IconKey, ReviewPreset};
pub use report::format_outcome;
