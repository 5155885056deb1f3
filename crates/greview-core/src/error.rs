use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown label: {0}")]
    UnknownLabel(String),
    #[error("rating {rating} out of range for label {label} (allowed {min}..={max})")]
    RatingOutOfRange {
        label: String,
        rating: i32,
        min: i32,
        max: i32,
    },
    #[error("invalid label range for {label}: min {min} is greater than max {max}")]
    InvalidRange { label: String, min: i32, max: i32 },
    #[error("unknown review preset: {0}")]
    UnknownPreset(String),
}
