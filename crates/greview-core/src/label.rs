use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::CoreError;

pub const CODE_REVIEW: &str = "Code-Review";
pub const VERIFIED: &str = "Verified";

/// Inclusive range of ratings a label accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRange {
    pub min: i32,
    pub max: i32,
}

impl LabelRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, rating: i32) -> bool {
        (self.min..=self.max).contains(&rating)
    }
}

/// The labels a review may set and their permitted ratings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCatalog {
    labels: BTreeMap<String, LabelRange>,
}

impl LabelCatalog {
    pub fn empty() -> Self {
        Self {
            labels: BTreeMap::new(),
        }
    }

    /// Add a label or replace the range of an existing one.
    pub fn insert(&mut self, name: impl Into<String>, range: LabelRange) -> Result<(), CoreError> {
        let name = name.into();
        if range.min > range.max {
            return Err(CoreError::InvalidRange {
                label: name,
                min: range.min,
                max: range.max,
            });
        }
        self.labels.insert(name, range);
        Ok(())
    }

    pub fn range(&self, label: &str) -> Option<LabelRange> {
        self.labels.get(label).copied()
    }

    pub fn labels(&self) -> impl Iterator<Item = (&str, LabelRange)> + '_ {
        self.labels.iter().map(|(name, range)| (name.as_str(), *range))
    }

    pub fn validate(&self, label: &str, rating: i32) -> Result<(), CoreError> {
        let range = self
            .range(label)
            .ok_or_else(|| CoreError::UnknownLabel(label.to_string()))?;
        if !range.contains(rating) {
            return Err(CoreError::RatingOutOfRange {
                label: label.to_string(),
                rating,
                min: range.min,
                max: range.max,
            });
        }
        Ok(())
    }
}

impl Default for LabelCatalog {
    fn default() -> Self {
        let mut labels = BTreeMap::new();
        labels.insert(CODE_REVIEW.to_string(), LabelRange::new(-2, 2));
        labels.insert(VERIFIED.to_string(), LabelRange::new(-1, 1));
        Self { labels }
    }
}
