use crate::label::{CODE_REVIEW, VERIFIED};
use crate::CoreError;

/// Icon a front end shows for a preset. Only the key travels through the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKey {
    Checked,
    MoveUp,
    Forward,
    MoveDown,
    Cancel,
}

impl IconKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconKey::Checked => "checked",
            IconKey::MoveUp => "move-up",
            IconKey::Forward => "forward",
            IconKey::MoveDown => "move-down",
            IconKey::Cancel => "cancel",
        }
    }

    /// Icon for a vote outside the built-in table.
    pub fn for_rating(rating: i32) -> Self {
        match rating {
            r if r >= 2 => IconKey::Checked,
            1 => IconKey::MoveUp,
            0 => IconKey::Forward,
            -1 => IconKey::MoveDown,
            _ => IconKey::Cancel,
        }
    }
}

/// One "vote" entry point: a label, a rating and whether to confirm first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewPreset {
    pub label: String,
    pub rating: i32,
    pub icon: IconKey,
    pub show_dialog: bool,
}

impl ReviewPreset {
    pub fn new(label: impl Into<String>, rating: i32, icon: IconKey, show_dialog: bool) -> Self {
        Self {
            label: label.into(),
            rating,
            icon,
            show_dialog,
        }
    }

    pub fn custom(label: impl Into<String>, rating: i32, show_dialog: bool) -> Self {
        Self::new(label, rating, IconKey::for_rating(rating), show_dialog)
    }

    /// `+2`, `0`, `-1`, with `...` appended when a confirmation is shown.
    pub fn title(&self) -> String {
        let sign = if self.rating > 0 { "+" } else { "" };
        let ellipsis = if self.show_dialog { "..." } else { "" };
        format!("{sign}{}{ellipsis}", self.rating)
    }

    pub fn description(&self) -> String {
        format!("Review Change with {}", self.rating)
    }

    /// Lookup key, e.g. `code-review+2` or `verified-1...`.
    pub fn key(&self) -> String {
        format!("{}{}", self.label.to_lowercase(), self.title())
    }

    /// The built-in vote table.
    pub fn builtin() -> Vec<ReviewPreset> {
        const TABLE: &[(&str, i32, IconKey)] = &[
            (CODE_REVIEW, 2, IconKey::Checked),
            (CODE_REVIEW, 1, IconKey::MoveUp),
            (CODE_REVIEW, 0, IconKey::Forward),
            (CODE_REVIEW, -1, IconKey::MoveDown),
            (CODE_REVIEW, -2, IconKey::Cancel),
            (VERIFIED, 1, IconKey::Checked),
            (VERIFIED, 0, IconKey::Forward),
            (VERIFIED, -1, IconKey::Cancel),
        ];

        TABLE
            .iter()
            .flat_map(|&(label, rating, icon)| {
                [false, true]
                    .into_iter()
                    .map(move |show_dialog| ReviewPreset::new(label, rating, icon, show_dialog))
            })
            .collect()
    }

    pub fn find(key: &str) -> Result<ReviewPreset, CoreError> {
        Self::builtin()
            .into_iter()
            .find(|p| p.key() == key)
            .ok_or_else(|| CoreError::UnknownPreset(key.to_string()))
    }
}
