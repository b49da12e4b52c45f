use serde::{Deserialize, Serialize};

/// Coarse bucket for the two-digit line sub-code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineGroup {
    /// Lines 1–40.
    #[serde(rename = "M")]
    Main,
    /// Lines 41–80.
    #[serde(rename = "C")]
    Core,
    /// Lines 81–99. The `POP` name prefix is decided separately, see
    /// [`crate::compose::POP_DIGIT_INDEX`].
    #[serde(rename = "P")]
    Pop,
}

impl LineGroup {
    /// Single-letter code shown on the review screen.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            LineGroup::Main => "M",
            LineGroup::Core => "C",
            LineGroup::Pop => "P",
        }
    }
}

impl std::fmt::Display for LineGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Classifies a line number. Returns `None` outside 1–99.
#[must_use]
pub fn line_group(line: u32) -> Option<LineGroup> {
    match line {
        1..=40 => Some(LineGroup::Main),
        41..=80 => Some(LineGroup::Core),
        81..=99 => Some(LineGroup::Pop),
        _ => None,
    }
}
