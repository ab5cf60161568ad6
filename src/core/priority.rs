//! Priority marker extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// High ⏫, medium 🔼, low 🔽
static PRIORITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x{23EB}\x{1F53C}\x{1F53D}]")
        .unwrap_or_else(|e| panic!("Invalid priority regex: {e}"))
});

/// Priority levels for tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// No marker present.
    #[default]
    None,
    /// Low priority (🔽)
    Low,
    /// Medium priority (🔼)
    Medium,
    /// High priority (⏫)
    High,
}

impl Priority {
    /// Map a marker glyph to its level.
    #[must_use]
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        match glyph {
            "\u{23EB}" => Some(Self::High),
            "\u{1F53C}" => Some(Self::Medium),
            "\u{1F53D}" => Some(Self::Low),
            _ => None,
        }
    }

    /// The marker glyph, if this level has one.
    #[must_use]
    pub const fn glyph(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Low => Some("\u{1F53D}"),
            Self::Medium => Some("\u{1F53C}"),
            Self::High => Some("\u{23EB}"),
        }
    }

    /// Convert to the tracker's priority scale (1 = none, 4 = high).
    #[must_use]
    pub const fn as_tracker_value(&self) -> u8 {
        match self {
            Self::None => 1,
            Self::Low => 2,
            Self::Medium => 3,
            Self::High => 4,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// Find the priority of a line.
///
/// The leftmost marker wins, whatever its level.
///
/// # Examples
///
/// ```
/// use tasklink::core::{extract_priority, Priority};
///
/// assert_eq!(extract_priority("Task test text ⏫"), Priority::High);
/// assert_eq!(extract_priority("Task 🔽 then ⏫"), Priority::Low);
/// assert_eq!(extract_priority("Task test text"), Priority::None);
/// ```
#[must_use]
pub fn extract_priority(line: &str) -> Priority {
    PRIORITY_PATTERN
        .find(line)
        .and_then(|m| Priority::from_glyph(m.as_str()))
        .unwrap_or_default()
}

/// Remove every priority marker from a line.
#[must_use]
pub fn strip_priority_markers(line: &str) -> String {
    PRIORITY_PATTERN.replace_all(line, "").into_owned()
}
