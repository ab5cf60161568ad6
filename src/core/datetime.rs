//! Date marker extraction.
//!
//! Dates follow a category glyph, optionally separated by spaces:
//!
//! - Due: `📅`, `📆`, `🗓`
//! - Scheduled: `⏳`, `⌛`
//! - Start: `🛫`
//!
//! Only `YYYY-MM-DD` is recognized.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::warn;

/// Upper bound on marker removal passes for a single line.
pub const MAX_DATE_PASSES: usize = 20;

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?P<glyph>\x{1F4C5}|\x{1F4C6}|\x{1F5D3}\x{FE0F}?|\x{23F3}|\x{231B}|\x{1F6EB})\s*(?P<date>[0-9]{4}-[0-9]{2}-[0-9]{2})\b",
    )
    .unwrap_or_else(|e| panic!("Invalid date marker regex: {e}"))
});

/// Which kind of date a marker denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateKind {
    /// Deadline.
    Due,
    /// Planned day of work.
    Scheduled,
    /// Earliest day the task can begin.
    Start,
}

impl DateKind {
    /// Classify a marker glyph.
    #[must_use]
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        match glyph.trim_end_matches('\u{FE0F}') {
            "\u{1F4C5}" | "\u{1F4C6}" | "\u{1F5D3}" => Some(Self::Due),
            "\u{23F3}" | "\u{231B}" => Some(Self::Scheduled),
            "\u{1F6EB}" => Some(Self::Start),
            _ => None,
        }
    }

    /// The canonical glyph for this kind.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Due => "\u{1F4C5}",
            Self::Scheduled => "\u{23F3}",
            Self::Start => "\u{1F6EB}",
        }
    }
}

impl std::fmt::Display for DateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Due => "due",
            Self::Scheduled => "scheduled",
            Self::Start => "start",
        })
    }
}

/// A date found behind a marker glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedDate {
    /// The marker category.
    pub kind: DateKind,
    /// The date exactly as written, `YYYY-MM-DD`.
    pub value: String,
}

impl ExtractedDate {
    /// Parse the value as a calendar date.
    ///
    /// Returns `None` for well-formed but impossible dates like `2023-02-30`.
    #[must_use]
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.value, "%Y-%m-%d").ok()
    }
}

/// Find the first date of each category, in the order they appear.
///
/// Markers are matched against the line as written, left to right;
/// scanning stops after [`MAX_DATE_PASSES`] markers.
#[must_use]
pub fn extract_dates(line: &str) -> Vec<ExtractedDate> {
    let mut found: Vec<ExtractedDate> = Vec::new();
    let mut markers = DATE_PATTERN.captures_iter(line);

    for caps in markers.by_ref().take(MAX_DATE_PASSES) {
        let (Some(glyph), Some(date)) = (caps.name("glyph"), caps.name("date")) else {
            continue;
        };
        if let Some(kind) = DateKind::from_glyph(glyph.as_str()) {
            if !found.iter().any(|d| d.kind == kind) {
                found.push(ExtractedDate {
                    kind,
                    value: date.as_str().to_string(),
                });
            }
        }
    }

    if markers.next().is_some() {
        warn!(
            passes = MAX_DATE_PASSES,
            "date marker limit reached, ignoring remaining markers"
        );
    }
    found
}

/// Pick the date that matters for a line: due, else scheduled, else start.
///
/// # Examples
///
/// ```
/// use tasklink::core::extract_date;
///
/// let line = "Task test text 🛫 2023-02-03 ⏳ 2023-02-02";
/// assert_eq!(extract_date(line), Some("2023-02-02".to_string()));
/// assert_eq!(extract_date("no dates here"), None);
/// ```
#[must_use]
pub fn extract_date(line: &str) -> Option<String> {
    select_date(&extract_dates(line)).map(|d| d.value.clone())
}

/// Apply the due > scheduled > start rule to already extracted dates.
#[must_use]
pub fn select_date(dates: &[ExtractedDate]) -> Option<&ExtractedDate> {
    dates.iter().min_by_key(|d| d.kind)
}

/// Remove every glyph-and-date token from a line.
#[must_use]
pub fn strip_date_markers(line: &str) -> String {
    DATE_PATTERN.replace_all(line, "").into_owned()
}
