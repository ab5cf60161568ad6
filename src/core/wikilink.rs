//! Wiki-style `[[...]]` cross-reference extraction.
//!
//! Only the syntax is recognized here; whether a target exists is for a
//! [`LinkResolver`](crate::features::link::LinkResolver) to decide.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static WIKI_LINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\[([^\]]+)\]\]").unwrap_or_else(|e| panic!("Invalid wiki link regex: {e}"))
});

/// One `[[...]]` occurrence in a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WikiLink {
    /// The full token, brackets included.
    pub link: String,
    /// The content between the brackets.
    pub text: String,
}

impl WikiLink {
    /// The note being referenced, without `#heading` or `|alias` suffixes.
    #[must_use]
    pub fn target(&self) -> &str {
        let without_alias = self.text.split('|').next().unwrap_or_default();
        without_alias
            .split('#')
            .next()
            .unwrap_or_default()
            .trim()
    }

    /// The text a reader sees: the alias when one is given.
    #[must_use]
    pub fn display(&self) -> &str {
        match self.text.split_once('|') {
            Some((_, alias)) if !alias.trim().is_empty() => alias.trim(),
            Some((target, _)) => target.trim(),
            None => self.text.trim(),
        }
    }
}

/// Find every wiki-link in a line, left to right.
///
/// Duplicates are kept in position order. An empty `[[]]` is not a link.
///
/// # Examples
///
/// ```
/// use tasklink::core::find_wiki_links;
///
/// let links = find_wiki_links("Do this.  [[Task]]");
/// assert_eq!(links.len(), 1);
/// assert_eq!(links[0].link, "[[Task]]");
/// assert_eq!(links[0].text, "Task");
/// ```
#[must_use]
pub fn find_wiki_links(line: &str) -> Vec<WikiLink> {
    WIKI_LINK_PATTERN
        .captures_iter(line)
        .filter_map(|caps| {
            let link = caps.get(0)?;
            let text = caps.get(1)?;
            Some(WikiLink {
                link: link.as_str().to_string(),
                text: text.as_str().to_string(),
            })
        })
        .collect()
}
