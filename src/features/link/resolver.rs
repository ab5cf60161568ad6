//! Wiki-link target resolution.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Maps the text of a wiki-link to a canonical note path.
///
/// The host owns the note namespace; the parser only ever hands it the
/// target text and the path of the note the link was found in.
#[cfg_attr(test, mockall::automock)]
pub trait LinkResolver {
    /// Resolve `link_text` as seen from `source_path`.
    ///
    /// Returns the vault-relative path of the target, or `None` if it does
    /// not exist.
    fn resolve(&self, link_text: &str, source_path: &str) -> Option<String>;
}

/// Resolves links against a vault directory on disk.
///
/// A target `Note` resolves when `<root>/Note.md` or `<root>/Note` is a file.
/// The vault is never walked.
#[derive(Debug, Clone)]
pub struct FsLinkResolver {
    root: PathBuf,
}

impl FsLinkResolver {
    /// Create a resolver for the vault at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl LinkResolver for FsLinkResolver {
    fn resolve(&self, link_text: &str, source_path: &str) -> Option<String> {
        let target = link_text.trim();
        if target.is_empty() || Path::new(target).is_absolute() || target.contains("..") {
            return None;
        }

        let candidates = [format!("{target}.md"), target.to_string()];
        let resolved = candidates
            .into_iter()
            .find(|candidate| self.root.join(candidate).is_file());

        debug!(target, source_path, ?resolved, "resolved wiki link");
        resolved
    }
}

/// Resolves nothing. Used when no vault root is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopResolver;

impl LinkResolver for NoopResolver {
    fn resolve(&self, _link_text: &str, _source_path: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn vault() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Garden.md"), "# Garden\n").unwrap();
        std::fs::create_dir(dir.path().join("Projects")).unwrap();
        std::fs::write(dir.path().join("Projects").join("Roof.md"), "").unwrap();
        std::fs::write(dir.path().join("diagram.png"), [0u8; 4]).unwrap();
        dir
    }

    #[test]
    fn test_resolves_markdown_note() {
        let dir = vault();
        let resolver = FsLinkResolver::new(dir.path());
        assert_eq!(resolver.resolve("Garden", "Inbox.md"), Some("Garden.md".to_string()));
    }

    #[test]
    fn test_resolves_nested_note() {
        let dir = vault();
        let resolver = FsLinkResolver::new(dir.path());
        assert_eq!(
            resolver.resolve("Projects/Roof", "Inbox.md"),
            Some("Projects/Roof.md".to_string())
        );
    }

    #[test]
    fn test_resolves_attachment_by_full_name() {
        let dir = vault();
        let resolver = FsLinkResolver::new(dir.path());
        assert_eq!(
            resolver.resolve("diagram.png", "Inbox.md"),
            Some("diagram.png".to_string())
        );
    }

    #[test]
    fn test_missing_and_unsafe_targets() {
        let dir = vault();
        let resolver = FsLinkResolver::new(dir.path());
        assert_eq!(resolver.resolve("Nowhere", "Inbox.md"), None);
        assert_eq!(resolver.resolve("Projects", "Inbox.md"), None);
        assert_eq!(resolver.resolve("../Garden", "Inbox.md"), None);
        assert_eq!(resolver.resolve("", "Inbox.md"), None);
    }

    #[test]
    fn test_noop_resolver() {
        assert_eq!(NoopResolver.resolve("Garden", "Inbox.md"), None);
    }
}
