//! Shortest mutually-distinguishing forms for a set of paths
//!
//! Each path is cut down to the shortest run of segments that no other
//! input contains, preferring runs near the end of the path (usually the
//! file name). Elided segments are marked with an ellipsis, and a root,
//! share or drive segment is carried in front so absolute paths stay
//! recognizable.
//!
//! ```
//! use shortpath_core::shorten;
//!
//! let short = shorten(&[Some("/src/a/mod.rs"), Some("/src/b/mod.rs")], '/');
//! assert_eq!(short, vec![Some("/src/a/\u{2026}".to_string()), Some("/src/b/\u{2026}".to_string())]);
//! ```

mod render;
mod repair;
mod search;

use tracing::debug;

use crate::config::Platform;
use crate::types::SegmentedPath;

/// Label emitted for an empty input path
pub const CURRENT_DIR_LABEL: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenConfig {
    pub separator: char,
    /// Placeholder for elided segments
    pub ellipsis: String,
    /// Print a unique last segment on its own, without root or ellipsis
    pub bare_leaf: bool,
}

impl Default for ShortenConfig {
    fn default() -> Self {
        Self::with_separator(Platform::host().separator())
    }
}

impl ShortenConfig {
    pub fn with_separator(separator: char) -> Self {
        Self {
            separator,
            ellipsis: crate::config::DEFAULT_ELLIPSIS.to_string(),
            bare_leaf: true,
        }
    }
}

/// Computes distinguishing labels for sets of paths
#[derive(Debug, Clone, Default)]
pub struct Shortener {
    config: ShortenConfig,
}

impl Shortener {
    pub fn new(config: ShortenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ShortenConfig {
        &self.config
    }

    /// Shorten every entry of `paths`, keeping index correspondence.
    ///
    /// Absent entries stay absent and empty strings become `"."`. Two
    /// distinct non-empty inputs never share an output; identical inputs
    /// render as their full original string.
    pub fn shorten<S: AsRef<str>>(&self, paths: &[Option<S>]) -> Vec<Option<String>> {
        let mut shortened: Vec<Option<String>> = paths
            .iter()
            .enumerate()
            .map(|(index, path)| {
                let raw = entry(path)?;
                if raw.is_empty() {
                    return Some(CURRENT_DIR_LABEL.to_string());
                }
                Some(self.shorten_one(index, raw, paths))
            })
            .collect();

        let restored = repair::repair_collisions(paths, &mut shortened);
        if restored > 0 {
            debug!("Restored {} paths to their full form", restored);
        }

        shortened
    }

    /// Convenience for inputs without absent entries
    pub fn shorten_all<S: AsRef<str>>(&self, paths: &[S]) -> Vec<String> {
        let wrapped: Vec<Option<&str>> = paths.iter().map(|p| Some(p.as_ref())).collect();
        self.shorten(&wrapped)
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect()
    }

    fn shorten_one<S: AsRef<str>>(&self, index: usize, raw: &str, paths: &[Option<S>]) -> String {
        let separator = self.config.separator;
        let path = SegmentedPath::parse(raw, separator);

        match search::find_unique(index, &path, paths, separator) {
            Some((candidate, subpath)) => {
                let result = render::render(&path, candidate, subpath, &self.config);
                debug!("{} -> {} via {:?}", raw, result, candidate);
                result
            }
            None => {
                debug!("{} has no unique subpath, keeping it whole", raw);
                raw.to_string()
            }
        }
    }
}

/// Borrow an input entry as a string slice
pub(crate) fn entry<S: AsRef<str>>(path: &Option<S>) -> Option<&str> {
    path.as_ref().map(AsRef::as_ref)
}

/// Shorten `paths` with default settings and the given separator
pub fn shorten<S: AsRef<str>>(paths: &[Option<S>], separator: char) -> Vec<Option<String>> {
    Shortener::new(ShortenConfig::with_separator(separator)).shorten(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posix() -> Shortener {
        Shortener::new(ShortenConfig::with_separator('/'))
    }

    fn literal() -> Shortener {
        Shortener::new(ShortenConfig {
            bare_leaf: false,
            ..ShortenConfig::with_separator('/')
        })
    }

    fn owned(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(str::to_string)).collect()
    }

    #[test]
    fn test_absent_empty_and_single() {
        let result = posix().shorten(&[Some(""), None, Some("/a/b")]);
        assert_eq!(result, owned(&[Some("."), None, Some("b")]));
    }

    #[test]
    fn test_single_path_keeps_last_segment() {
        assert_eq!(posix().shorten_all(&["/usr/local/share/doc.txt"]), vec!["doc.txt"]);
        assert_eq!(posix().shorten_all(&["relative/dir/file"]), vec!["file"]);
    }

    #[test]
    fn test_node_binaries() {
        let result = posix().shorten_all(&[
            "/usr/local/bin/node",
            "/usr/local/bin/nodejs",
            "/usr/bin/node",
        ]);
        insta::assert_snapshot!(result.join("\n"), @r"
        /usr/local/bin/node
        nodejs
        /usr/bin/…
        ");
    }

    #[test]
    fn test_duplicates_render_whole() {
        let result = posix().shorten_all(&["/a/b/c", "/a/b/c"]);
        assert_eq!(result, vec!["/a/b/c", "/a/b/c"]);
    }

    #[test]
    fn test_shared_file_names() {
        let result = posix().shorten_all(&["/proj/src/lib.rs", "/proj/tests/lib.rs", "/proj/README.md"]);
        assert_eq!(result, vec!["/proj/src/…", "/proj/tests/…", "README.md"]);
    }

    #[test]
    fn test_literal_rendering_without_bare_leaf() {
        let result = literal().shorten(&[Some(""), None, Some("/a/b")]);
        assert_eq!(result, owned(&[Some("."), None, Some("/a/b")]));

        let result = literal().shorten_all(&["a/b/c", "a/b/d"]);
        assert_eq!(result, vec!["\u{2026}/c", "\u{2026}/d"]);
    }

    #[test]
    fn test_windows_separator_and_drive() {
        let shortener = Shortener::new(ShortenConfig::with_separator('\\'));
        let result = shortener.shorten_all(&[r"c:\work\one\lib.rs", r"c:\work\two\lib.rs"]);
        assert_eq!(result, vec![r"c:\…\one\…", r"c:\…\two\…"]);

        let result = shortener.shorten_all(&[r"\\server\share\a.txt", r"\\server\share\b.txt"]);
        assert_eq!(result, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_custom_ellipsis() {
        let shortener = Shortener::new(ShortenConfig {
            ellipsis: "...".to_string(),
            ..ShortenConfig::with_separator('/')
        });
        let result = shortener.shorten_all(&["x/a/y/f", "x/b/y/f"]);
        assert_eq!(result, vec![".../a/...", ".../b/..."]);
    }

    #[test]
    fn test_free_function_matches_shortener() {
        let paths = [Some("/a/b/c"), Some("/a/d/c")];
        assert_eq!(shorten(&paths, '/'), posix().shorten(&paths));
    }
}
