use tracing::trace;

use super::entry;
use crate::types::{Candidate, SegmentedPath};

/// Whether `other` would also be identified by a subpath.
///
/// A subpath anchored at the end of its own path only clashes with paths
/// that end with it too, so `x` stays distinct from `x/y`.
pub(crate) fn collides(subpath: &str, end_anchored: bool, other: &str) -> bool {
    other.contains(subpath) && (!end_anchored || other.ends_with(subpath))
}

/// Find the first candidate of `path` (at position `index` of `paths`)
/// that no other entry contains.
///
/// Absent and empty entries take no part in the comparison; duplicates of
/// the same string do, which is why a duplicated path never finds a match.
pub(crate) fn find_unique<S: AsRef<str>>(
    index: usize,
    path: &SegmentedPath<'_>,
    paths: &[Option<S>],
    separator: char,
) -> Option<(Candidate, String)> {
    let total = path.len();

    Candidate::search_order(total).find_map(|candidate| {
        let subpath = path.join(candidate, separator);
        let end_anchored = candidate.touches_end(total);

        let clash = paths
            .iter()
            .enumerate()
            .filter(|(other_index, _)| *other_index != index)
            .filter_map(|(_, other)| entry(other))
            .filter(|other| !other.is_empty())
            .find(|other| collides(&subpath, end_anchored, other));

        match clash {
            Some(other) => {
                trace!("candidate {:?} ({}) clashes with {}", candidate, subpath, other);
                None
            }
            None => Some((candidate, subpath)),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(index: usize, paths: &[Option<&str>]) -> Option<(Candidate, String)> {
        let raw = paths[index].unwrap();
        find_unique(index, &SegmentedPath::parse(raw, '/'), paths, '/')
    }

    #[test]
    fn test_collides_inside_other_path() {
        assert!(collides("bin", false, "/usr/bin/node"));
        assert!(!collides("sbin", false, "/usr/bin/node"));
    }

    #[test]
    fn test_end_anchored_needs_matching_suffix() {
        // `x` at the end of one path is not confused with `x/y`
        assert!(!collides("x", true, "x/y"));
        assert!(collides("x", true, "a/x"));
        // No separator guard: a file name that ends another file name clashes
        assert!(collides("main.rs", true, "/src/domain.rs"));
    }

    #[test]
    fn test_prefers_trailing_segment() {
        let paths = [Some("/a/b/c"), Some("/a/b/d")];
        assert_eq!(find(0, &paths), Some((Candidate::new(2, 1), "c".to_string())));
    }

    #[test]
    fn test_grows_when_leaf_is_shared() {
        let paths = [Some("/x/lib/mod.rs"), Some("/y/lib/mod.rs")];
        // `mod.rs` and `lib` are shared; `x` is not
        assert_eq!(find(0, &paths), Some((Candidate::new(0, 1), "x".to_string())));
    }

    #[test]
    fn test_absent_and_empty_entries_are_ignored() {
        let paths = [Some("a/b"), None, Some("")];
        assert_eq!(find(0, &paths), Some((Candidate::new(1, 1), "b".to_string())));
    }

    #[test]
    fn test_duplicate_has_no_unique_candidate() {
        let paths = [Some("/a/b/c"), Some("/a/b/c")];
        assert_eq!(find(0, &paths), None);
        assert_eq!(find(1, &paths), None);
    }
}
