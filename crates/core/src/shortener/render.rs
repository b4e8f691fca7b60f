use crate::types::{Candidate, SegmentedPath};

use super::ShortenConfig;

/// Build the display string for the selected candidate.
///
/// Leading context (drive segment and root/share prefix) is carried in
/// front, elided runs become the ellipsis marker.
pub(crate) fn render(
    path: &SegmentedPath<'_>,
    candidate: Candidate,
    subpath: String,
    config: &ShortenConfig,
) -> String {
    let separator = config.separator;
    let total = path.len();

    if config.bare_leaf && candidate.is_leaf(total) && !subpath.is_empty() {
        return subpath;
    }

    let mut candidate = candidate;
    let mut subpath = subpath;
    let mut result = String::new();

    if path.keeps_leading_context() {
        if candidate.start == 1 {
            // Never drop the drive or root segment for a single elided segment
            candidate = candidate.extend_left();
            subpath = format!("{}{separator}{subpath}", path.first());
        }
        result.push_str(&path.prefix.render(separator));
        if candidate.start > 0 {
            result.push_str(path.first());
            result.push(separator);
        }
    }

    if candidate.start > 0 {
        result.push_str(&config.ellipsis);
        result.push(separator);
    }

    result.push_str(&subpath);

    if candidate.end() < total {
        result.push(separator);
        result.push_str(&config.ellipsis);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(separator: char, bare_leaf: bool) -> ShortenConfig {
        ShortenConfig {
            separator,
            ellipsis: "\u{2026}".to_string(),
            bare_leaf,
        }
    }

    fn render_str(raw: &str, start: usize, len: usize, config: &ShortenConfig) -> String {
        let path = SegmentedPath::parse(raw, config.separator);
        let candidate = Candidate::new(start, len);
        let subpath = path.join(candidate, config.separator);
        render(&path, candidate, subpath, config)
    }

    #[test]
    fn test_bare_leaf() {
        assert_eq!(render_str("/a/b/c", 2, 1, &config('/', true)), "c");
        assert_eq!(render_str("/a/b/c", 2, 1, &config('/', false)), "/a/\u{2026}/c");
    }

    #[test]
    fn test_empty_leaf_is_never_bare() {
        assert_eq!(render_str("a/", 1, 1, &config('/', true)), "\u{2026}/");
    }

    #[test]
    fn test_relative_middle_run() {
        assert_eq!(
            render_str("a/b/c/d", 1, 2, &config('/', true)),
            "\u{2026}/b/c/\u{2026}"
        );
        assert_eq!(render_str("a/b/c", 0, 1, &config('/', true)), "a/\u{2026}");
    }

    #[test]
    fn test_root_segment_is_pulled_in_at_start_one() {
        assert_eq!(render_str("/a/b", 1, 1, &config('/', false)), "/a/b");
        assert_eq!(render_str("/a/b/c", 1, 1, &config('/', true)), "/a/b/\u{2026}");
    }

    #[test]
    fn test_root_prefix_at_start_zero() {
        assert_eq!(render_str("/usr/bin/node", 0, 2, &config('/', true)), "/usr/bin/\u{2026}");
    }

    #[test]
    fn test_drive_letter_is_carried() {
        assert_eq!(
            render_str(r"c:\work\src\lib.rs", 2, 2, &config('\\', false)),
            "c:\\\u{2026}\\src\\lib.rs"
        );
        assert_eq!(
            render_str(r"c:\work\lib.rs", 1, 1, &config('\\', true)),
            r"c:\work\…"
        );
    }

    #[test]
    fn test_share_prefix_is_carried() {
        assert_eq!(
            render_str(r"\\server\share\docs\a.txt", 2, 1, &config('\\', true)),
            "\\\\server\\\u{2026}\\docs\\\u{2026}"
        );
    }
}
