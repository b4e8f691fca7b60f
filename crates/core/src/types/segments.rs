use serde::Serialize;

use super::candidate::Candidate;

/// Leading marker kept outside segmentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathPrefix {
    None,
    /// A single leading separator (`/etc`)
    Root,
    /// Two leading separators (`\\server\share`)
    Share,
}

impl PathPrefix {
    /// Number of separators this prefix consumes
    pub fn width(self) -> usize {
        match self {
            PathPrefix::None => 0,
            PathPrefix::Root => 1,
            PathPrefix::Share => 2,
        }
    }

    pub fn is_some(self) -> bool {
        self != PathPrefix::None
    }

    pub fn render(self, separator: char) -> String {
        std::iter::repeat_n(separator, self.width()).collect()
    }
}

/// A raw path split into its prefix and separator-delimited segments.
///
/// Segments borrow from the raw string. Empty segments are kept, so
/// `a//b` has three segments and `a/` ends with an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedPath<'a> {
    pub prefix: PathPrefix,
    pub segments: Vec<&'a str>,
}

impl<'a> SegmentedPath<'a> {
    pub fn parse(raw: &'a str, separator: char) -> Self {
        let (prefix, rest) = if let Some(rest) = raw
            .strip_prefix(separator)
            .and_then(|r| r.strip_prefix(separator))
        {
            (PathPrefix::Share, rest)
        } else if let Some(rest) = raw.strip_prefix(separator) {
            (PathPrefix::Root, rest)
        } else {
            (PathPrefix::None, raw)
        };

        Self {
            prefix,
            segments: rest.split(separator).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// First segment looks like a drive (`c:`)
    pub fn has_drive(&self) -> bool {
        self.segments.first().is_some_and(|s| s.ends_with(':'))
    }

    /// Whether the leading segment must survive shortening
    pub fn keeps_leading_context(&self) -> bool {
        self.has_drive() || self.prefix.is_some()
    }

    pub fn first(&self) -> &'a str {
        self.segments.first().copied().unwrap_or_default()
    }

    /// Join the segments covered by `candidate` with the separator
    pub fn join(&self, candidate: Candidate, separator: char) -> String {
        let mut buf = [0u8; 4];
        let sep: &str = separator.encode_utf8(&mut buf);
        self.segments[candidate.start..candidate.end()].join(sep)
    }
}
