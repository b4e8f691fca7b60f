//! Lexical path normalization on plain strings

use regex::Regex;
use std::sync::LazyLock;

use super::LabelOptions;

static DRIVE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<letter>[a-zA-Z]):(?:[/\\]|$)").expect("valid drive regex"));

/// Whether `path` starts with a drive letter (`c:`, `C:\`)
pub fn has_drive_letter(path: &str) -> bool {
    DRIVE_PREFIX.is_match(path)
}

/// Uppercase a leading drive letter, leaving everything else as is
pub fn uppercase_drive_letter(path: &str) -> String {
    DRIVE_PREFIX
        .replace(path, |caps: &regex::Captures| {
            let whole = &caps[0];
            let letter = &caps["letter"];
            format!("{}{}", letter.to_uppercase(), &whole[letter.len()..])
        })
        .into_owned()
}

/// Normalize separators and resolve `.` / `..` segments lexically.
///
/// On drive-letter platforms both `/` and `\` count as separators. A
/// leading share marker (two separators) and a drive segment survive; `..`
/// never climbs above an absolute root.
pub fn normalize(path: &str, options: &LabelOptions) -> String {
    let separator = options.separator;
    let unified: String = if options.drive_letters {
        path.chars()
            .map(|c| if c == '/' || c == '\\' { separator } else { c })
            .collect()
    } else {
        path.to_string()
    };

    let (prefix, rest) = if let Some(rest) = unified
        .strip_prefix(separator)
        .and_then(|r| r.strip_prefix(separator))
    {
        (2, rest)
    } else if let Some(rest) = unified.strip_prefix(separator) {
        (1, rest)
    } else {
        (0, unified.as_str())
    };
    let drive = options.drive_letters && prefix == 0 && has_drive_letter(rest);
    let absolute = prefix > 0 || drive;
    // Segments that form the root: the drive, or the server and share of a UNC path
    let root_len = match (drive, options.drive_letters && prefix == 2) {
        (true, _) => 1,
        (false, true) => 2,
        (false, false) => 0,
    };

    let mut stack: Vec<&str> = Vec::new();
    for segment in rest.split(separator) {
        match segment {
            "" | "." => {}
            ".." => {
                let can_pop = match stack.last() {
                    None | Some(&"..") => false,
                    Some(_) => stack.len() > root_len,
                };
                if can_pop {
                    stack.pop();
                } else if !absolute {
                    stack.push("..");
                }
            }
            other => stack.push(other),
        }
    }

    let mut result: String = std::iter::repeat_n(separator, prefix).collect();
    result.push_str(&stack.join(&separator.to_string()));

    if drive && stack.len() == 1 {
        // Keep the root of a bare drive (`c:\`)
        result.push(separator);
    }
    if result.is_empty() {
        result.push('.');
    }
    result
}

/// The remainder of `path` below `base`, or `None` when it is not inside.
///
/// Both inputs must already be normalized. Identical paths yield `""`.
pub fn relative_to(path: &str, base: &str, separator: char, ignore_case: bool) -> Option<String> {
    let same = |a: &str, b: &str| {
        if ignore_case {
            a.to_lowercase() == b.to_lowercase()
        } else {
            a == b
        }
    };

    if same(path, base) {
        return Some(String::new());
    }

    // Compared per segment: lowercasing may change byte lengths
    let base = base.strip_suffix(separator).unwrap_or(base);
    let mut remainder = path.split(separator);
    for base_segment in base.split(separator) {
        if !same(remainder.next()?, base_segment) {
            return None;
        }
    }

    Some(remainder.collect::<Vec<_>>().join(&separator.to_string()))
}

/// Replace a leading home directory with `~`
pub fn tildify(path: &str, home: &str, separator: char) -> Option<String> {
    let remainder = relative_to(path, home, separator, false)?;
    if remainder.is_empty() {
        Some("~".to_string())
    } else {
        Some(format!("~{separator}{remainder}"))
    }
}
