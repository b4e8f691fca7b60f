//! Path-like input interface
//!
//! Anything that can produce a path string can be labelled. Resolution is
//! allowed to fail (non-UTF-8 paths, URIs without a path, absent values).

use std::path::{Path, PathBuf};

/// Trait for values that resolve to a plain path string
pub trait PathLike {
    /// The path as a string, or `None` when there is no usable path
    fn resolve_path_string(&self) -> Option<String>;
}

impl PathLike for str {
    fn resolve_path_string(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl PathLike for String {
    fn resolve_path_string(&self) -> Option<String> {
        self.as_str().resolve_path_string()
    }
}

impl PathLike for Path {
    fn resolve_path_string(&self) -> Option<String> {
        self.to_str()?.resolve_path_string()
    }
}

impl PathLike for PathBuf {
    fn resolve_path_string(&self) -> Option<String> {
        self.as_path().resolve_path_string()
    }
}

impl<T: PathLike + ?Sized> PathLike for &T {
    fn resolve_path_string(&self) -> Option<String> {
        (**self).resolve_path_string()
    }
}

impl<T: PathLike> PathLike for Option<T> {
    fn resolve_path_string(&self) -> Option<String> {
        self.as_ref()?.resolve_path_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_resolve() {
        assert_eq!("/a/b".resolve_path_string(), Some("/a/b".to_string()));
        assert_eq!(String::from("x").resolve_path_string(), Some("x".to_string()));
        assert_eq!("".resolve_path_string(), None);
    }

    #[test]
    fn test_paths_resolve() {
        assert_eq!(Path::new("/a/b").resolve_path_string(), Some("/a/b".to_string()));
        assert_eq!(PathBuf::from("rel/c").resolve_path_string(), Some("rel/c".to_string()));
    }

    #[test]
    fn test_options_resolve() {
        assert_eq!(Some("/a").resolve_path_string(), Some("/a".to_string()));
        assert_eq!(None::<PathBuf>.resolve_path_string(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_does_not_resolve() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"/tmp/\xff"));
        assert_eq!(path.resolve_path_string(), None);
    }
}
