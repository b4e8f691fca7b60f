//! URI-backed path-like values

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use url::Url;

use crate::error::{Error, Result};
use crate::interfaces::PathLike;

/// A resource identified by a URI.
///
/// `file:` URIs resolve to their decoded filesystem path; any other scheme
/// resolves to the path component of the URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceUri {
    url: Url,
}

impl ResourceUri {
    pub fn parse(input: &str) -> Result<Self> {
        Ok(Self {
            url: Url::parse(input)?,
        })
    }

    /// Build a `file:` URI from an absolute path
    pub fn from_file_path(path: &Path) -> Result<Self> {
        let url = Url::from_file_path(path)
            .map_err(|_| Error::Other(format!("not an absolute path: {}", path.display())))?;
        Ok(Self { url })
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    pub fn is_file(&self) -> bool {
        self.url.scheme() == "file"
    }

    pub fn as_url(&self) -> &Url {
        &self.url
    }
}

impl FromStr for ResourceUri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

impl PathLike for ResourceUri {
    fn resolve_path_string(&self) -> Option<String> {
        if self.is_file() {
            let path = self.url.to_file_path().ok()?;
            return path.as_path().resolve_path_string();
        }
        self.url.path().resolve_path_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_file_uri_resolves_decoded_path() {
        let uri = ResourceUri::parse("file:///home/dev/My%20Notes/a.md").unwrap();
        assert!(uri.is_file());
        assert_eq!(
            uri.resolve_path_string(),
            Some("/home/dev/My Notes/a.md".to_string())
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_from_file_path() {
        let uri = ResourceUri::from_file_path(Path::new("/tmp/x.rs")).unwrap();
        assert_eq!(uri.to_string(), "file:///tmp/x.rs");
        assert!(ResourceUri::from_file_path(Path::new("relative.rs")).is_err());
    }

    #[test]
    fn test_other_scheme_uses_path_component() {
        let uri: ResourceUri = "vscode-remote://ssh-host/srv/app/main.go".parse().unwrap();
        assert_eq!(uri.scheme(), "vscode-remote");
        assert_eq!(uri.resolve_path_string(), Some("/srv/app/main.go".to_string()));
    }

    #[test]
    fn test_uri_without_path_does_not_resolve() {
        let uri = ResourceUri::parse("mailto:").unwrap();
        assert_eq!(uri.resolve_path_string(), None);
    }

    #[test]
    fn test_invalid_uri() {
        let err = ResourceUri::parse("not a uri").unwrap_err();
        assert!(matches!(err, Error::UriError(_)));
    }
}
