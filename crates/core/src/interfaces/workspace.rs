//! Workspace folder interface

use serde::{Deserialize, Serialize};

/// A named root folder of a workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceFolder {
    pub name: String,
    pub path: String,
}

impl WorkspaceFolder {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Folder named after the last segment of its path
    pub fn from_path(path: impl Into<String>, separator: char) -> Self {
        let path = path.into();
        let name = path
            .trim_end_matches(separator)
            .rsplit(separator)
            .next()
            .unwrap_or_default()
            .to_string();
        Self { name, path }
    }
}

/// Trait for models that know which folder a path belongs to
pub trait WorkspaceProvider {
    /// The folder containing `path` (already normalized), if any
    fn folder_for(&self, path: &str) -> Option<&WorkspaceFolder>;

    /// Number of folders in the workspace
    fn folder_count(&self) -> usize;
}
