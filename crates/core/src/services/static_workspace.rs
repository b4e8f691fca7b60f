//! In-memory workspace model

use crate::interfaces::{WorkspaceFolder, WorkspaceProvider};
use crate::label::{LabelOptions, normalize, relative_to};

/// A fixed list of workspace folders
#[derive(Debug, Clone)]
pub struct StaticWorkspace {
    folders: Vec<WorkspaceFolder>,
    separator: char,
    ignore_case: bool,
}

impl StaticWorkspace {
    pub fn new(folders: Vec<WorkspaceFolder>, options: &LabelOptions) -> Self {
        let folders = folders
            .into_iter()
            .map(|folder| WorkspaceFolder {
                path: normalize(&folder.path, options),
                ..folder
            })
            .collect();

        Self {
            folders,
            separator: options.separator,
            ignore_case: options.drive_letters,
        }
    }

    pub fn folders(&self) -> &[WorkspaceFolder] {
        &self.folders
    }
}

impl WorkspaceProvider for StaticWorkspace {
    /// Nested folders resolve to the innermost one
    fn folder_for(&self, path: &str) -> Option<&WorkspaceFolder> {
        self.folders
            .iter()
            .filter(|folder| relative_to(path, &folder.path, self.separator, self.ignore_case).is_some())
            .max_by_key(|folder| folder.path.len())
    }

    fn folder_count(&self) -> usize {
        self.folders.len()
    }
}
