//! Human-readable labels for single paths
//!
//! A label is the path relative to a base (or workspace folder) when it
//! lives inside one, and otherwise the normalized absolute path with a
//! tidied drive letter or home directory.

pub mod normalize;

use tracing::debug;

use crate::config::Platform;
use crate::interfaces::{PathLike, WorkspaceProvider};

pub use normalize::{normalize, relative_to};

/// Platform conventions used when labelling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelOptions {
    pub separator: char,
    /// Drive letters are meaningful; also makes comparisons case-insensitive
    pub drive_letters: bool,
    /// Home directory to render as `~` (ignored on drive-letter platforms)
    pub user_home: Option<String>,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self::for_platform(Platform::host())
    }
}

impl LabelOptions {
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            separator: platform.separator(),
            drive_letters: platform.drive_letters(),
            user_home: None,
        }
    }

    pub fn posix() -> Self {
        Self::for_platform(Platform::Posix)
    }

    pub fn windows() -> Self {
        Self::for_platform(Platform::Windows)
    }

    pub fn with_user_home(mut self, home: impl Into<String>) -> Self {
        self.user_home = Some(home.into());
        self
    }

    fn ignore_case(&self) -> bool {
        self.drive_letters
    }

    fn resolve(&self, path: &dyn PathLike) -> Option<String> {
        let raw = path.resolve_path_string()?;
        Some(normalize(&raw, self))
    }

    /// Display form of a path that is not shown relative to anything
    fn absolute_label(&self, path: &str) -> String {
        if self.drive_letters {
            return normalize::uppercase_drive_letter(path);
        }

        if let Some(home) = &self.user_home {
            let home = normalize(home, self);
            if let Some(tilde) = normalize::tildify(path, &home, self.separator) {
                return tilde;
            }
        }

        path.to_string()
    }
}

/// Label `path`, relative to `base` when it is equal to or inside it.
///
/// Returns `None` when `path` does not resolve to a path string. A `base`
/// that does not resolve is ignored.
pub fn get_path_label(
    path: &dyn PathLike,
    base: Option<&dyn PathLike>,
    options: &LabelOptions,
) -> Option<String> {
    let resolved = options.resolve(path)?;

    if let Some(base) = base.and_then(|b| options.resolve(b)) {
        if let Some(relative) =
            relative_to(&resolved, &base, options.separator, options.ignore_case())
        {
            debug!("Labelled {} relative to {}", resolved, base);
            return Some(relative);
        }
    }

    Some(options.absolute_label(&resolved))
}

/// Label `path` relative to the workspace folder that contains it.
///
/// With several folders open the folder name is prepended so that equal
/// relative paths from different folders stay apart. Paths outside every
/// folder get their absolute label.
pub fn label_in_workspace(
    path: &dyn PathLike,
    workspace: &dyn WorkspaceProvider,
    options: &LabelOptions,
) -> Option<String> {
    let resolved = options.resolve(path)?;

    let Some(folder) = workspace.folder_for(&resolved) else {
        return Some(options.absolute_label(&resolved));
    };

    let base = normalize(&folder.path, options);
    let Some(relative) = relative_to(&resolved, &base, options.separator, options.ignore_case())
    else {
        return Some(options.absolute_label(&resolved));
    };

    if workspace.folder_count() > 1 {
        if relative.is_empty() {
            return Some(folder.name.clone());
        }
        return Some(format!("{}{}{}", folder.name, options.separator, relative));
    }

    Some(relative)
}
