//! Core interfaces for plugging caller-side types into labelling
//!
//! The shortening algorithm only ever sees plain strings. These traits are
//! the seams where URIs, filesystem paths and workspace models are turned
//! into those strings.

pub mod path_like;
pub mod workspace;

pub use path_like::PathLike;
pub use workspace::{WorkspaceFolder, WorkspaceProvider};
