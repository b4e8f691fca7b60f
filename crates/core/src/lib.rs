//! shortpath - Short, distinguishing labels for paths
//!
//! This crate provides functionality to:
//! - Shorten a set of paths to the shortest forms that still tell them apart
//! - Label a single path relative to a base directory or workspace folder
//! - Adapt URIs, filesystem paths and plain strings into path strings
pub mod config;
pub mod error;
pub mod interfaces;
pub mod label;
pub mod services;
pub mod shortener;
pub mod types;

mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::{Config, Platform};
pub use interfaces::{PathLike, WorkspaceFolder, WorkspaceProvider};
pub use label::{LabelOptions, get_path_label, label_in_workspace};
pub use services::{ResourceUri, StaticWorkspace};
pub use shortener::{ShortenConfig, Shortener, shorten};
