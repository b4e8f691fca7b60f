//! Workspace facade over `shortpath-core`, used by the integration tests in `tests/`.
pub use shortpath_core::*;
