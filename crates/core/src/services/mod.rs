//! Service implementations for the composable architecture
//!
//! Concrete implementations of the interface traits.

pub mod resource_uri;
pub mod static_workspace;

pub use resource_uri::ResourceUri;
pub use static_workspace::StaticWorkspace;
