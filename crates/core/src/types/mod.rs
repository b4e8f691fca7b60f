pub mod candidate;
pub mod segments;

// Re-export commonly used types
pub use candidate::Candidate;
pub use segments::{PathPrefix, SegmentedPath};
