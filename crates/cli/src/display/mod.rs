pub mod formatter;

pub use formatter::{ShortenedEntry, print_json, print_plain};
