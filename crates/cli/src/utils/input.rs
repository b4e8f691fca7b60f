use anyhow::{Context, Result};
use std::io::BufRead;
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// Read one path per line; blank lines become empty paths
pub fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    reader
        .lines()
        .map(|line| {
            let line = line.context("Failed to read paths from stdin")?;
            Ok(line.trim_end_matches('\r').to_string())
        })
        .collect()
}

/// Every file below `dir`, sorted by path
pub fn walk_files(dir: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        match entry.path().to_str() {
            Some(path) => files.push(path.to_string()),
            None => warn!("Skipping non UTF-8 path {:?}", entry.path()),
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_read_lines_keeps_blank_lines() {
        let paths = read_lines(Cursor::new("a/b\r\n\n/c/d\n")).unwrap();
        assert_eq!(paths, vec!["a/b", "", "/c/d"]);
    }

    #[test]
    fn test_walk_files_lists_only_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("src/nested")).unwrap();
        fs::write(temp_dir.path().join("src/lib.rs"), "").unwrap();
        fs::write(temp_dir.path().join("src/nested/lib.rs"), "").unwrap();

        let files = walk_files(temp_dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.ends_with("lib.rs")));
    }
}
