use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ShortenedEntry<'a> {
    pub path: &'a str,
    pub short: &'a str,
}

pub fn entries<'a>(paths: &'a [String], shortened: &'a [String]) -> Vec<ShortenedEntry<'a>> {
    paths
        .iter()
        .zip(shortened)
        .map(|(path, short)| ShortenedEntry { path, short })
        .collect()
}

/// One shortened path per line, in input order
pub fn print_plain(shortened: &[String]) {
    for short in shortened {
        println!("{short}");
    }
}

pub fn print_json(paths: &[String], shortened: &[String]) -> Result<()> {
    let json = serde_json::to_string_pretty(&entries(paths, shortened))?;
    println!("{json}");
    Ok(())
}
