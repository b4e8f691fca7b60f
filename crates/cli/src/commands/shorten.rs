use anyhow::Result;
use std::io;
use std::path::Path;
use tracing::debug;

use shortpath_core::Shortener;

use crate::cli::GlobalArgs;
use crate::config::load_config;
use crate::display::{print_json, print_plain};
use crate::utils::input::{read_lines, walk_files};

pub fn shorten_command(
    global: &GlobalArgs,
    paths: Vec<String>,
    walk: Option<&Path>,
    literal: bool,
    json: bool,
) -> Result<()> {
    let mut config = load_config(global)?;
    if literal {
        config.bare_leaf = false;
    }

    let inputs = match walk {
        Some(dir) => walk_files(dir)?,
        None if paths.is_empty() => read_lines(io::stdin().lock())?,
        None => paths,
    };
    debug!("Shortening {} paths", inputs.len());

    let shortener = Shortener::new(config.shorten_config());
    let shortened = shortener.shorten_all(&inputs);

    if json {
        print_json(&inputs, &shortened)
    } else {
        print_plain(&shortened);
        Ok(())
    }
}
