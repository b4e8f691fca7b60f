use anyhow::{Context, Result, bail};
use tracing::debug;

use shortpath_core::{PathLike, ResourceUri, get_path_label};

use crate::cli::GlobalArgs;
use crate::config::load_config;

/// Interpret a command line argument as a URI when it has an authority part
fn path_input(arg: &str) -> Result<Box<dyn PathLike>> {
    if arg.contains("://") {
        let uri = ResourceUri::parse(arg).with_context(|| format!("Invalid URI: {arg}"))?;
        debug!("Treating {} as a {} URI", arg, uri.scheme());
        Ok(Box::new(uri))
    } else {
        Ok(Box::new(arg.to_string()))
    }
}

pub fn label_command(
    global: &GlobalArgs,
    path: &str,
    base: Option<&str>,
    home: Option<&str>,
) -> Result<()> {
    let mut config = load_config(global)?;
    if let Some(home) = home {
        config.user_home = Some(home.to_string());
    }
    let options = config.label_options();

    let path = path_input(path)?;
    let base = base.map(path_input).transpose()?;

    let Some(label) = get_path_label(&*path, base.as_deref(), &options) else {
        bail!("Could not resolve a path from the input");
    };

    println!("{label}");
    Ok(())
}
