//! Configuration resolution for the CLI: file first, then flags

use anyhow::{Context, Result};
use std::env;
use tracing::debug;

use shortpath_core::config::{ConfigValidator, MainConfigValidator};
use shortpath_core::{Config, Platform};

use crate::cli::{GlobalArgs, PlatformArg};

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Posix => Platform::Posix,
            PlatformArg::Windows => Platform::Windows,
        }
    }
}

/// Load the config file named on the command line, or the nearest one
/// above the working directory, then apply command line overrides.
pub fn load_config(global: &GlobalArgs) -> Result<Config> {
    let config_path = match &global.config {
        Some(path) => Some(path.clone()),
        None => Config::find_config_file(&env::current_dir()?),
    };

    let mut config = match config_path {
        Some(path) => {
            debug!("Using config file {:?}", path);
            Config::load_from_file(&path)
                .with_context(|| format!("Failed to load {}", path.display()))?
        }
        None => Config::for_host(),
    };

    apply_overrides(&mut config, global);
    MainConfigValidator::new()
        .validate(&config)
        .context("Invalid command line options")?;

    Ok(config)
}

fn apply_overrides(config: &mut Config, global: &GlobalArgs) {
    if let Some(platform) = global.platform {
        config.platform = platform.into();
    }
    if let Some(separator) = global.separator {
        config.separator = Some(separator);
    }
    if global.drive_letters {
        config.drive_letters = Some(true);
    }
    if let Some(ellipsis) = &global.ellipsis {
        config.ellipsis = ellipsis.clone();
    }
}
