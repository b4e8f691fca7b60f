use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::commands::{label_command, shorten_command};

#[derive(Parser, Debug)]
#[command(name = "shortpath")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file (defaults to the nearest .shortpath.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path conventions to assume
    #[arg(long, value_enum, global = true)]
    pub platform: Option<PlatformArg>,

    /// Separator character between path segments
    #[arg(short, long, global = true)]
    pub separator: Option<char>,

    /// Treat a leading `x:` as a drive letter
    #[arg(long, global = true)]
    pub drive_letters: bool,

    /// Marker for elided segments
    #[arg(long, global = true)]
    pub ellipsis: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformArg {
    Posix,
    Windows,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shorten paths to their shortest distinguishing forms
    #[command(visible_alias = "s")]
    Shorten {
        /// Paths to shorten (read from stdin, one per line, when omitted)
        paths: Vec<String>,

        /// Shorten every file below this directory instead
        #[arg(short, long, conflicts_with = "paths")]
        walk: Option<PathBuf>,

        /// Always carry root and ellipsis, even for a unique file name
        #[arg(long)]
        literal: bool,

        /// Print a JSON array of {path, short} objects
        #[arg(long)]
        json: bool,
    },
    /// Print the display label of a path or URI
    #[command(visible_alias = "l")]
    Label {
        /// Path or URI (e.g. file:///home/me/notes.md)
        path: String,

        /// Show the path relative to this directory when inside it
        #[arg(short, long)]
        base: Option<String>,

        /// Home directory to abbreviate as ~
        #[arg(long)]
        home: Option<String>,
    },
}

impl Cli {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        let Cli { global, command } = self;

        match command {
            Commands::Shorten {
                paths,
                walk,
                literal,
                json,
            } => shorten_command(&global, paths, walk.as_deref(), literal, json),
            Commands::Label { path, base, home } => {
                label_command(&global, &path, base.as_deref(), home.as_deref())
            }
        }
    }
}
