use crate::constants::{verbosity, DEFAULT_EXTENSION};
use crate::generator::{OutputMode, TagStyle};
use crate::rewrite::{FailurePolicy, PathMode};
use clap::{ArgGroup, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// nodegen - boilerplate generator and refactoring helper for graph nodes.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate property boilerplate from declaration lines.
    ///
    /// One declaration per line, a blank line ends the input:
    ///
    ///   u <alias> <target-type>
    ///
    ///   <i|o|s> <type> <identifier> [default]
    #[command(visible_alias = "gen")]
    Generate(GenerateArgs),

    /// Apply a fixed refactoring to a source file or folder in place.
    Rewrite(RewriteArgs),
}

#[derive(clap::Args, Debug, Clone)]
#[command(group(ArgGroup::new("output").args(["editor", "runtime", "both"])))]
pub struct GenerateArgs {
    /// Print only the editor ports, fields and values.
    #[arg(short, long, visible_alias = "edit")]
    pub editor: bool,

    /// Print only the runtime accessors.
    #[arg(short, long)]
    pub runtime: bool,

    /// Print both blocks (default).
    #[arg(short, long)]
    pub both: bool,

    /// How runtime accessors are tagged with their category.
    #[arg(long = "tag-style", value_enum, default_value_t = TagStyle::Bracketed)]
    pub tag_style: TagStyle,

    /// Declarations file, or `-` to read from stdin (default).
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<String>,
}

impl GenerateArgs {
    pub fn output_mode(&self) -> OutputMode {
        if self.editor {
            OutputMode::Editor
        } else if self.runtime {
            OutputMode::Runtime
        } else {
            OutputMode::Both
        }
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct RewriteArgs {
    /// Refactoring to apply: title-category, get-node-data or set-node-data.
    #[arg(value_name = "MODE")]
    pub mode: String,

    /// File or folder to rewrite.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Treat PATH as a single file (default).
    #[arg(long, conflicts_with = "folder")]
    pub file: bool,

    /// Recurse into PATH and rewrite every matching file.
    #[arg(long)]
    pub folder: bool,

    /// Extension of the files to rewrite.
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Glob of paths (relative to PATH) to leave alone; may be repeated.
    #[arg(long = "exclude", value_name = "GLOB")]
    pub excludes: Vec<String>,

    /// What to do when a file in a folder fails to rewrite.
    #[arg(long = "on-error", value_enum, default_value_t = FailurePolicy::Abort)]
    pub on_error: FailurePolicy,

    /// Report what would change without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl RewriteArgs {
    pub fn path_mode(&self) -> PathMode {
        if self.folder {
            PathMode::Folder
        } else {
            PathMode::File
        }
    }
}

pub fn get_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
