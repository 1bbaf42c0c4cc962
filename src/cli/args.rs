//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;
use crate::consts::STATE_FILE_ENV;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "gran")]
#[command(
    about = "Create sequentially numbered project directories with Greek-letter prefixes",
    version
)]
#[command(subcommand_negates_reqs = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Comma-separated keywords (e.g. "foo,bar")
    #[arg(short, long, required = true, value_name = "KEYWORDS")]
    pub(crate) inputs: Option<String>,

    /// Name suffix (e.g. "books")
    #[arg(short, long)]
    pub(crate) suffix: Option<String>,

    /// Target directory (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub(crate) directory: Option<PathBuf>,

    /// Show the name that would be generated without creating anything
    #[arg(short = 'n', long)]
    pub(crate) dry_run: bool,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// State file location (default: ~/.gran_state)
    #[arg(long, global = true, env = STATE_FILE_ENV, value_name = "PATH")]
    pub(crate) state_file: Option<PathBuf>,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug output (show processing details)
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.json && config.json {
            self.json = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        if self.state_file.is_none() {
            self.state_file = config.state_file.clone();
        }
        if self.directory.is_none() {
            self.directory = config.directory.clone();
        }
        if self.suffix.is_none() {
            self.suffix = config.suffix.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
