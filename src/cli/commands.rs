//! CLI subcommand definitions

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show tracked directories and their last used index
    List,
    /// Print the prefix for one or more indices
    Prefix {
        /// Zero-based indices (0 = alpha, 24 = alpha-alpha)
        #[arg(required = true, value_name = "INDEX")]
        indices: Vec<u64>,
    },
    /// Convert a legacy global-counter state file to the per-directory format
    Migrate {
        /// Directory the legacy counter belongs to (default: current directory)
        #[arg(short, long, value_name = "DIR")]
        directory: Option<PathBuf>,
    },
}
