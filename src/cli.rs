use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mediascope")]
#[command(author, version, about = "Browse media file metadata by group, detail level and search")]
pub struct Cli {
    /// Path to the settings file
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the metadata view of a file
    Show {
        /// File to inspect
        #[arg(required = true)]
        file: PathBuf,

        /// Tab to show, by key or index (default: the first tab)
        #[arg(short, long)]
        tab: Option<String>,

        /// Only show fields whose name or value contains this text
        #[arg(long)]
        search: Option<String>,

        /// Output fields and tabs as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the tabs available for a file
    Tabs {
        /// File to inspect
        #[arg(required = true)]
        file: PathBuf,
    },

    /// Interactively browse a file and its folder
    Browse {
        /// File to open first
        #[arg(required = true)]
        file: PathBuf,
    },

    /// Print the previous or next file in the same folder
    Sibling {
        /// Starting file
        #[arg(required = true)]
        file: PathBuf,

        /// Step backwards instead of forwards
        #[arg(long)]
        previous: bool,
    },

    /// Check that mediainfo is available
    CheckTools,

    /// Show the settings file location and effective settings
    Settings {
        /// Print settings as JSON
        #[arg(long)]
        json: bool,

        /// Overwrite the settings file with the defaults
        #[arg(long)]
        reset: bool,
    },
}
