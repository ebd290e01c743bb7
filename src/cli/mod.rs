//! CLI command definitions and implementations.

use crate::export::Dataset;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod exit;
pub mod export;
pub mod list;
pub mod show;

pub use exit::{exit_code_for_error, Exit};

/// tccview — Browse tropical cloud cluster tracking records
#[derive(Parser, Debug)]
#[command(name = "tccview")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Track dataset file (overrides the embedded data)
    #[arg(long, short = 'd')]
    pub data: Option<PathBuf>,

    /// Color theme
    #[arg(long, short = 't')]
    pub theme: Option<String>,

    /// Display language (en or hi)
    #[arg(long)]
    pub lang: Option<String>,

    /// Open directly on one track's detail view
    #[arg(long, short = 'T')]
    pub track: Option<String>,

    /// Config file path
    #[arg(long, short = 'c', env = "TCCVIEW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log file path
    #[arg(long)]
    pub log: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tracks
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Filter by basin code (e.g. NIO, SIO)
        #[arg(long, short = 'b')]
        basin: Option<String>,

        /// Page number (1-indexed; out-of-range values clamp)
        #[arg(long, short = 'p', default_value_t = 1)]
        page: i64,
    },

    /// Show one track and its observation points
    Show {
        /// Track identifier
        track_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Point page number (1-indexed; out-of-range values clamp)
        #[arg(long, short = 'p', default_value_t = 1)]
        page: i64,
    },

    /// Save a bundled dataset artifact
    Export {
        /// Which artifact to save
        #[arg(value_enum)]
        dataset: Dataset,

        /// Destination directory
        #[arg(long, short = 'o', default_value = ".")]
        output: PathBuf,
    },
}
