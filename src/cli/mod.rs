//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;

/// folio - relevance-ranked search over portfolio content
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Content root directory (default: $FOLIO_ROOT or current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Config file path (default: ~/.config/folio/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search pages, blog posts, and projects
    Search(commands::search::SearchArgs),

    /// Interactive command palette (TUI)
    Palette(commands::palette::PaletteArgs),

    /// List loaded content
    List(commands::list::ListArgs),
}
