//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Removed-comment miner for Reddit moderation logs
#[derive(Parser, Debug)]
#[command(name = "modmine")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Miner configuration file (YAML)
    #[arg(short, long, global = true, default_value = "modmine.yaml")]
    pub config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check credentials by establishing a session
    Check,

    /// Mine removed comments and print them as JSON
    Mine {
        /// Subreddit whose moderation log to read
        #[arg(short, long)]
        subreddit: String,

        /// Number of comments to request
        #[arg(short = 'n', long, default_value = "10")]
        count: u32,

        /// Include AutoModerator removals
        #[arg(long)]
        include_automod: bool,
    },

    /// Mine removed comments and write them to a JSON file
    Export {
        /// Subreddit whose moderation log to read
        #[arg(short, long)]
        subreddit: String,

        /// Number of comments to request
        #[arg(short = 'n', long, default_value = "10")]
        count: u32,

        /// Include AutoModerator removals
        #[arg(long)]
        include_automod: bool,

        /// Output filename stem (the `.json` extension is appended)
        #[arg(short, long, default_value = "minedcomments")]
        output: String,
    },
}
