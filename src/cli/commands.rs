use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "relay")]
#[command(about = "Keyword feed watcher with chat channel notifications")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List channels available on the chat service
    Channels,

    /// Set the destination channel for delivered posts
    SetChannel {
        /// Channel id (see `relay channels`)
        id: i64,
    },

    /// Show the configured destination, feed URL and poll interval
    Status,

    /// Run a single fetch-filter-deliver pass
    Once {
        /// Dry run - print new posts instead of sending them
        #[arg(long)]
        dry_run: bool,
    },

    /// Poll the feed repeatedly, delivering new posts as they appear
    Watch,
}
