//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Darts - X01 scoring with computer opponents.
#[derive(Parser, Debug)]
#[command(name = "strictly_darts")]
#[command(about = "X01 darts scoring and bot match simulation", long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a bot-versus-bot match to completion
    Play {
        /// Match settings file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Starting score, overrides the settings file
        #[arg(long)]
        start: Option<u32>,

        /// Leg target, overrides the settings file
        #[arg(long)]
        legs: Option<u32>,

        /// Treat the leg target as "best of" instead of "first to"
        #[arg(long)]
        best_of: bool,

        /// Home bot, by catalogue id or name
        #[arg(long, default_value = "5")]
        home: String,

        /// Away bot, by catalogue id or name
        #[arg(long, default_value = "4")]
        away: String,

        /// Seed for a reproducible match
        #[arg(long)]
        seed: Option<u64>,

        /// Wait each bot's thinking delay before it throws
        #[arg(long)]
        pace: bool,
    },

    /// Suggest a finish for a remaining score
    Checkout {
        /// Remaining score
        score: u32,
    },

    /// List the bot catalogue
    Bots,
}
