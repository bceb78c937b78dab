use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tarotpedia")]
#[command(about = "AI tarot and numerology readings from the command line")]
pub struct CliArgs {
    /// Optional TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Draw shuffled tarot cards
    Draw {
        #[arg(long)]
        name: String,
        /// Date of birth, YYYY-MM-DD
        #[arg(long)]
        dob: String,
        #[arg(long, default_value = "10")]
        count: usize,
        /// Seed the shuffle with the personal numerology number
        #[arg(long)]
        follow_numerology: bool,
    },
    /// Numerology calculation plus a model-written analysis
    Numerology {
        #[arg(long)]
        name: String,
        /// Date of birth, YYYY-MM-DD
        #[arg(long)]
        dob: String,
        #[arg(long)]
        question: String,
    },
    /// Full two-phase reading: draw three cards, then interpret them
    Reading {
        #[arg(long)]
        name: String,
        /// Date of birth, YYYY-MM-DD
        #[arg(long)]
        dob: String,
        #[arg(long)]
        question: String,
        /// Seed the shuffle with the personal numerology number
        #[arg(long)]
        follow_numerology: bool,
    },
    /// Show one card's catalog record by number (1-78)
    CardInfo {
        #[arg(long)]
        number: u32,
    },
}
