//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// lectio - Turn lecture transcripts into study notes, flashcards, quizzes, and podcast scripts
#[derive(Parser, Debug)]
#[command(name = "lectio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate study artifacts from a transcript
    Generate(GenerateOpts),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct GenerateOpts {
    /// Transcript JSON file, or '-' to read from stdin
    pub input: String,

    /// Artifacts to generate, comma-separated: notes-short, notes-detailed,
    /// flashcards, quiz, podcast-script
    #[arg(short, long, value_delimiter = ',')]
    pub artifacts: Vec<String>,

    /// Generate every artifact type
    #[arg(long, conflicts_with = "artifacts")]
    pub all: bool,

    /// Topic to focus on (repeatable)
    #[arg(short, long)]
    pub focus: Vec<String>,

    /// Narration tone for notes and podcast script
    #[arg(long)]
    pub tone: Option<String>,

    /// Difficulty level (beginner, intermediate, advanced)
    #[arg(short, long)]
    pub difficulty: Option<String>,

    /// Podcast script length in minutes
    #[arg(long)]
    pub length_minutes: Option<f64>,

    /// Full request as a JSON options document; overrides the flags above
    #[arg(long)]
    pub options: Option<String>,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
