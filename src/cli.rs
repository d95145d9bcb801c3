use clap::{Parser, Subcommand};
use std::path::PathBuf;
use subsystem_lint::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "subsystem-lint",
    version,
    about = "Check commit messages and PR titles against the `subsystem: description` convention"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a JSON array of GitHub commit objects read from stdin
    Commits {
        /// Output format
        #[arg(long, short, default_value = "plain", value_enum)]
        format: OutputFormat,

        /// Render a PR comment body (same as --format markdown)
        #[arg(long, conflicts_with = "format")]
        markdown: bool,

        /// Write plain-format output to stderr instead of stdout
        #[arg(long)]
        stderr: bool,

        /// Read the commit array from a file instead of stdin
        #[arg(long, short)]
        input: Option<PathBuf>,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a pull-request title
    Title {
        /// The PR title
        #[arg(allow_hyphen_values = true)]
        title: String,
    },

    /// List all built-in rules with descriptions
    ListRules,

    /// Show full explanation for a rule
    Explain {
        /// Rule ID (e.g., "commit/wip")
        rule_id: String,
    },
}
