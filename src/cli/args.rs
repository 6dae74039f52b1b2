//! Command line argument parsing for the Sahayak CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Sahayak - classify student questions and build tutoring prompts
#[derive(Parser, Debug, Clone)]
#[command(name = "sahayak")]
#[command(about = "Classify student questions and build tutoring prompts")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SahayakArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SAHAYAK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SahayakArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify a query
    Classify(QueryArgs),

    /// Build the generation prompt for a query
    Prompt(QueryArgs),

    /// Answer a query end to end with the offline generator
    Ask(AskArgs),

    /// Format raw model output for display
    #[command(name = "format-response")]
    FormatResponse(FormatResponseArgs),

    /// List the template catalogue
    Templates(TemplatesArgs),

    /// Classify every line of a file
    Batch(BatchArgs),
}

/// Arguments for commands that take a single query
#[derive(Parser, Debug, Clone)]
pub struct QueryArgs {
    /// Query text
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for answering a query
#[derive(Parser, Debug, Clone)]
pub struct AskArgs {
    /// Query text
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Student identifier attached to the interaction
    #[arg(short, long, default_value = "cli")]
    pub student: String,
}

/// Arguments for formatting model output
#[derive(Parser, Debug, Clone)]
pub struct FormatResponseArgs {
    /// File with raw output (reads stdin when omitted)
    #[arg(value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,
}

/// Arguments for listing templates
#[derive(Parser, Debug, Clone)]
pub struct TemplatesArgs {
    /// Print template bodies as well as names
    #[arg(long)]
    pub show_body: bool,
}

/// Arguments for batch classification
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// File with one query per line (blank lines are skipped)
    #[arg(value_name = "QUERY_FILE")]
    pub file: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output (for list-shaped results)
    Csv,
}
