//! Clap argument definitions for the `reva` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Default number of results shown by `reva search` and `reva ask`.
pub const DEFAULT_RESULT_LIMIT: usize = 10;
/// Default number of terms shown per document by `reva inspect`.
pub const DEFAULT_TERM_LIMIT: usize = 10;

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "reva")]
#[command(about = "Find the most relevant document for a query using TF-IDF")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output scores and names only, one per line
    #[arg(long)]
    pub list: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `reva search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Query text
    pub query: String,

    /// Document files to rank
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Maximum results to display [default: 10]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Show a preview of the most relevant document
    #[arg(long)]
    pub preview: bool,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `reva ask`.
#[derive(Args, Debug, Clone)]
pub struct AskCommand {
    /// Document files to load
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Maximum results to display per query [default: 10]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Arguments for `reva inspect`.
#[derive(Args, Debug, Clone)]
pub struct InspectCommand {
    /// Document files to analyze
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Maximum terms to display per document [default: 10]
    #[arg(short = 'n', long)]
    pub terms: Option<usize>,
}

/// Supported `reva` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Rank documents against a query
    #[command(after_help = "\
EXAMPLES:
  reva search 'error handling' docs/*.txt
  reva search --json 'apples' a.txt b.txt
  reva search -n 3 --preview 'setup guide' notes/*.txt")]
    Search(SearchCommand),

    /// Load documents once and answer queries interactively
    #[command(after_help = "\
Reads one query per line from stdin. An empty line or end of input ends
the session.

EXAMPLES:
  reva ask docs/*.txt
  echo 'apples' | reva ask a.txt b.txt")]
    Ask(AskCommand),

    /// Show vocabulary statistics and each document's top terms
    Inspect(InspectCommand),
}
