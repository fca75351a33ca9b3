//! textdiff - compare two texts line by line or word by word.
//!
//! `textdiff serve` runs the JSON diff service; `textdiff diff` compares two
//! local files and prints the rendered result.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use textdiff::config::{DiffLimits, ServerConfig, DEFAULT_MAX_BODY_BYTES, DEFAULT_MAX_TABLE_CELLS};
use textdiff::lcs::{diff_tokens, summarize, DiffSummary};
use textdiff::{render, OutputFormat, RenderOptions, SplitMode, TokenSequence};

#[derive(Parser, Debug)]
#[command(name = "textdiff")]
#[command(about = "Line and word text diffing")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP diff service
    Serve(ServeArgs),
    /// Diff two files and print the result
    Diff(DiffArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "TEXTDIFF_ADDR", default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Largest accepted product of left and right token counts
    #[arg(long, env = "TEXTDIFF_MAX_TABLE_CELLS", default_value_t = DEFAULT_MAX_TABLE_CELLS)]
    max_table_cells: usize,

    /// Largest accepted request body in bytes
    #[arg(long, env = "TEXTDIFF_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    max_body_bytes: usize,
}

#[derive(Args, Debug)]
struct DiffArgs {
    /// Original file
    left: PathBuf,

    /// Modified file
    right: PathBuf,

    /// Tokenization policy
    #[arg(long, value_enum, default_value_t = SplitMode::Line)]
    mode: SplitMode,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Unified)]
    format: OutputFormat,

    /// Prefix each line with its position
    #[arg(short = 'n', long)]
    line_numbers: bool,

    /// Print added/removed/unchanged counts to stderr
    #[arg(long)]
    summary: bool,

    /// Largest accepted product of left and right token counts
    #[arg(long, env = "TEXTDIFF_MAX_TABLE_CELLS", default_value_t = DEFAULT_MAX_TABLE_CELLS)]
    max_table_cells: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Serve(args) => {
            let config = ServerConfig {
                addr: args.addr,
                limits: DiffLimits {
                    max_table_cells: args.max_table_cells,
                    max_body_bytes: args.max_body_bytes,
                },
            };
            textdiff::server::serve(config).await
        }
        Command::Diff(args) => run_diff_command(&args),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run_diff_command(args: &DiffArgs) -> Result<()> {
    let old = std::fs::read_to_string(&args.left)
        .with_context(|| format!("read {}", args.left.display()))?;
    let new = std::fs::read_to_string(&args.right)
        .with_context(|| format!("read {}", args.right.display()))?;

    let (rendered, summary) = diff_texts(&old, &new, args)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    if args.summary {
        eprintln!(
            "{} added, {} removed, {} unchanged",
            summary.added, summary.removed, summary.unchanged
        );
    }
    Ok(())
}

fn diff_texts(old: &str, new: &str, args: &DiffArgs) -> Result<(String, DiffSummary)> {
    let left = TokenSequence::new(old, args.mode);
    let right = TokenSequence::new(new, args.mode);
    debug!(left_tokens = left.len(), right_tokens = right.len(), "tokenized inputs");

    let limits = DiffLimits {
        max_table_cells: args.max_table_cells,
        ..Default::default()
    };
    limits.check(&left, &right)?;

    let script = diff_tokens(&left, &right);
    let options = RenderOptions::new(args.format)
        .with_line_numbers(args.line_numbers)
        .with_labels(args.left.display().to_string(), args.right.display().to_string());
    Ok((render(&script, &options), summarize(&script)))
}
