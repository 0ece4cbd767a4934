use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use search_cli::{build_server, load_documents, render_pages, replay_queries, run_demo};
use search_core::{DocId, DocumentStatus};
use tracing_subscriber::{fmt, EnvFilter};

use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "search-cli")]
#[command(about = "Query an in-memory TF-IDF document index", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank documents for a query
    Search {
        /// Input path (JSON/JSONL file or directory)
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        query: String,
        /// Space-delimited stop words
        #[arg(long, default_value = "")]
        stop_words: String,
        /// Only rank documents with this status
        #[arg(long, default_value = "ACTUAL")]
        status: DocumentStatus,
        #[arg(long, default_value_t = 2)]
        page_size: usize,
        /// Print results as JSON instead of pages
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show which query words a document contains (any status; the status is reported)
    Match {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        query: String,
        #[arg(long)]
        id: DocId,
        #[arg(long, default_value = "")]
        stop_words: String,
    },
    /// Run a file of queries (one per line) and count empty results
    Replay {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        queries: PathBuf,
        #[arg(long, default_value = "")]
        stop_words: String,
        /// Only rank documents with this status
        #[arg(long, default_value = "ACTUAL")]
        status: DocumentStatus,
    },
    /// Run the built-in demonstration corpus
    Demo,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { input, query, stop_words, status, page_size, json } => {
            let server = build_server(&stop_words, load_documents(&input)?)?;
            let docs = server.find_top_documents_by_status(&query, status)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&docs)?);
            } else {
                print!("{}", render_pages(&docs, page_size)?);
            }
        }
        Commands::Match { input, query, id, stop_words } => {
            let server = build_server(&stop_words, load_documents(&input)?)?;
            let matched = server.match_document(&query, id)?;
            println!("status: {}", matched.status);
            println!("matched: {}", matched.matched_words.join(" "));
        }
        Commands::Replay { input, queries, stop_words, status } => {
            let server = build_server(&stop_words, load_documents(&input)?)?;
            let text = std::fs::read_to_string(&queries)
                .with_context(|| format!("reading {}", queries.display()))?;
            let summary = replay_queries(&server, &text, status);
            println!(
                "recorded {} requests ({} failed), {} with no results",
                summary.recorded, summary.failed, summary.no_result
            );
        }
        Commands::Demo => run_demo(&mut std::io::stdout().lock())?,
    }
    Ok(())
}
