use anyhow::{bail, Context, Result};
use search_core::{paginate, DocId, Document, DocumentStatus, RequestQueue, SearchServer};
use serde::Deserialize;
use walkdir::WalkDir;

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct InputDoc {
    pub id: DocId,
    pub text: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub ratings: Vec<i32>,
}

/// `.json`/`.jsonl` files under `input`, or `input` itself when it is a file.
pub fn collect_input_files(input: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() {
                if let Some(ext) = p.extension().and_then(|s| s.to_str()) {
                    if matches!(ext, "json" | "jsonl") {
                        files.push(p.to_path_buf());
                    }
                }
            }
        }
    } else if input.is_file() {
        files.push(input.to_path_buf());
    }
    files
}

pub fn load_documents(input: &Path) -> Result<Vec<InputDoc>> {
    let mut docs = Vec::new();
    for file in collect_input_files(input) {
        if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
            read_jsonl(&file, &mut docs)?;
        } else {
            read_json(&file, &mut docs)?;
        }
    }
    tracing::info!(num_docs = docs.len(), input = %input.display(), "loaded documents");
    Ok(docs)
}

fn read_jsonl(file: &Path, docs: &mut Vec<InputDoc>) -> Result<()> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let reader = BufReader::new(f);
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let doc: InputDoc = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: malformed document", file.display(), line_no + 1))?;
        docs.push(doc);
    }
    Ok(())
}

fn read_json(file: &Path, docs: &mut Vec<InputDoc>) -> Result<()> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let reader = BufReader::new(f);
    let json: serde_json::Value =
        serde_json::from_reader(reader).with_context(|| format!("{}: malformed JSON", file.display()))?;
    match json {
        serde_json::Value::Array(arr) => {
            for (i, v) in arr.into_iter().enumerate() {
                let doc: InputDoc = serde_json::from_value(v)
                    .with_context(|| format!("{}[{i}]: malformed document", file.display()))?;
                docs.push(doc);
            }
        }
        serde_json::Value::Object(_) => {
            let doc: InputDoc = serde_json::from_value(json)
                .with_context(|| format!("{}: malformed document", file.display()))?;
            docs.push(doc);
        }
        _ => bail!("{}: expected a JSON object or array", file.display()),
    }
    Ok(())
}

pub fn build_server(stop_words: &str, docs: Vec<InputDoc>) -> Result<SearchServer> {
    let mut server = SearchServer::from_stop_words_text(stop_words).context("invalid stop words")?;
    for doc in docs {
        server
            .add_document(doc.id, &doc.text, doc.status, &doc.ratings)
            .with_context(|| format!("adding document {}", doc.id))?;
    }
    tracing::info!(num_docs = server.document_count(), "index ready");
    Ok(server)
}

/// One line per page, each prefixed with its 1-based page number.
pub fn render_pages(docs: &[Document], page_size: usize) -> Result<String> {
    let mut out = String::new();
    for (i, page) in paginate(docs, page_size)?.into_iter().enumerate() {
        out.push_str(&format!("Page {}: {page}\n", i + 1));
    }
    Ok(out)
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub recorded: usize,
    pub failed: usize,
    pub no_result: usize,
}

/// Feed each non-blank line of `queries` through a request queue, ranking
/// documents with `status`.
pub fn replay_queries(server: &SearchServer, queries: &str, status: DocumentStatus) -> ReplaySummary {
    let mut queue = RequestQueue::new(server);
    let mut failed = 0;
    for line in queries.lines().filter(|l| !l.trim().is_empty()) {
        if let Err(err) = queue.add_find_request_by_status(line, status) {
            tracing::warn!(query = line, %err, "skipping query");
            failed += 1;
        }
    }
    ReplaySummary { recorded: queue.len(), failed, no_result: queue.no_result_requests() }
}

fn print_results(out: &mut impl Write, query: &str, docs: &[Document]) -> Result<()> {
    writeln!(out, "Search \"{query}\"")?;
    for doc in docs {
        writeln!(out, "{doc}")?;
    }
    writeln!(out)?;
    Ok(())
}

/// Walk through indexing, ranking, matching and the error paths on a small pet corpus.
pub fn run_demo(out: &mut impl Write) -> Result<()> {
    let mut server = SearchServer::from_stop_words_text("and with for")?;
    server.add_document(6, "funny pet and funny frog", DocumentStatus::Actual, &[7, 2, 7])?;
    server.add_document(5, "funny pet with curly hair", DocumentStatus::Actual, &[1, 2, 3])?;
    server.add_document(4, "funny pet with funny sweet dog", DocumentStatus::Actual, &[1, 3, 1])?;
    server.add_document(10, "pet snake", DocumentStatus::Banned, &[7, 1, 7])?;
    server.add_document(2, "funny frog and funny hamster", DocumentStatus::Actual, &[1, 1, 1])?;
    server.add_document(1, "funny pet and not very funny parrot", DocumentStatus::Actual, &[1, 1, 2])?;

    for query in ["funny pet", "not very funny parrot", "funny pet -curly", "funny pet -snake"] {
        print_results(out, query, &server.find_top_documents(query)?)?;
    }

    for index in 0..server.document_count() {
        writeln!(out, "Document ID at index {index}: {}", server.document_id(index)?)?;
    }

    let query = "funny pet with curly hair";
    let matched = server.match_document(query, 2)?;
    writeln!(out, "Matched words in document 2 for query \"{query}\"")?;
    writeln!(out, "Document status: {}", matched.status)?;
    writeln!(out, "Matched words: {}", matched.matched_words.join(" "))?;

    writeln!(out, "Trying to get document with invalid index...")?;
    if let Err(err) = server.document_id(10) {
        writeln!(out, "Caught {} error: {err}", err.kind())?;
    }
    writeln!(out, "Trying to add document with invalid ID...")?;
    if let Err(err) = server.add_document(-1, "invalid document", DocumentStatus::Actual, &[]) {
        writeln!(out, "Caught {} error: {err}", err.kind())?;
    }
    writeln!(out, "Trying to search with empty query...")?;
    if let Err(err) = server.find_top_documents("") {
        writeln!(out, "Caught {} error: {err}", err.kind())?;
    }
    Ok(())
}
