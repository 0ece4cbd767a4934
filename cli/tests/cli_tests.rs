use search_cli::{build_server, load_documents, render_pages, replay_queries, run_demo, ReplaySummary};
use search_core::DocumentStatus;
use std::fs;
use tempfile::tempdir;

fn write_corpus(dir: &std::path::Path) {
    fs::write(
        dir.join("pets.jsonl"),
        concat!(
            r#"{"id": 1, "text": "curly cat curly tail", "ratings": [7, 2, 7]}"#,
            "\n\n",
            r#"{"id": 2, "text": "curly dog and fancy collar", "status": "ACTUAL", "ratings": [1, 2, 3]}"#,
            "\n",
        ),
    )
    .unwrap();
    fs::create_dir_all(dir.join("more")).unwrap();
    fs::write(
        dir.join("more/extra.json"),
        r#"[{"id": 3, "text": "big cat fancy collar", "ratings": [1, 2, 8]},
            {"id": 4, "text": "big snake", "status": "BANNED"}]"#,
    )
    .unwrap();
    fs::write(dir.join("notes.txt"), "not a corpus file").unwrap();
}

#[test]
fn loads_json_and_jsonl_from_a_directory() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());

    let docs = load_documents(dir.path()).unwrap();
    assert_eq!(docs.len(), 4);
    let banned = docs.iter().find(|d| d.id == 4).unwrap();
    assert_eq!(banned.status, DocumentStatus::Banned);
    assert!(banned.ratings.is_empty());

    let server = build_server("and in at", docs).unwrap();
    assert_eq!(server.document_count(), 4);
    let ids: Vec<i32> = server.find_top_documents("curly cat").unwrap().iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 3, 2]);
}

#[test]
fn malformed_line_reports_its_location() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("bad.jsonl");
    fs::write(&file, "{\"id\": 1, \"text\": \"ok\"}\n{\"id\": \"x\"}\n").unwrap();
    let err = load_documents(&file).unwrap_err();
    assert!(format!("{err:#}").contains("bad.jsonl:2"));
}

#[test]
fn status_is_read_case_insensitively() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("mixed.json");
    fs::write(
        &file,
        r#"[{"id": 1, "text": "cat", "status": "banned"},
            {"id": 2, "text": "dog", "status": "Active"},
            {"id": 3, "text": "owl", "status": "REMOVED"}]"#,
    )
    .unwrap();
    let docs = load_documents(&file).unwrap();
    let statuses: Vec<DocumentStatus> = docs.iter().map(|d| d.status).collect();
    assert_eq!(statuses, vec![DocumentStatus::Banned, DocumentStatus::Actual, DocumentStatus::Removed]);

    fs::write(&file, r#"[{"id": 1, "text": "cat", "status": "gone"}]"#).unwrap();
    let err = load_documents(&file).unwrap_err();
    assert!(format!("{err:#}").contains("unknown document status"));
}

#[test]
fn scalar_json_file_is_rejected() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("scalar.json");
    fs::write(&file, "42").unwrap();
    let err = load_documents(&file).unwrap_err();
    assert!(err.to_string().contains("expected a JSON object or array"));
}

#[test]
fn bad_array_element_reports_its_index() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("docs.json");
    fs::write(&file, r#"[{"id": 1, "text": "ok"}, {"id": 2}]"#).unwrap();
    let err = load_documents(&file).unwrap_err();
    assert!(format!("{err:#}").contains("docs.json[1]: malformed document"));
}

#[test]
fn duplicate_ids_fail_the_build() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("dup.json");
    fs::write(&file, r#"[{"id": 1, "text": "a"}, {"id": 1, "text": "b"}]"#).unwrap();
    let err = build_server("", load_documents(&file).unwrap()).unwrap_err();
    assert!(format!("{err:#}").contains("adding document 1"));
}

#[test]
fn pages_and_replay() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let server = build_server("and in at", load_documents(dir.path()).unwrap()).unwrap();

    let docs = server.find_top_documents("curly cat collar").unwrap();
    let rendered = render_pages(&docs, 2).unwrap();
    assert_eq!(rendered.lines().count(), 2);
    assert!(rendered.starts_with("Page 1: { document_id = "));
    assert!(render_pages(&docs, 0).is_err());

    let queries = "curly\nunicorn\n\ncat --x\nsnake\n";
    let summary = replay_queries(&server, queries, DocumentStatus::Actual);
    assert_eq!(summary, ReplaySummary { recorded: 3, failed: 1, no_result: 2 });
    let banned = replay_queries(&server, queries, DocumentStatus::Banned);
    assert_eq!(banned, ReplaySummary { recorded: 3, failed: 1, no_result: 2 });
    let snake_only = replay_queries(&server, "snake\nbig\n", DocumentStatus::Banned);
    assert_eq!(snake_only, ReplaySummary { recorded: 2, failed: 0, no_result: 0 });
}

#[test]
fn demo_runs_end_to_end() {
    let mut out = Vec::new();
    run_demo(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Search \"funny pet -snake\""));
    assert!(text.contains("Document ID at index 5: 10"));
    assert!(text.contains("Matched words: funny"));
    assert!(text.contains("Caught out_of_range error"));
    assert_eq!(text.matches("Caught invalid_argument error").count(), 2);
}
