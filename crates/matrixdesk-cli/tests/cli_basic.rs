//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own temporary data directory.

mod common;

use common::{parse_json, run_cli_failure, run_cli_success};

fn json_after_header(stdout: &str) -> serde_json::Value {
    let body: String = stdout.lines().skip(1).collect::<Vec<_>>().join("\n");
    parse_json(&body)
}

#[test]
fn test_task_add_list_complete() {
    let home = tempfile::tempdir().unwrap();
    let home = home.path();

    let out = run_cli_success(home, &["task", "add", "Fix outage", "-i", "5", "-u", "5", "-e", "1"]);
    assert!(out.starts_with("Task created: "));
    let task = json_after_header(&out);
    assert_eq!(task["quadrant"], "Q1-Do");
    assert_eq!(task["manualQuadrant"], "Auto");
    assert_eq!(task["score"], 23.5);
    let id = task["id"].as_str().unwrap().to_string();

    run_cli_success(home, &["task", "add", "Plan quarter", "-i", "4", "-u", "2"]);

    let listed = parse_json(&run_cli_success(home, &["task", "list", "--json"]));
    assert_eq!(listed.as_array().unwrap().len(), 2);
    assert_eq!(listed[0]["title"], "Plan quarter");
    assert_eq!(listed[0]["quadrant"], "Q2-Schedule");

    let text = run_cli_success(home, &["task", "list"]);
    assert!(text.contains("Q1: Do First (1)"));
    assert!(text.contains("Q2: Schedule (1)"));

    let q1 = parse_json(&run_cli_success(home, &["task", "list", "--json", "--quadrant", "Q1-Do"]));
    assert_eq!(q1.as_array().unwrap().len(), 1);

    let out = run_cli_success(home, &["task", "complete", &id]);
    assert!(out.contains(&id));
    let listed = parse_json(&run_cli_success(home, &["task", "list", "--json"]));
    assert_eq!(listed.as_array().unwrap().len(), 1);

    run_cli_failure(home, &["task", "complete", &id]);
}

#[test]
fn test_task_manual_quadrant() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(
        home.path(),
        &["task", "add", "Reply to email", "-i", "5", "-u", "5", "--quadrant", "Q3-Delegate"],
    );
    let task = json_after_header(&out);
    assert_eq!(task["quadrant"], "Q3-Delegate");
    assert_eq!(task["manualQuadrant"], "Q3-Delegate");
}

#[test]
fn test_task_rejects_out_of_range_rating() {
    let home = tempfile::tempdir().unwrap();
    run_cli_failure(home.path(), &["task", "add", "Bad", "-i", "6"]);
    run_cli_failure(home.path(), &["task", "add", "   "]);
}

#[test]
fn test_task_score_preview() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["task", "score", "-i", "3", "-u", "3", "-e", "2"]);
    let breakdown = parse_json(&out);
    assert_eq!(breakdown["total_score"], 12.0);
    assert_eq!(breakdown["quadrant"], "Q4-Eliminate");
}

#[test]
fn test_kcs_chunk_export_import() {
    let home = tempfile::tempdir().unwrap();
    let home = home.path();

    let out = run_cli_success(
        home,
        &["kcs", "chunk", "--text", "abcdefghij", "--chunk-size", "4", "--overlap", "1"],
    );
    assert!(out.contains("Source: manual"));
    assert!(out.contains("Chunks: 3"));

    let docs = parse_json(&run_cli_success(home, &["kcs", "list", "--json"]));
    let doc = &docs[0];
    assert_eq!(doc["chunks"][1]["text"], "defg");
    let doc_id = doc["docId"].as_str().unwrap().to_string();

    let export_path = home.join("out").join("kcs.jsonl");
    let export = export_path.to_str().unwrap();
    run_cli_success(home, &["kcs", "export", "--output", export]);
    let content = std::fs::read_to_string(&export_path).unwrap();
    assert_eq!(content.lines().count(), 1);

    run_cli_success(home, &["kcs", "remove", &doc_id]);
    let out = run_cli_success(home, &["kcs", "import", export]);
    assert!(out.contains("Imported 1 of 1 documents"));

    let after = parse_json(&run_cli_success(home, &["kcs", "list", "--json"]));
    assert_eq!(after, docs);

    let out = run_cli_success(home, &["kcs", "import", export]);
    assert!(out.contains("Imported 0 of 1 documents"));
}

#[test]
fn test_kcs_chunk_from_file_uses_file_name_as_source() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("notes.txt");
    std::fs::write(&file, "some notes to keep").unwrap();
    let out = run_cli_success(home.path(), &["kcs", "chunk", "--file", file.to_str().unwrap()]);
    assert!(out.contains("Source: notes.txt"));
    assert!(out.contains("Chunks: 1"));
}

#[test]
fn test_kcs_rejects_overlap_not_below_chunk_size() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, _) = run_cli_failure(
        home.path(),
        &["kcs", "chunk", "--text", "abc", "--chunk-size", "4", "--overlap", "4"],
    );
    assert!(stderr.contains("overlap"));
}

#[test]
fn test_kcs_export_json_to_stdout() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["kcs", "export", "--format", "json"]);
    assert_eq!(parse_json(&out), serde_json::json!([]));
}

#[test]
fn test_ir_save_show_export() {
    let home = tempfile::tempdir().unwrap();
    let home = home.path();
    run_cli_success(home, &["ir", "save", "--text", "Always cite sources."]);

    let ir = parse_json(&run_cli_success(home, &["ir", "show"]));
    assert_eq!(ir["raw"], "Always cite sources.");
    assert_eq!(ir["markdown"], "Always cite sources.");
    assert!(ir["savedAt"].is_string());

    let out = run_cli_success(home, &["ir", "export", "--stdout"]);
    assert_eq!(out.trim_end(), "Always cite sources.");
}

#[test]
fn test_config_get_set() {
    let home = tempfile::tempdir().unwrap();
    let home = home.path();
    assert_eq!(run_cli_success(home, &["config", "get", "chunking.chunk_size"]).trim(), "1200");
    run_cli_success(home, &["config", "set", "chunking.overlap", "0"]);
    run_cli_success(home, &["config", "set", "chunking.chunk_size", "5"]);
    assert_eq!(run_cli_success(home, &["config", "get", "chunking.chunk_size"]).trim(), "5");

    let out = run_cli_success(home, &["kcs", "chunk", "--text", "abcdefghij"]);
    assert!(out.contains("Chunks: 2"));

    run_cli_failure(home, &["config", "set", "chunking.overlap", "5"]);
    run_cli_failure(home, &["config", "get", "nope"]);
}

#[test]
fn test_completions() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["completions", "bash"]);
    assert!(out.contains("matrixdesk"));
}

#[test]
fn test_malformed_config_warns_and_uses_defaults() {
    let home = tempfile::tempdir().unwrap();
    let home = home.path();
    std::fs::write(home.join("config.toml"), "chunking = [not toml").unwrap();

    let (stdout, stderr, code) = common::run_cli(home, &["task", "add", "Still works"]);
    assert_eq!(code, 0, "{stderr}");
    assert!(stdout.starts_with("Task created: "));
    assert!(stderr.contains("using default config"), "{stderr}");

    run_cli_failure(home, &["config", "get", "chunking.chunk_size"]);
}
