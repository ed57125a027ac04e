//! Integration tests driving the wordgrid binary end to end.
//!
//! Every test writes the fixture dictionary to its own temp dir and passes it
//! with `--dict`, so no app data directory or environment is touched.

mod fixtures;

use fixtures::{BOARD, write_dictionary};
use serde_json::Value;
use std::path::Path;
use std::process::Command;

/// Run wordgrid with given args and color off
fn run_wordgrid(args: &[&str]) -> (String, String, bool) {
    let mut all = args.to_vec();
    all.push("--color=never");
    run_raw(&all)
}

/// Run wordgrid with exactly the given args
fn run_raw(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_wordgrid"))
        .args(args)
        .env_remove("WORDGRID_DICT")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run wordgrid");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

/// Run wordgrid against a dictionary and parse its JSON output
fn run_json(dict: &Path, args: &[&str]) -> Value {
    let mut all = vec!["--json", "--dict", dict.to_str().unwrap()];
    all.extend_from_slice(args);
    let (stdout, stderr, ok) = run_wordgrid(&all);
    assert!(ok, "wordgrid {:?} failed: {}", args, stderr);
    serde_json::from_str(&stdout).expect("invalid JSON output")
}

#[test]
fn test_lookup_word_and_prefix() {
    let (_dir, dict) = write_dictionary();

    let report = run_json(&dict, &["lookup", "dog"]);
    assert_eq!(report["path_present"], true);
    assert_eq!(report["is_word"], true);
    let children: Vec<&str> = report["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap())
        .collect();
    assert_eq!(children, vec!["$", "s"]);

    let report = run_json(&dict, &["lookup", "qui"]);
    assert_eq!(report["path_present"], true);
    assert_eq!(report["is_word"], false);
}

#[test]
fn test_lookup_is_case_insensitive() {
    let (_dir, dict) = write_dictionary();
    let report = run_json(&dict, &["lookup", "CATS"]);
    assert_eq!(report["is_word"], true);
}

#[test]
fn test_children_of_root() {
    let (_dir, dict) = write_dictionary();
    let children = run_json(&dict, &["children"]);
    let mut letters: Vec<&str> = children
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap())
        .collect();
    letters.sort();
    assert_eq!(letters, vec!["a", "c", "d", "g", "q", "t"]);
}

#[test]
fn test_has_child() {
    let (_dir, dict) = write_dictionary();
    assert_eq!(run_json(&dict, &["has-child", "ca", "t"]), true);
    assert_eq!(run_json(&dict, &["has-child", "ca", "z"]), false);
    assert_eq!(run_json(&dict, &["has-child", "zz", "a"]), false);
}

#[test]
fn test_trace_without_dictionary() {
    let (stdout, stderr, ok) = run_wordgrid(&["trace", "abcdefghijklmnop", "afk"]);
    assert!(ok, "{}", stderr);
    assert!(stdout.starts_with("yes afk"));

    let (stdout, _, ok) = run_wordgrid(&["trace", "abcdefghijklmnop", "ajp"]);
    assert!(ok);
    assert!(stdout.starts_with("no ajp"));
}

#[test]
fn test_color_always_forces_escapes() {
    let (stdout, stderr, ok) =
        run_raw(&["--color", "always", "trace", "abcdefghijklmnop", "afk"]);
    assert!(ok, "{}", stderr);
    assert!(stdout.contains("\x1b["));
    assert!(stdout.contains("afk"));

    let (stdout, _, ok) = run_raw(&["--color", "never", "trace", "abcdefghijklmnop", "afk"]);
    assert!(ok);
    assert!(!stdout.contains("\x1b["));
    assert!(stdout.starts_with("yes afk"));
}

#[test]
fn test_trace_paths_json() {
    let (stdout, _, ok) = run_wordgrid(&["--json", "trace", BOARD, "quilt", "--paths"]);
    assert!(ok);
    let report: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["traceable"], true);
    let paths = report["paths"].as_array().unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].as_array().unwrap().len(), 4);
    assert_eq!(paths[0][0]["x"], 0);
    assert_eq!(paths[0][0]["y"], 3);
}

#[test]
fn test_trace_rejects_bad_grid() {
    let (_, stderr, ok) = run_wordgrid(&["trace", "abcdefghi", "abc"]);
    assert!(!ok);
    assert!(stderr.contains("Invalid grid"));
}

#[test]
fn test_check_word() {
    let (_dir, dict) = write_dictionary();

    let report = run_json(&dict, &["check", BOARD, "dogs"]);
    assert_eq!(report["accepted"], true);
    assert_eq!(report["score"], 1);

    let report = run_json(&dict, &["check", BOARD, "do"]);
    assert_eq!(report["accepted"], false);
    assert_eq!(report["reason"], "words must be at least 3 letters long");

    let report = run_json(&dict, &["check", BOARD, "act"]);
    assert_eq!(report["reason"], "cannot be formed on this board");

    let report = run_json(&dict, &["check", BOARD, "sold"]);
    assert_eq!(report["reason"], "not in the dictionary");
}

#[test]
fn test_solve_board() {
    let (_dir, dict) = write_dictionary();
    let solution = run_json(&dict, &["solve", BOARD]);

    let words: Vec<&str> = solution["words"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["word"].as_str().unwrap())
        .collect();
    assert_eq!(words, vec!["quilt", "cats", "dogs", "cat", "dog", "god", "tax"]);
    assert_eq!(solution["total_score"], 8);
}

#[test]
fn test_solve_min_length() {
    let (_dir, dict) = write_dictionary();
    let solution = run_json(&dict, &["solve", BOARD, "--min-length", "2"]);
    let words = solution["words"].as_array().unwrap();
    assert!(words.iter().any(|w| w["word"] == "do"));
}

#[test]
fn test_solve_text_output() {
    let (_dir, dict) = write_dictionary();
    let (stdout, stderr, ok) =
        run_wordgrid(&["--dict", dict.to_str().unwrap(), "solve", BOARD]);
    assert!(ok, "{}", stderr);
    assert!(stdout.contains("Qu"));
    assert!(stdout.contains("7 words, 8 points"));
}

#[test]
fn test_generate_seeded() {
    let (first, _, ok) = run_wordgrid(&["generate", "--size", "5", "--seed", "11"]);
    assert!(ok);
    let (second, _, _) = run_wordgrid(&["generate", "--size", "5", "--seed", "11"]);
    assert_eq!(first, second);
    assert_eq!(first.lines().next().unwrap().len(), 25);

    let (_, _, ok) = run_wordgrid(&["generate", "--size", "6"]);
    assert!(!ok);
}

#[test]
fn test_stats() {
    let (_dir, dict) = write_dictionary();
    let stats = run_json(&dict, &["stats"]);
    let records = stats["record_count"].as_u64().unwrap();
    assert!(records > 0);
    assert_eq!(stats["byte_size"].as_u64().unwrap(), records * 4);
}

#[test]
fn test_missing_dictionary() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("missing.dawg");
    let (_, stderr, ok) = run_wordgrid(&["--dict", missing.to_str().unwrap(), "lookup", "cat"]);
    assert!(!ok);
    assert!(stderr.contains("No usable dictionary"));
}
