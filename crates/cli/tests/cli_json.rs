use serde_json::Value;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tsp-cli"))
        .args(args)
        .output()
        .expect("spawn tsp-cli")
}

fn stdout_json(out: &Output) -> Value {
    serde_json::from_slice(&out.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not one JSON document ({e}):\n{}",
            String::from_utf8_lossy(&out.stdout)
        )
    })
}

#[test]
fn solve_stdout_is_a_single_json_document() {
    let out = run(&["solve", "--cities", "4", "--seed", "1"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let doc = stdout_json(&out);
    assert_eq!(doc["cities"], 4);
    assert_eq!(doc["tours"], 24);
    assert_eq!(doc["best_tour"].as_array().map(Vec::len), Some(4));
    // logs go to stderr
    assert!(String::from_utf8_lossy(&out.stderr).contains("solved"));
}

#[test]
fn report_stdout_is_a_single_json_document() {
    let out = run(&["--tag", "ci", "report"]);
    assert!(out.status.success());
    let doc = stdout_json(&out);
    assert!(doc.is_object());
}

#[test]
fn out_table_matches_printed_optimum() {
    let dir = tempfile::tempdir().unwrap();
    let table = dir.path().join("t.csv");
    let table_arg = table.to_str().unwrap();
    let out = run(&["solve", "--cities", "5", "--seed", "3", "--out", table_arg]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let doc = stdout_json(&out);

    let plain = stdout_json(&run(&["solve", "--cities", "5", "--seed", "3"]));
    assert_eq!(doc["best_tour"], plain["best_tour"]);
    assert_eq!(doc["best_length"], plain["best_length"]);

    let csv = std::fs::read_to_string(&table).unwrap();
    // header + 5! rows
    assert_eq!(csv.lines().count(), 121);
    assert!(dir.path().join("t.provenance.json").exists());
}

#[test]
fn out_table_refuses_batch_only_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let table = dir.path().join("t.csv");
    let out = run(&[
        "solve",
        "--cities",
        "11",
        "--seed",
        "1",
        "--out",
        table.to_str().unwrap(),
    ]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(!table.exists());
}
