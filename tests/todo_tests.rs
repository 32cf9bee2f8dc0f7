//! Integration tests for the todo command

use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

mod common;
use common::assistant_cmd;

fn data_file(temp: &TempDir) -> String {
    temp.path().join("todos.json").to_str().unwrap().to_string()
}

fn todo_cmd(temp: &TempDir) -> assert_cmd::Command {
    let mut cmd = assistant_cmd();
    cmd.env("TODO_DATA_FILE", data_file(temp));
    cmd
}

fn parse_stdout(output: std::process::Output) -> Value {
    let stdout = String::from_utf8(output.stdout).unwrap();
    serde_json::from_str(&stdout).unwrap()
}

#[test]
fn test_add_assigns_first_id_and_defaults() {
    let temp = TempDir::new().unwrap();

    let output = todo_cmd(&temp)
        .args(["todo", "add", "Buy milk", "--category", "errand"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let record = parse_stdout(output);
    assert_eq!(record["id"], 1);
    assert_eq!(record["title"], "Buy milk");
    assert_eq!(record["category"], "errand");
    assert_eq!(record["status"], "pending");
    assert_eq!(record["priority"], "medium");
    assert!(record["due_date"].is_null());
}

#[test]
fn test_add_delete_list_scenario() {
    let temp = TempDir::new().unwrap();

    todo_cmd(&temp)
        .args(["todo", "add", "Buy milk", "--category", "errand"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 1"));

    todo_cmd(&temp)
        .args(["todo", "add", "Call Bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 2"));

    todo_cmd(&temp)
        .args(["todo", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TODO 1 deleted"));

    let output = todo_cmd(&temp).args(["todo", "list"]).output().unwrap();
    let records = parse_stdout(output);
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], 2);

    // Second delete of the same id fails
    todo_cmd(&temp)
        .args(["todo", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TODO 1 not found"));
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let temp = TempDir::new().unwrap();

    for title in ["a", "b", "c"] {
        todo_cmd(&temp)
            .args(["todo", "add", title])
            .assert()
            .success();
    }

    todo_cmd(&temp)
        .args(["todo", "delete", "3"])
        .assert()
        .success();

    todo_cmd(&temp)
        .args(["todo", "add", "d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 3"));
}

#[test]
fn test_list_filters_are_conjunctive() {
    let temp = TempDir::new().unwrap();

    todo_cmd(&temp)
        .args(["todo", "add", "a", "--category", "work", "--priority", "high"])
        .assert()
        .success();
    todo_cmd(&temp)
        .args(["todo", "add", "b", "--category", "work"])
        .assert()
        .success();
    todo_cmd(&temp)
        .args(["todo", "add", "c", "--priority", "high"])
        .assert()
        .success();

    let output = todo_cmd(&temp)
        .args(["todo", "list", "--category", "work", "--priority", "high"])
        .output()
        .unwrap();
    let records = parse_stdout(output);
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["title"], "a");
}

#[test]
fn test_list_tag_filter_requires_all_tags() {
    let temp = TempDir::new().unwrap();

    todo_cmd(&temp)
        .args(["todo", "add", "a", "--tags", "home,urgent"])
        .assert()
        .success();
    todo_cmd(&temp)
        .args(["todo", "add", "b", "--tags", "home"])
        .assert()
        .success();

    let output = todo_cmd(&temp)
        .args(["todo", "list", "--tags", "home,urgent"])
        .output()
        .unwrap();
    let records = parse_stdout(output);
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["title"], "a");
}

#[test]
fn test_update_partial_keeps_other_fields() {
    let temp = TempDir::new().unwrap();

    todo_cmd(&temp)
        .args(["todo", "add", "Water plants", "--category", "garden"])
        .assert()
        .success();

    let output = todo_cmd(&temp)
        .args(["todo", "update", "1", "--status", "done"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let record = parse_stdout(output);
    assert_eq!(record["status"], "done");
    assert_eq!(record["title"], "Water plants");
    assert_eq!(record["category"], "garden");
    assert!(record["updated_at"].as_str().unwrap() >= record["created_at"].as_str().unwrap());
}

#[test]
fn test_update_missing_id_fails() {
    let temp = TempDir::new().unwrap();

    todo_cmd(&temp)
        .args(["todo", "update", "99", "--status", "done"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TODO 99 not found"));
}

#[test]
fn test_search_is_case_insensitive() {
    let temp = TempDir::new().unwrap();

    todo_cmd(&temp)
        .args(["todo", "add", "Prepare meeting agenda"])
        .assert()
        .success();
    todo_cmd(&temp)
        .args(["todo", "add", "Pay rent"])
        .assert()
        .success();

    let output = todo_cmd(&temp)
        .args(["todo", "search", "MEET"])
        .output()
        .unwrap();
    let records = parse_stdout(output);
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["title"], "Prepare meeting agenda");
}

#[test]
fn test_add_without_title_fails() {
    let temp = TempDir::new().unwrap();

    todo_cmd(&temp).args(["todo", "add"]).assert().failure();

    // No store mutation happened
    assert!(!temp.path().join("todos.json").exists());
}

#[test]
fn test_unknown_command_fails() {
    assistant_cmd().arg("frobnicate").assert().failure();
}

#[test]
fn test_malformed_data_file_recovers_with_warning() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("todos.json"), "not valid json {").unwrap();

    todo_cmd(&temp)
        .args(["todo", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"))
        .stderr(predicate::str::contains("Could not parse"));
}

#[test]
fn test_default_path_under_assistant_dir() {
    let temp = TempDir::new().unwrap();

    assistant_cmd()
        .current_dir(temp.path())
        .args(["todo", "add", "In the default store"])
        .assert()
        .success();

    let default_file = temp.path().join(".assistant").join("todos.json");
    assert!(default_file.exists());

    let contents = fs::read_to_string(default_file).unwrap();
    let records: Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 1);
}

#[test]
fn test_round_trip_across_invocations() {
    let temp = TempDir::new().unwrap();

    for i in 1..=4 {
        todo_cmd(&temp)
            .args(["todo", "add", &format!("item {i}")])
            .assert()
            .success();
    }

    let output = todo_cmd(&temp).args(["todo", "list"]).output().unwrap();
    let records = parse_stdout(output);
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 4);
    for (index, record) in records.iter().enumerate() {
        assert_eq!(record["id"], (index + 1) as u64);
        assert_eq!(record["title"], format!("item {}", index + 1));
    }
}
