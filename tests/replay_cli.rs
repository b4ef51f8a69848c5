mod common;

use common::{bob_and_amy, students_file};
use std::process::Command;
use tempfile::TempDir;

fn rollcall(dir: &TempDir, args: &[&str]) -> std::process::Output {
    // Point the config lookup at an empty directory so the user's file is ignored.
    Command::new(env!("CARGO_BIN_EXE_rollcall"))
        .args(args)
        .env("XDG_CONFIG_HOME", dir.path())
        .env("HOME", dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run rollcall")
}

#[test]
fn replay_prints_view_and_summary() {
    let dir = TempDir::new().unwrap();
    let students = students_file(dir.path(), bob_and_amy());
    let intents = dir.path().join("intents.jsonl");
    std::fs::write(
        &intents,
        r#"{"type":"startRoll"}
{"type":"mark","id":1,"rollState":"late"}
{"type":"search","attendanceState":"late"}
"#,
    )
    .unwrap();

    let output = rollcall(
        &dir,
        &[
            "replay",
            "--students",
            students.to_str().unwrap(),
            intents.to_str().unwrap(),
        ],
    );
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let view = report["view"].as_array().unwrap();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0]["id"], 1);
    assert_eq!(view[0]["rollState"], "late");
    assert_eq!(
        report["summary"],
        serde_json::json!([
            {"type": "all", "count": 2},
            {"type": "present", "count": 0},
            {"type": "late", "count": 1},
            {"type": "absent", "count": 1}
        ])
    );
    assert_eq!(report["isRollActive"], true);
}

#[test]
fn replay_without_students_starts_empty() {
    let dir = TempDir::new().unwrap();
    let intents = dir.path().join("intents.jsonl");
    std::fs::write(
        &intents,
        r#"{"type":"load","students":[{"id":4,"first_name":"Zed","last_name":"Ames"},{"id":5,"first_name":"Ada","last_name":"Bloom"}]}
{"type":"sort","byFirstName":false,"ascending":false}
"#,
    )
    .unwrap();

    let output = rollcall(&dir, &["replay", intents.to_str().unwrap()]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<u64> = report["view"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![5, 4]);
}

#[test]
fn replay_rejects_malformed_line() {
    let dir = TempDir::new().unwrap();
    let intents = dir.path().join("intents.jsonl");
    std::fs::write(&intents, "{\"type\":\"startRoll\"}\n{oops\n").unwrap();

    let output = rollcall(&dir, &["replay", intents.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"), "stderr: {stderr}");
}

#[test]
fn invalid_config_fails_fast() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "[ui]\ntick_rate_ms = 1\n").unwrap();
    let intents = dir.path().join("intents.jsonl");
    std::fs::write(&intents, "").unwrap();

    let output = rollcall(
        &dir,
        &[
            "--config",
            config.to_str().unwrap(),
            "replay",
            intents.to_str().unwrap(),
        ],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tick_rate_ms"), "stderr: {stderr}");
}
