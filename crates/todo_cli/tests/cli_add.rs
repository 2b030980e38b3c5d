use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(file_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("todo-{nanos}-{file_name}"))
}

#[test]
fn add_command_joins_argument_words() {
    let exe = env!("CARGO_BIN_EXE_todo");
    let store_path = temp_path("cli-add.json");

    let output = Command::new(exe)
        .args(["--add", "Buy", "organic", "milk"])
        .env("TODO_FILENAME", &store_path)
        .output()
        .expect("failed to run add command");

    let content = std::fs::read_to_string(&store_path).expect("store written");
    std::fs::remove_file(&store_path).ok();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stored: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(stored[0]["Task"], "Buy organic milk");
    assert_eq!(stored[0]["Done"], false);
    assert_eq!(stored[0]["CompletedAt"], "0001-01-01T00:00:00Z");
}

#[test]
fn add_command_reads_one_line_from_stdin() {
    let exe = env!("CARGO_BIN_EXE_todo");
    let store_path = temp_path("cli-add-stdin.json");

    let mut child = Command::new(exe)
        .arg("--add")
        .env("TODO_FILENAME", &store_path)
        .stdin(Stdio::piped())
        .spawn()
        .expect("failed to spawn add command");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(b"This item comes from STDIN\n")
        .expect("write to stdin");
    let status = child.wait().expect("wait for add command");

    let content = std::fs::read_to_string(&store_path).expect("store written");
    std::fs::remove_file(&store_path).ok();

    assert!(status.success());
    let stored: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(stored[0]["Task"], "This item comes from STDIN");
}

#[test]
fn add_command_rejects_blank_stdin() {
    let exe = env!("CARGO_BIN_EXE_todo");
    let store_path = temp_path("cli-add-blank.json");

    let output = Command::new(exe)
        .arg("--add")
        .env("TODO_FILENAME", &store_path)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run add command");

    let store_exists = store_path.exists();
    std::fs::remove_file(&store_path).ok();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: invalid_input"));
    assert!(stderr.contains("task cannot be blank"));
    assert!(!store_exists);
}
