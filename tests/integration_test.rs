use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn notepad_cmd(tmp: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_notepad"));
    cmd.current_dir(tmp.path()).env_remove("NOTEPAD_DIR");
    cmd
}

fn run(tmp: &TempDir, args: &[&str]) -> Output {
    notepad_cmd(tmp).args(args).output().unwrap()
}

fn run_session(tmp: &TempDir, input: &str) -> Output {
    let mut child = notepad_cmd(tmp)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stored_notes(tmp: &TempDir) -> serde_json::Value {
    let raw = fs::read_to_string(tmp.path().join(".notepad/storage.json")).unwrap();
    let store: serde_json::Value = serde_json::from_str(&raw).unwrap();
    serde_json::from_str(store["notes"].as_str().unwrap()).unwrap()
}

fn seed(tmp: &TempDir, notes: &str) {
    fs::create_dir_all(tmp.path().join(".notepad")).unwrap();
    let store = serde_json::json!({ "notes": notes });
    fs::write(tmp.path().join(".notepad/storage.json"), store.to_string()).unwrap();
}

const LOGIN: [&str; 4] = ["--user", "me@example.com", "--password", "pw"];

#[test]
fn test_add_without_login_does_nothing() {
    let tmp = TempDir::new().unwrap();

    let output = run(&tmp, &["add", "milk", "--user", "me"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!tmp.path().join(".notepad").exists());
}

#[test]
fn test_fresh_store_add_and_remount() {
    let tmp = TempDir::new().unwrap();

    let output = run(&tmp, &[&["list", "--json"][..], &LOGIN[..]].concat());
    assert!(output.status.success());
    let listed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listed, serde_json::json!([]));

    let output = run(&tmp, &[&["add", "milk"][..], &LOGIN[..]].concat());
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Added note"));
    assert!(stdout.contains("milk"));

    let notes = stored_notes(&tmp);
    assert_eq!(notes.as_array().unwrap().len(), 1);
    assert_eq!(notes[0]["text"], "milk");
    assert!(notes[0]["id"].as_i64().unwrap() > 0);

    let output = run(&tmp, &[&["list"][..], &LOGIN[..]].concat());
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Note Taking App"));
    assert!(stdout.contains("milk"));
}

#[test]
fn test_add_keeps_spaces_and_ignores_blank() {
    let tmp = TempDir::new().unwrap();

    let output = run(&tmp, &[&["add", "  hello  ", "--json"][..], &LOGIN[..]].concat());
    assert!(output.status.success());
    let note: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(note["text"], "  hello  ");

    let output = run(&tmp, &[&["add", "   "][..], &LOGIN[..]].concat());
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let notes = stored_notes(&tmp);
    assert_eq!(notes.as_array().unwrap().len(), 1);
    assert_eq!(notes[0]["text"], "  hello  ");
}

#[test]
fn test_delete_from_seeded_store() {
    let tmp = TempDir::new().unwrap();
    seed(&tmp, r#"[{"text":"a","id":1},{"text":"b","id":2}]"#);

    let output = run(&tmp, &[&["list"][..], &LOGIN[..]].concat());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let a = stdout.find("a  [1]").unwrap();
    let b = stdout.find("b  [2]").unwrap();
    assert!(a < b);

    let output = run(&tmp, &[&["delete", "1"][..], &LOGIN[..]].concat());
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Deleted note 1 - a"));

    let raw = fs::read_to_string(tmp.path().join(".notepad/storage.json")).unwrap();
    let store: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(store["notes"], r#"[{"text":"b","id":2}]"#);
}

#[test]
fn test_delete_unknown_id_leaves_store() {
    let tmp = TempDir::new().unwrap();
    seed(&tmp, r#"[{"text":"a","id":1}]"#);

    let output = run(&tmp, &[&["delete", "99"][..], &LOGIN[..]].concat());
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No note with id 99."));
    assert_eq!(stored_notes(&tmp), serde_json::json!([{"text": "a", "id": 1}]));
}

#[test]
fn test_corrupt_notes_fail_without_overwriting() {
    let tmp = TempDir::new().unwrap();
    seed(&tmp, "[{\"text\":");

    let output = run(&tmp, &[&["add", "x"][..], &LOGIN[..]].concat());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a valid note list"));

    let raw = fs::read_to_string(tmp.path().join(".notepad/storage.json")).unwrap();
    let store: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(store["notes"], "[{\"text\":");
}

#[test]
fn test_interactive_session() {
    let tmp = TempDir::new().unwrap();

    let output = run_session(&tmp, "me\n\nme\npw\nadd milk\nadd eggs\nquit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Login").count(), 2);
    assert!(stdout.contains("Note Taking App"));

    let notes = stored_notes(&tmp);
    assert_eq!(notes[0]["text"], "milk");
    assert_eq!(notes[1]["text"], "eggs");
    assert!(notes[1]["id"].as_i64().unwrap() > notes[0]["id"].as_i64().unwrap());

    let first = notes[0]["id"].as_i64().unwrap();
    let output = run_session(&tmp, &format!("me\npw\ndelete {}\n", first));
    assert!(output.status.success());

    let notes = stored_notes(&tmp);
    assert_eq!(notes.as_array().unwrap().len(), 1);
    assert_eq!(notes[0]["text"], "eggs");
}

#[test]
fn test_dir_flag_and_custom_key() {
    let tmp = TempDir::new().unwrap();
    let project = tmp.path().join("project");
    fs::create_dir_all(project.join(".notepad")).unwrap();
    fs::write(project.join(".notepad/config.yaml"), "storage_key: jottings\n").unwrap();

    let dir = project.to_str().unwrap();
    let output = run(&tmp, &[&["--dir", dir, "add", "milk"][..], &LOGIN[..]].concat());
    assert!(output.status.success());

    let raw = fs::read_to_string(project.join(".notepad/storage.json")).unwrap();
    let store: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(store.get("notes").is_none());
    assert!(store["jottings"].as_str().unwrap().contains("milk"));
}

#[test]
fn test_finds_store_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    seed(&tmp, r#"[{"text":"a","id":1}]"#);
    let nested = tmp.path().join("a/b");
    fs::create_dir_all(&nested).unwrap();

    let output = notepad_cmd(&tmp)
        .current_dir(&nested)
        .args([&["list", "--json"][..], &LOGIN[..]].concat())
        .output()
        .unwrap();

    assert!(output.status.success());
    let listed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listed, serde_json::json!([{"text": "a", "id": 1}]));
}
