use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

struct Run {
    code: Option<i32>,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl Run {
    fn stdout_json(&self) -> Value {
        serde_json::from_slice(&self.stdout).expect("json stdout")
    }

    fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

fn gran_bin() -> String {
    std::env::var("CARGO_BIN_EXE_gran").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("gran.exe");
        } else {
            path.push("gran");
        }
        path.to_string_lossy().into_owned()
    })
}

/// Run the binary with an isolated home directory and state file.
fn run_gran(home: &Path, args: &[&str]) -> Run {
    let output = Command::new(gran_bin())
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("GRAN_STATE_FILE", home.join(".gran_state"))
        .env_remove("RUST_LOG")
        .output()
        .expect("run gran");
    Run {
        code: output.status.code(),
        stdout: output.stdout,
        stderr: output.stderr,
    }
}

fn arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn read_state(home: &Path) -> Value {
    let content = fs::read_to_string(home.join(".gran_state")).expect("state file");
    serde_json::from_str(&content).expect("state json")
}

#[test]
fn first_project_in_empty_directory_is_alpha() {
    let home = TempDir::new().unwrap();
    let proj = home.path().join("proj");

    let run = run_gran(home.path(), &["-i", "foo,bar", "-d", &arg(&proj), "--json"]);
    assert_eq!(run.code, Some(0), "stderr: {}", run.stderr_text());

    let json = run.stdout_json();
    assert_eq!(json["name"], "alpha-foo-bar");
    assert_eq!(json["index"], 0);
    assert_eq!(json["status"], "created");
    assert!(proj.join("alpha-foo-bar").is_dir());

    let state = read_state(home.path());
    let entries = state.as_array().expect("scoped array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["dir"].as_str(), Some(arg(&proj).as_str()));
    assert_eq!(entries[0]["last_index"], 0);
}

#[test]
fn existing_prefix_directory_is_skipped() {
    let home = TempDir::new().unwrap();
    let proj = home.path().join("proj");
    fs::create_dir_all(proj.join("alpha-old")).unwrap();

    let run = run_gran(home.path(), &["-i", "foo,bar", "-d", &arg(&proj), "--json"]);
    assert_eq!(run.code, Some(0), "stderr: {}", run.stderr_text());
    assert_eq!(run.stdout_json()["name"], "beta-foo-bar");
    assert!(proj.join("beta-foo-bar").is_dir());
}

#[test]
fn existing_target_path_exits_with_distinct_code() {
    let home = TempDir::new().unwrap();
    let proj = home.path().join("proj");
    fs::create_dir_all(&proj).unwrap();
    fs::write(proj.join("alpha-foo-bar"), "occupied").unwrap();

    let run = run_gran(home.path(), &["-i", "foo,bar", "-d", &arg(&proj)]);
    assert_eq!(run.code, Some(3));
    assert!(
        run.stderr_text()
            .contains("Warning: directory already exists")
    );
    assert!(!home.path().join(".gran_state").exists());
}

#[test]
fn human_output_and_suffix() {
    let home = TempDir::new().unwrap();
    let proj = home.path().join("library");

    let run = run_gran(
        home.path(),
        &["-i", " reading , , notes ", "-s", " books ", "-d", &arg(&proj)],
    );
    assert_eq!(run.code, Some(0), "stderr: {}", run.stderr_text());
    let stdout = String::from_utf8_lossy(&run.stdout);
    assert!(stdout.contains("Project name: alpha-reading-notes-books"));
    assert!(stdout.contains("Directory created: "));
    assert!(proj.join("alpha-reading-notes-books").is_dir());
}

#[test]
fn consecutive_runs_advance_per_directory() {
    let home = TempDir::new().unwrap();
    let a = home.path().join("a");
    let b = home.path().join("b");

    for _ in 0..2 {
        let run = run_gran(home.path(), &["-i", "x", "-d", &arg(&a)]);
        assert_eq!(run.code, Some(0), "stderr: {}", run.stderr_text());
    }
    let run = run_gran(home.path(), &["-i", "y", "-d", &arg(&b), "--json"]);
    assert_eq!(run.stdout_json()["name"], "alpha-y");

    assert!(a.join("alpha-x").is_dir());
    assert!(a.join("beta-x").is_dir());

    let run = run_gran(home.path(), &["list", "--json"]);
    assert_eq!(run.code, Some(0));
    let list = run.stdout_json();
    let entries = list.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["last_index"], 1);
    assert_eq!(entries[0]["last_prefix"], "beta");
    assert_eq!(entries[1]["last_index"], 0);
}

#[test]
fn dry_run_leaves_no_trace() {
    let home = TempDir::new().unwrap();
    let proj = home.path().join("proj");

    let run = run_gran(home.path(), &["-i", "foo", "-d", &arg(&proj), "-n", "--json"]);
    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout_json()["status"], "dry_run");
    assert!(!proj.exists());
    assert!(!home.path().join(".gran_state").exists());
}

#[test]
fn missing_inputs_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    let run = run_gran(home.path(), &[]);
    assert_eq!(run.code, Some(2));
    assert!(run.stderr_text().contains("--inputs"));
}

#[test]
fn blank_inputs_fail() {
    let home = TempDir::new().unwrap();
    let run = run_gran(home.path(), &["-i", " , ", "-d", &arg(home.path())]);
    assert_eq!(run.code, Some(1));
    assert!(run.stderr_text().contains("No keywords given"));
}

#[test]
fn legacy_state_is_rejected_then_migrated() {
    let home = TempDir::new().unwrap();
    let proj = home.path().join("proj");
    fs::write(home.path().join(".gran_state"), r#"{"last_index": 4}"#).unwrap();

    let run = run_gran(home.path(), &["-i", "foo", "-d", &arg(&proj)]);
    assert_eq!(run.code, Some(1));
    assert!(run.stderr_text().contains("legacy global-counter format"));
    assert!(!proj.exists());

    let run = run_gran(home.path(), &["migrate", "-d", &arg(&proj)]);
    assert_eq!(run.code, Some(0), "stderr: {}", run.stderr_text());

    let state = read_state(home.path());
    assert_eq!(state[0]["dir"].as_str(), Some(arg(&proj).as_str()));
    assert_eq!(state[0]["last_index"], 4);

    let run = run_gran(home.path(), &["migrate", "-d", &arg(&proj)]);
    assert_eq!(run.code, Some(1));
    assert!(run.stderr_text().contains("not in the legacy format"));
}

#[test]
fn unknown_state_shape_is_rejected() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".gran_state"), r#""alpha""#).unwrap();

    let run = run_gran(home.path(), &["list"]);
    assert_eq!(run.code, Some(1));
    assert!(run.stderr_text().contains("unrecognized layout"));
}

#[test]
fn corrupt_state_is_treated_as_empty() {
    let home = TempDir::new().unwrap();
    let proj = home.path().join("proj");
    fs::write(home.path().join(".gran_state"), "[{\"dir\": \"/x\", ").unwrap();

    let run = run_gran(home.path(), &["-i", "foo", "-d", &arg(&proj), "--json"]);
    assert_eq!(run.code, Some(0), "stderr: {}", run.stderr_text());
    assert_eq!(run.stdout_json()["name"], "alpha-foo");
    assert_eq!(read_state(home.path()).as_array().unwrap().len(), 1);
}

#[test]
fn prefix_command_prints_rollover() {
    let home = TempDir::new().unwrap();
    let run = run_gran(home.path(), &["prefix", "23", "24", "600"]);
    assert_eq!(run.code, Some(0));
    assert_eq!(
        String::from_utf8_lossy(&run.stdout),
        "23\tomega\n24\talpha-alpha\n600\talpha-alpha-alpha\n"
    );
}

#[test]
fn config_file_supplies_default_suffix() {
    let home = TempDir::new().unwrap();
    let proj = home.path().join("proj");
    fs::write(home.path().join(".gran.toml"), "suffix = \"lab\"\n").unwrap();

    let run = run_gran(home.path(), &["-i", "foo", "-d", &arg(&proj), "--json"]);
    assert_eq!(run.code, Some(0), "stderr: {}", run.stderr_text());
    assert_eq!(run.stdout_json()["name"], "alpha-foo-lab");
}
