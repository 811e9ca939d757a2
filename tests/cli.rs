use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

// Runs inside `dir` so a stray raidlogs.toml in the repo is never picked up.
fn raidlogs(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_raidlogs"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run CLI")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "cli exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn cli_writes_summary_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture("noxus-log.md");
    let output_path = dir.path().join("noxus-raid-logs.json");

    let output = raidlogs(
        dir.path(),
        &[
            "--input",
            input.to_str().unwrap(),
            "--output",
            output_path.to_str().unwrap(),
            "--source",
            "data/noxus/log.md",
        ],
    );
    assert_success(&output);

    let written = fs::read_to_string(&output_path).unwrap();
    assert_eq!(written, include_str!("fixtures/noxus-raid-logs.json"));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Unique report URLs: 3"));
}

#[test]
fn cli_prints_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture("noxus-log.md");

    let output = raidlogs(
        dir.path(),
        &[
            "-i",
            input.to_str().unwrap(),
            "--stdout",
            "-g",
            "Waawaa",
            "-r",
            "Icecrown",
            "--infer-dates",
        ],
    );
    assert_success(&output);

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["guild"], "Waawaa");
    assert_eq!(value["raids"], serde_json::json!(["Icecrown"]));
    assert_eq!(value["totalLogs"], 3);
    assert_eq!(value["dateRange"]["from"], "2025-08-30");
    assert_eq!(value["dateRange"]["to"], "2026-01-18");
    assert_eq!(value["source"], input.display().to_string());
}

#[test]
fn cli_fails_on_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("out.json");

    let output = raidlogs(
        dir.path(),
        &["-i", "missing.md", "-o", output_path.to_str().unwrap()],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("failed to read log 'missing.md'"),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(!output_path.exists());
}

#[test]
fn cli_fails_on_unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture("noxus-log.md");

    let output = raidlogs(
        dir.path(),
        &["-i", input.to_str().unwrap(), "-o", "no/such/dir/out.json"],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to write summary"));
}

#[test]
fn cli_init_then_reads_config_from_working_dir() {
    let dir = tempfile::tempdir().unwrap();

    assert_success(&raidlogs(dir.path(), &["--init"]));
    assert!(dir.path().join("raidlogs.toml").exists());
    assert!(!raidlogs(dir.path(), &["--init"]).status.success());

    let input = fixture("noxus-log.md");
    fs::write(
        dir.path().join("raidlogs.toml"),
        format!(
            "input = {:?}\noutput = \"summary.json\"\nguild = \"Titan\"\nraids = [\"Ruby Sanctum\"]\n",
            input.display().to_string()
        ),
    )
    .unwrap();

    assert_success(&raidlogs(dir.path(), &[]));
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("summary.json")).unwrap())
            .unwrap();
    assert_eq!(value["guild"], "Titan");
    assert_eq!(value["raids"], serde_json::json!(["Ruby Sanctum"]));
    assert_eq!(value["totalLogs"], 3);
}
