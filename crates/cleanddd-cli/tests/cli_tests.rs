//! Binary-level tests for the `cleanddd` command.
//!
//! Every command runs in a fresh temp directory with `HOME` and
//! `XDG_CONFIG_HOME` pointed inside it, so no user configuration leaks in.
//! The initializer tests replace `dotnet` with `sh` and a script named
//! `new` in the working directory: `sh new …` runs that script with the
//! remaining arguments.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cleanddd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cleanddd").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

/// Install a stand-in template engine that logs its arguments and exits with `code`.
fn fake_engine(dir: &Path, code: i32) {
    fs::write(
        dir.join("new"),
        format!("echo \"new $@\" >> calls.log\nexit {code}\n"),
    )
    .unwrap();
}

const ALL_FLAGS: [&str; 14] = [
    "--Framework",
    "net9.0",
    "--Database",
    "PostgreSQL",
    "--MessageQueue",
    "Kafka",
    "--UseAspire",
    "false",
    "--IncludeCopilotInstructions",
    "yes",
    "--name",
    "shop-api",
    "--output",
    "out",
];

// ── help & completions ───────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    cleanddd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("coach"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn init_help_shows_template_flags() {
    let dir = TempDir::new().unwrap();
    cleanddd(&dir)
        .args(["init", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--Framework"))
        .stdout(predicate::str::contains("--MessageQueue"))
        .stdout(predicate::str::contains("--skip-template-install"));
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    cleanddd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn bash_completions_are_generated() {
    let dir = TempDir::new().unwrap();
    cleanddd(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cleanddd"));
}

// ── coach ────────────────────────────────────────────────────────────────────

#[test]
fn coach_session_end_to_end() {
    let dir = TempDir::new().unwrap();
    let notes = dir.path().join("notes.md");

    cleanddd(&dir)
        .arg("coach")
        .write_stdin(format!("2\n否\n{}\n", notes.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("模块：聚合与不变式"))
        .stdout(predicate::str::contains("参考答案：否"))
        .stdout(predicate::str::contains("已生成笔记"));

    let report = fs::read_to_string(&notes).unwrap();
    assert!(report.starts_with("# CleanDDD 教练会话笔记\n"));
    assert!(report.contains("总得分: 1/1 (100%)"));
    assert!(report.contains("聚合与不变式 | 1 | 1"));
}

#[test]
fn coach_with_closed_stdin_writes_default_notes() {
    let dir = TempDir::new().unwrap();

    cleanddd(&dir).arg("coach").write_stdin("").assert().success();

    let report = fs::read_to_string(dir.path().join("cleanddd-coach-notes.md")).unwrap();
    assert!(report.contains("总得分: 0/0 (0%)"));
}

#[test]
fn coach_expands_tilde_against_home() {
    let dir = TempDir::new().unwrap();

    cleanddd(&dir)
        .arg("coach")
        .write_stdin("4\nOrderPaid\n~/ddd.md\n")
        .assert()
        .success();

    let report = fs::read_to_string(dir.path().join("ddd.md")).unwrap();
    assert!(report.contains("领域事件与处理器 | 1 | 1"));
}

#[test]
fn coach_survives_non_utf8_answer() {
    let dir = TempDir::new().unwrap();

    cleanddd(&dir)
        .arg("coach")
        .write_stdin(b"2\n\xff\xfe\n~/garbled.md\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("参考答案：否"));

    let report = fs::read_to_string(dir.path().join("garbled.md")).unwrap();
    assert!(report.contains("总得分: 0/1 (0%)"));
    assert!(report.contains("聚合与不变式 | 0 | 1"));
}

// ── init ─────────────────────────────────────────────────────────────────────

#[cfg(unix)]
#[test]
fn init_with_flags_installs_then_scaffolds() {
    let dir = TempDir::new().unwrap();
    fake_engine(dir.path(), 0);

    cleanddd(&dir)
        .env("CLEANDDD__TOOLCHAIN__PROGRAM", "sh")
        .arg("init")
        .args(ALL_FLAGS)
        .arg("--no-confirm")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Ensuring 'NetCorePal.Template' is installed...",
        ))
        .stdout(predicate::str::contains("  project_name: Shop.Api"))
        .stdout(predicate::str::contains("Project created successfully."));

    let calls = fs::read_to_string(dir.path().join("calls.log")).unwrap();
    let calls: Vec<_> = calls.lines().collect();
    assert_eq!(calls[0], "new install NetCorePal.Template");
    assert_eq!(
        calls[1],
        "new netcorepal-web --Framework net9.0 --Database PostgreSQL --MessageQueue Kafka \
         --UseAspire false --IncludeCopilotInstructions true --name Shop.Api --output out"
    );
}

#[cfg(unix)]
#[test]
fn init_declined_prints_preview_and_runs_nothing() {
    let dir = TempDir::new().unwrap();
    fake_engine(dir.path(), 0);

    cleanddd(&dir)
        .env("CLEANDDD__TOOLCHAIN__PROGRAM", "sh")
        .arg("init")
        .args(ALL_FLAGS)
        .arg("--skip-template-install")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command preview:"))
        .stdout(predicate::str::contains("sh new netcorepal-web --Framework net9.0"));

    assert!(!dir.path().join("calls.log").exists());
}

#[cfg(unix)]
#[test]
fn init_interactive_uses_configured_defaults() {
    let dir = TempDir::new().unwrap();
    fake_engine(dir.path(), 0);
    let config = dir.path().join("cleanddd.toml");
    fs::write(
        &config,
        "[init]\ndatabase = \"Sqlite\"\n\n[toolchain]\nprogram = \"sh\"\n",
    )
    .unwrap();

    // Accept every default, then confirm.
    cleanddd(&dir)
        .arg("--config")
        .arg(&config)
        .args(["init", "--skip-template-install", "--name", "demo"])
        .write_stdin("\n\n\n\n\n\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("  [4] Sqlite (default)"))
        .stdout(predicate::str::contains("Run sh new with these options? [Y/n]: "));

    let calls = fs::read_to_string(dir.path().join("calls.log")).unwrap();
    assert!(calls.contains("--Database Sqlite"));
    assert!(calls.contains("--name Demo"));
}
