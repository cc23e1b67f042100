//! End-to-end tests of the command-line interface.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hacktyper(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hacktyper").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("HACKTYPER_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    hacktyper(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_prints_version() {
    let home = TempDir::new().unwrap();
    hacktyper(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let home = TempDir::new().unwrap();
    hacktyper(&home).arg("explode").assert().code(2);
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    hacktyper(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hacktyper"));
}

#[cfg(target_os = "linux")]
#[test]
fn config_path_honours_xdg() {
    let home = TempDir::new().unwrap();
    let expected = home.path().join("hacktyper").join("config.toml");
    hacktyper(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[cfg(target_os = "linux")]
#[test]
fn config_show_prints_defaults() {
    let home = TempDir::new().unwrap();
    hacktyper(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[typewriter]"))
        .stdout(predicate::str::contains("step_size = 2"));
}

#[cfg(target_os = "linux")]
#[test]
fn config_init_force_writes_file() {
    let home = TempDir::new().unwrap();
    hacktyper(&home)
        .args(["config", "init", "--force"])
        .assert()
        .success();

    let written = home.path().join("hacktyper").join("config.toml");
    let content = std::fs::read_to_string(written).unwrap();
    assert!(content.contains("threshold = 10"));
}

#[cfg(target_os = "linux")]
#[test]
fn config_init_keeps_existing_file_without_tty() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("hacktyper").join("config.toml");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[game]\nthreshold = 3\n").unwrap();

    hacktyper(&home)
        .args(["config", "init"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes made"));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "[game]\nthreshold = 3\n"
    );
}

#[cfg(target_os = "linux")]
#[test]
fn broken_config_exits_with_error() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("hacktyper").join("config.toml");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[typewriter]\nstep_size = 0\n").unwrap();

    hacktyper(&home)
        .args(["config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("step_size"));
}

#[test]
fn run_rejects_missing_source_file() {
    let home = TempDir::new().unwrap();
    hacktyper(&home)
        .args(["run", "--mute", "--source", "/nonexistent/hack.c"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("hack.c"));
}
