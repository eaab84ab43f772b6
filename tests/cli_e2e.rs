use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn nota(home: &Path, cwd: &Path) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("nota");
    cmd.env("NOTA_CONFIG_HOME", home)
        .env_remove("NOTA_LOG")
        .current_dir(cwd);
    cmd
}

struct Workspace {
    _temp: TempDir,
    home: PathBuf,
    root: PathBuf,
}

fn workspace(config: Option<&str>) -> Workspace {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let root = temp.path().join("root");
    fs::create_dir_all(&home).unwrap();
    fs::create_dir_all(&root).unwrap();
    if let Some(config) = config {
        fs::write(home.join("config.json"), config).unwrap();
    }
    Workspace {
        _temp: temp,
        home,
        root,
    }
}

#[test]
fn test_bug_with_empty_config() {
    let ws = workspace(Some("{}"));
    fs::write(ws.home.join("bug.md"), "Bug: $name ($id)").unwrap();

    nota(&ws.home, &ws.root)
        .args(["--bug", "login"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bug_login.md"));

    let note = ws.root.join("bug").join("login").join("bug_login.md");
    assert_eq!(fs::read_to_string(note).unwrap(), "Bug: login (login)");
}

#[test]
fn test_default_directories_with_identifier() {
    let ws = workspace(Some(r#"{"default": {"directories": ["logs"]}}"#));
    fs::write(ws.home.join("feature.md"), "# $name").unwrap();

    nota(&ws.home, &ws.root)
        .args(["--feature", "x", "--identifier=42"])
        .assert()
        .success();

    let note_dir = ws.root.join("feature").join("42");
    assert!(note_dir.join("logs").is_dir());
    assert_eq!(
        fs::read_to_string(note_dir.join("feature_42.md")).unwrap(),
        "# x"
    );
}

#[test]
fn test_first_run_bootstraps_and_creates_defect() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("fresh-home");
    let root = temp.path().join("root");
    fs::create_dir_all(&root).unwrap();

    nota(&home, &root)
        .args(["--defect", "crash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied templates"));

    assert!(home.join("config.json").is_file());
    let note_dir = root.join("defect").join("crash");
    assert!(note_dir.join("logs").is_dir());
    let note = fs::read_to_string(note_dir.join("defect_crash.md")).unwrap();
    assert!(note.starts_with("# Defect crash: crash"));
}

#[test]
fn test_explicit_config_missing() {
    let ws = workspace(None);

    nota(&ws.home, &ws.root)
        .args(["--bug", "login", "--config"])
        .arg(ws.root.join("nope.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"))
        .stderr(predicate::str::contains("nope.json"));

    assert!(!ws.home.join("config.json").exists());
}

#[test]
fn test_missing_template_fails_without_creating() {
    let ws = workspace(Some("{}"));

    nota(&ws.home, &ws.root)
        .args(["--story", "epic", "--directories", "a", "b"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Template file not found"))
        .stderr(predicate::str::contains("story.md"));

    assert!(!ws.root.join("story").exists());
}

#[test]
fn test_root_not_a_directory() {
    let ws = workspace(Some("{}"));
    fs::write(ws.home.join("bug.md"), "").unwrap();
    let file_root = ws.root.join("plain.txt");
    fs::write(&file_root, "").unwrap();

    nota(&ws.home, &ws.root)
        .args(["--bug", "login", "--root"])
        .arg(&file_root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Root must be a directory"));
}

#[test]
fn test_custom_option_with_overrides() {
    let ws = workspace(Some("{}"));
    let template = ws.root.join("custom.tmpl");
    fs::write(&template, "[$option] $name / $id").unwrap();
    let notes = ws.root.join("notes");
    fs::create_dir(&notes).unwrap();

    nota(&ws.home, &ws.root)
        .args(["--option", "spike", "cache layer", "-i", "S-7"])
        .args(["--filename", "$id-$option.md", "--directories", "$id/a", "--directories", "b"])
        .arg("--template")
        .arg(&template)
        .arg("--root")
        .arg(&notes)
        .assert()
        .success();

    let note_dir = notes.join("spike").join("S-7");
    assert!(note_dir.join("S-7").join("a").is_dir());
    assert!(note_dir.join("b").is_dir());
    assert_eq!(
        fs::read_to_string(note_dir.join("S-7-spike.md")).unwrap(),
        "[spike] cache layer / S-7"
    );
}

#[test]
fn test_rerun_is_idempotent() {
    let ws = workspace(Some(r#"{"bug": {"directories": ["logs"], "filename": "$id.md"}}"#));
    fs::write(ws.home.join("bug.md"), "v1 $id").unwrap();

    for _ in 0..2 {
        nota(&ws.home, &ws.root)
            .args(["-b", "login"])
            .assert()
            .success();
    }

    let note_dir = ws.root.join("bug").join("login");
    assert!(note_dir.join("logs").is_dir());
    assert_eq!(fs::read_to_string(note_dir.join("login.md")).unwrap(), "v1 login");
}

#[test]
fn test_list_notes() {
    let ws = workspace(Some("{}"));
    fs::write(ws.home.join("bug.md"), "").unwrap();

    for name in ["zeta", "alpha"] {
        nota(&ws.home, &ws.root)
            .args(["--bug", name])
            .assert()
            .success();
    }

    nota(&ws.home, &ws.root)
        .args(["--bug", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha\nzeta"));
}

#[test]
fn test_list_never_bootstraps() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("fresh-home");
    let root = temp.path().join("root");
    fs::create_dir_all(&root).unwrap();

    nota(&home, &root)
        .args(["--bug", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No bug notes"))
        .stdout(predicate::str::contains("Copied templates").not());

    assert!(!home.exists());
    assert!(!root.join("bug").exists());
}

#[test]
fn test_kind_flags_are_exclusive() {
    let ws = workspace(Some("{}"));

    nota(&ws.home, &ws.root)
        .args(["--bug", "--story", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));

    nota(&ws.home, &ws.root)
        .arg("x")
        .assert()
        .failure();
}
