use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_defaults_without_arguments() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.md"), "hello").unwrap();
    fs::write(temp_dir.path().join("b.ts"), "typed").unwrap();

    Command::cargo_bin("combinecat")
        .unwrap()
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("combined_file.txt"))
        .stdout(predicate::str::contains(
            "Extensions used: .js, .html, .md, .css, .cjs",
        ));

    let written = fs::read_to_string(temp_dir.path().join("combined_file.txt")).unwrap();
    assert!(written.contains("--- Start of a.md ---"));
    assert!(!written.contains("typed"));
}

#[test]
fn test_arguments_replace_default_extensions() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.md"), "markdown").unwrap();
    fs::write(temp_dir.path().join("b.ts"), "typed").unwrap();
    fs::write(temp_dir.path().join("c.js"), "script").unwrap();

    Command::cargo_bin("combinecat")
        .unwrap()
        .current_dir(temp_dir.path())
        .args(["js", "ts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Extensions used: .js, .ts"));

    let written = fs::read_to_string(temp_dir.path().join("combined_file.txt")).unwrap();
    assert!(written.contains("script"));
    assert!(written.contains("typed"));
    assert!(!written.contains("markdown"));
}

#[test]
fn test_output_flag_and_json_summary() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("src")).unwrap();
    fs::write(temp_dir.path().join("src/app.js"), "app").unwrap();

    Command::cargo_bin("combinecat")
        .unwrap()
        .current_dir(temp_dir.path())
        .args(["--json", "-o", "all.txt", "js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"path\": \"src/app.js\""));

    assert!(temp_dir.path().join("all.txt").exists());
}

#[test]
fn test_extra_ignore_names() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("keep.js"), "keep").unwrap();
    fs::write(temp_dir.path().join("config.js"), "secret").unwrap();

    Command::cargo_bin("combinecat")
        .unwrap()
        .current_dir(temp_dir.path())
        .args(["-I", "config.js", "js"])
        .assert()
        .success();

    let written = fs::read_to_string(temp_dir.path().join("combined_file.txt")).unwrap();
    assert!(written.contains("keep"));
    assert!(!written.contains("secret"));
}

#[test]
fn test_unreadable_file_fails_the_run() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("bad.md"), [0xc3, 0x28]).unwrap();

    Command::cargo_bin("combinecat")
        .unwrap()
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("bad.md"));
}

#[test]
fn test_empty_extension_argument_rejected() {
    let temp_dir = TempDir::new().unwrap();

    Command::cargo_bin("combinecat")
        .unwrap()
        .current_dir(temp_dir.path())
        .arg(".")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid extension"));
}

#[test]
fn test_no_default_ignores() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.js"), "script").unwrap();
    fs::write(temp_dir.path().join("package.json"), "{}").unwrap();

    Command::cargo_bin("combinecat")
        .unwrap()
        .current_dir(temp_dir.path())
        .args(["--no-default-ignores", "js", "json"])
        .assert()
        .success();

    let written = fs::read_to_string(temp_dir.path().join("combined_file.txt")).unwrap();
    assert!(written.ends_with("\n--- Processed Files ---\na.js\npackage.json\n"));
}

#[test]
fn test_root_flag() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("project");
    fs::create_dir_all(project.join("src")).unwrap();
    fs::write(project.join("src/app.js"), "app").unwrap();
    fs::write(project.join("main.js"), "main").unwrap();
    fs::write(temp_dir.path().join("outside.js"), "outside").unwrap();

    Command::cargo_bin("combinecat")
        .unwrap()
        .current_dir(temp_dir.path())
        .args(["-C", "project", "js"])
        .assert()
        .success();

    assert!(!temp_dir.path().join("combined_file.txt").exists());
    let written = fs::read_to_string(project.join("combined_file.txt")).unwrap();
    assert!(written.ends_with("\n--- Processed Files ---\nsrc/app.js\nmain.js\n"));
    assert!(!written.contains("outside"));
}

#[test]
fn test_source_dir_flag() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("lib/core")).unwrap();
    fs::write(temp_dir.path().join("lib/core/mod.js"), "core").unwrap();
    fs::create_dir(temp_dir.path().join("src")).unwrap();
    fs::write(temp_dir.path().join("src/skip.js"), "skip").unwrap();

    Command::cargo_bin("combinecat")
        .unwrap()
        .current_dir(temp_dir.path())
        .args(["--source-dir", "lib", "js"])
        .assert()
        .success();

    let written = fs::read_to_string(temp_dir.path().join("combined_file.txt")).unwrap();
    assert!(written.ends_with("\n--- Processed Files ---\nlib/core/mod.js\n"));
}
