//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn llm_dump() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("llm-dump"))
}

#[test]
fn test_cli_version() {
    let mut cmd = llm_dump();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("llm-dump"));
}

#[test]
fn test_cli_help() {
    let mut cmd = llm_dump();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Process various content sources"))
        .stdout(predicate::str::contains("git"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_git_dump_writes_tree_and_contents() {
    let repo = TempDir::new().expect("temp repo");
    let out = TempDir::new().expect("temp out");
    let root = repo.path();
    fs::create_dir(root.join("src")).expect("mkdir");
    fs::write(root.join("src/main.py"), "print('hello')").expect("write");
    fs::write(root.join("x.pyc"), "compiled").expect("write");
    fs::write(root.join(".gitignore"), "*.pyc\n").expect("write");
    fs::create_dir(root.join(".git")).expect("mkdir");
    fs::write(root.join(".git/HEAD"), "ref: refs/heads/main").expect("write");
    let output = out.path().join("dump.txt");

    let mut cmd = llm_dump();
    cmd.current_dir(out.path());
    cmd.args(["git", root.to_str().expect("utf8"), output.to_str().expect("utf8")]);
    cmd.assert().success().stdout(predicate::str::contains("Wrote 2 files"));

    let content = fs::read_to_string(&output).expect("read dump");
    assert!(content.starts_with("File Tree Structure:\n├── src\n│   └── main.py\n└── .gitignore\n"));
    assert!(content.contains("--- Start of src/main.py ---\nprint('hello')\n--- End of src/main.py ---"));
    assert!(!content.contains("x.pyc"));
    assert!(!content.contains("refs/heads"));
}

#[test]
fn test_git_extra_ignore_flag() {
    let repo = TempDir::new().expect("temp repo");
    let out = TempDir::new().expect("temp out");
    let root = repo.path();
    fs::write(root.join("keep.rs"), "fn keep() {}").expect("write");
    fs::write(root.join("drop.log"), "noise").expect("write");
    let output = out.path().join("dump.txt");

    let mut cmd = llm_dump();
    cmd.current_dir(out.path());
    cmd.args([
        "git",
        root.to_str().expect("utf8"),
        output.to_str().expect("utf8"),
        "--ignore",
        "*.log, *.tmp",
    ]);
    cmd.assert().success();

    let content = fs::read_to_string(&output).expect("read dump");
    assert!(content.contains("keep.rs"));
    assert!(!content.contains("drop.log"));
}

#[test]
fn test_git_rejects_missing_directory() {
    let out = TempDir::new().expect("temp out");
    let missing = out.path().join("does-not-exist");

    let mut cmd = llm_dump();
    cmd.current_dir(out.path());
    cmd.args(["git", missing.to_str().expect("utf8"), "dump.txt"]);
    cmd.assert().failure().stderr(predicate::str::contains("Path is not a directory"));
}

#[test]
fn test_markdown_dump_follows_links() {
    let vault = TempDir::new().expect("temp vault");
    let root = vault.path();
    fs::write(root.join("main.md"), "# Main\n[[second]] [ext](https://example.com)\n")
        .expect("write");
    fs::write(root.join("second.md"), "# Second\n[[third]]\n").expect("write");
    fs::write(root.join("third.md"), "# Third\n").expect("write");
    let output = root.join("out.txt");

    let mut cmd = llm_dump();
    cmd.current_dir(root);
    cmd.args(["markdown", "main", "out.txt", "--max-depth", "1"]);
    cmd.assert().success().stdout(predicate::str::contains("Wrote 2 notes"));

    let content = fs::read_to_string(&output).expect("read dump");
    assert!(content.starts_with("--- Start of main.md ---\n# Main\n"));
    assert!(content.contains("--- Start of second.md ---"));
    assert!(!content.contains("# Third"));
}

#[test]
fn test_markdown_with_base_folder() {
    let vault = TempDir::new().expect("temp vault");
    let root = vault.path();
    fs::create_dir(root.join("daily")).expect("mkdir");
    fs::write(root.join("daily/today.md"), "[[projects/alpha]]").expect("write");
    fs::create_dir(root.join("projects")).expect("mkdir");
    fs::write(root.join("projects/alpha.md"), "# Alpha").expect("write");
    let output = root.join("out.txt");

    let mut cmd = llm_dump();
    cmd.current_dir(root);
    cmd.args([
        "markdown",
        "daily/today.md",
        output.to_str().expect("utf8"),
        "--base-folder",
        root.to_str().expect("utf8"),
    ]);
    cmd.assert().success();

    let content = fs::read_to_string(&output).expect("read dump");
    assert!(content.contains("--- Start of daily/today.md ---"));
    assert!(content.contains("--- Start of projects/alpha.md ---"));
}

#[test]
fn test_markdown_missing_start_fails_without_output() {
    let vault = TempDir::new().expect("temp vault");
    let output = vault.path().join("out.txt");

    let mut cmd = llm_dump();
    cmd.current_dir(vault.path());
    cmd.args(["markdown", "nothing-here", "out.txt"]);
    cmd.assert().failure().stderr(predicate::str::contains("Document not found"));
    assert!(!output.exists());
}

#[test]
fn test_config_file_sets_default_depth() {
    let vault = TempDir::new().expect("temp vault");
    let root = vault.path();
    fs::write(root.join("llm-dump.toml"), "max_depth = 0\n").expect("write config");
    fs::write(root.join("main.md"), "[[other]]").expect("write");
    fs::write(root.join("other.md"), "# Other").expect("write");

    let mut cmd = llm_dump();
    cmd.current_dir(root);
    cmd.args(["markdown", "main.md", "out.txt"]);
    cmd.assert().success().stdout(predicate::str::contains("Wrote 1 notes"));

    // The command line still wins over the file.
    let mut cmd = llm_dump();
    cmd.current_dir(root);
    cmd.args(["markdown", "main.md", "out.txt", "--max-depth", "1"]);
    cmd.assert().success().stdout(predicate::str::contains("Wrote 2 notes"));
}
