use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn templates_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates")
}

/// A scratch HOME with git init disabled, plus a working directory.
fn sandbox() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let home = tmp.path().join("home");
    fs::create_dir_all(home.join(".tscaffold")).unwrap();
    fs::write(home.join(".tscaffold/config.toml"), "git-init = false\n").unwrap();
    let work = tmp.path().join("work");
    fs::create_dir_all(&work).unwrap();
    (tmp, work)
}

#[allow(deprecated)]
fn create_project_cmd(tmp: &TempDir, work: &Path) -> Command {
    let mut cmd = Command::cargo_bin("create-project").unwrap();
    cmd.current_dir(work)
        .env("HOME", tmp.path().join("home"))
        .env("TSCAFFOLD_TEMPLATES_DIR", templates_root())
        .env_remove("RUST_LOG");
    cmd
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_new_node_project() {
    let (tmp, work) = sandbox();

    create_project_cmd(&tmp, &work)
        .args(["my-app", "--yes", "-t", "node", "--options", "eslint,prettier"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Created"))
        .stdout(predicate::str::contains("cd my-app"))
        .stdout(predicate::str::contains("npm install"));

    let dir = work.join("my-app");
    let pkg = read_json(&dir.join("package.json"));
    assert_eq!(pkg["name"], "my-app");
    assert!(pkg["devDependencies"]["eslint-config-prettier"].is_string());
    assert_eq!(pkg["scripts"]["lint"], "eslint .");
    assert!(dir.join("eslint.config.mjs").is_file());
    assert!(dir.join(".prettierrc.json").is_file());
    assert!(!dir.join("template.config.json").exists());
    assert!(!dir.join(".git").exists());
}

#[test]
fn test_new_uses_recommended_options_by_default() {
    let (tmp, work) = sandbox();

    create_project_cmd(&tmp, &work)
        .args(["app", "-y", "--template", "react"])
        .assert()
        .success();

    let pkg = read_json(&work.join("app/package.json"));
    assert!(pkg["devDependencies"]["eslint"].is_string());
    assert!(work.join("app/vite.config.ts").is_file());
}

#[test]
fn test_new_with_name_and_pnpm() {
    let (tmp, work) = sandbox();

    create_project_cmd(&tmp, &work)
        .args([
            "lib-dir",
            "-y",
            "-t",
            "react-lib",
            "--name",
            "@acme/ui",
            "--options",
            "githubActions",
            "--workflows",
            "ci",
            "--package-manager",
            "pnpm",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("pnpm run build"));

    let dir = work.join("lib-dir");
    let pkg = read_json(&dir.join("package.json"));
    assert_eq!(pkg["name"], "@acme/ui");
    let ci = fs::read_to_string(dir.join(".github/workflows/ci.yaml")).unwrap();
    assert!(ci.contains("pnpm install"));
}

#[test]
fn test_testing_library_adds_vitest() {
    let (tmp, work) = sandbox();

    create_project_cmd(&tmp, &work)
        .args(["rtl", "-y", "-t", "react", "--options", "reactTestingLibrary"])
        .assert()
        .success()
        .stderr(predicate::str::contains("vitest"));

    let pkg = read_json(&work.join("rtl/package.json"));
    assert!(pkg["devDependencies"]["vitest"].is_string());
    assert_eq!(pkg["scripts"]["test"], "vitest run");
    assert!(work.join("rtl/vitest.setup.ts").is_file());
}

#[test]
fn test_hook_conflict_fails_non_interactively() {
    let (tmp, work) = sandbox();

    create_project_cmd(&tmp, &work)
        .args(["hooks", "-y", "-t", "node", "--options", "husky,githooks"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot both be selected"));

    assert!(!work.join("hooks").exists());
}

#[test]
fn test_unknown_template_fails() {
    let (tmp, work) = sandbox();

    create_project_cmd(&tmp, &work)
        .args(["app", "-y", "-t", "vue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown template 'vue'"));
}

#[test]
fn test_unknown_option_fails() {
    let (tmp, work) = sandbox();

    create_project_cmd(&tmp, &work)
        .args(["app", "-y", "-t", "node", "--options", "reactTestingLibrary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown option"));
}

#[test]
fn test_invalid_package_name_fails() {
    let (tmp, work) = sandbox();

    create_project_cmd(&tmp, &work)
        .args(["My App", "-y", "-t", "node"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid npm package name"));
}

#[test]
fn test_non_empty_target_requires_overwrite() {
    let (tmp, work) = sandbox();
    let dir = work.join("busy");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("old.txt"), "old").unwrap();

    create_project_cmd(&tmp, &work)
        .args(["busy", "-y", "-t", "node", "--options", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--overwrite"));
    assert!(dir.join("old.txt").is_file());

    create_project_cmd(&tmp, &work)
        .args(["busy", "-y", "-t", "node", "--options", "", "--overwrite"])
        .assert()
        .success();
    assert!(!dir.join("old.txt").exists());
    assert!(dir.join("package.json").is_file());
}

#[test]
fn test_file_target_requires_overwrite() {
    let (tmp, work) = sandbox();
    fs::write(work.join("taken"), "x").unwrap();

    create_project_cmd(&tmp, &work)
        .args(["taken", "-y", "-t", "node"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a file"));

    create_project_cmd(&tmp, &work)
        .args(["taken", "-y", "-t", "node", "--overwrite"])
        .assert()
        .success();
    assert!(work.join("taken").is_dir());
}
