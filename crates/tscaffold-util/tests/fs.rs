use tempfile::TempDir;
use tscaffold_util::fs::{clear_dir, copy_dir_all, ensure_dir, is_empty_dir};

#[test]
fn test_ensure_dir_creates_nested() {
    let tmp = TempDir::new().unwrap();
    let deep = tmp.path().join(".github").join("workflows");
    assert!(!deep.exists());
    ensure_dir(&deep).unwrap();
    assert!(deep.is_dir());
}

#[test]
fn test_ensure_dir_idempotent() {
    let tmp = TempDir::new().unwrap();
    ensure_dir(tmp.path()).unwrap();
    assert!(tmp.path().is_dir());
}

#[test]
fn test_copy_dir_all_copies_nested_tree() {
    let src = TempDir::new().unwrap();
    std::fs::create_dir_all(src.path().join("src")).unwrap();
    std::fs::write(src.path().join("package.json"), "{}").unwrap();
    std::fs::write(src.path().join("src/index.ts"), "export {};").unwrap();

    let dst = TempDir::new().unwrap();
    let target = dst.path().join("my-project");
    copy_dir_all(src.path(), &target).unwrap();

    assert_eq!(std::fs::read_to_string(target.join("package.json")).unwrap(), "{}");
    assert_eq!(
        std::fs::read_to_string(target.join("src/index.ts")).unwrap(),
        "export {};"
    );
}

#[test]
fn test_is_empty_dir_ignores_git() {
    let tmp = TempDir::new().unwrap();
    assert!(is_empty_dir(tmp.path()).unwrap());

    std::fs::create_dir(tmp.path().join(".git")).unwrap();
    assert!(is_empty_dir(tmp.path()).unwrap());

    std::fs::write(tmp.path().join("README.md"), "# hi").unwrap();
    assert!(!is_empty_dir(tmp.path()).unwrap());
}

#[test]
fn test_clear_dir_keeps_git() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir_all(tmp.path().join(".git/objects")).unwrap();
    std::fs::create_dir_all(tmp.path().join("node_modules/x")).unwrap();
    std::fs::write(tmp.path().join("package.json"), "{}").unwrap();

    clear_dir(tmp.path()).unwrap();

    assert!(tmp.path().join(".git/objects").is_dir());
    assert!(!tmp.path().join("node_modules").exists());
    assert!(!tmp.path().join("package.json").exists());
}

#[test]
fn test_clear_dir_missing_is_ok() {
    let tmp = TempDir::new().unwrap();
    clear_dir(&tmp.path().join("nope")).unwrap();
}

#[cfg(unix)]
#[test]
fn test_make_executable_sets_mode() {
    use std::os::unix::fs::PermissionsExt as _;

    let tmp = TempDir::new().unwrap();
    let hook = tmp.path().join("pre-commit");
    std::fs::write(&hook, "#!/bin/sh\n").unwrap();
    tscaffold_util::fs::make_executable(&hook).unwrap();

    let mode = std::fs::metadata(&hook).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
}
