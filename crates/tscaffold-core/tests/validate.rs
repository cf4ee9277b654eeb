use std::path::{Path, PathBuf};
use tscaffold_core::validate::{
    is_valid_package_name, project_name_from_path, resolve_target_dir, validate_package_name,
};

#[test]
fn test_valid_package_names() {
    for name in ["my-app", "@scope/pkg", "a.b_c~d", "x1"] {
        assert!(is_valid_package_name(name), "{name} should be valid");
    }
}

#[test]
fn test_invalid_package_names() {
    for name in ["", "My-App", ".hidden", "_under", "has space", "@scope", "a/b"] {
        assert!(!is_valid_package_name(name), "{name} should be invalid");
    }
    assert!(validate_package_name("Bad").is_err());
    assert!(validate_package_name(&"a".repeat(215)).is_err());
}

#[test]
fn test_resolve_relative_target() {
    let cwd = Path::new("/home/user");
    assert_eq!(
        resolve_target_dir("my-app", cwd).unwrap(),
        PathBuf::from("/home/user/my-app")
    );
    assert_eq!(
        resolve_target_dir("./a/../b/", cwd).unwrap(),
        PathBuf::from("/home/user/b")
    );
    assert_eq!(resolve_target_dir(".", cwd).unwrap(), PathBuf::from("/home/user"));
}

#[test]
fn test_resolve_rejects_empty_and_root() {
    let cwd = Path::new("/home/user");
    assert!(resolve_target_dir("  ", cwd).is_err());
    assert!(resolve_target_dir("/", cwd).is_err());
    assert!(resolve_target_dir("../..", cwd).is_err());
}

#[test]
fn test_resolve_rejects_bad_components() {
    let cwd = Path::new("/tmp");
    assert!(resolve_target_dir("name.", cwd).is_err());
    assert!(resolve_target_dir("trailing /x", cwd).is_err());
    assert!(resolve_target_dir("bell\u{7}", cwd).is_err());
}

#[test]
fn test_project_name_from_path() {
    assert_eq!(
        project_name_from_path(Path::new("/home/user/my-app")).as_deref(),
        Some("my-app")
    );
    assert_eq!(project_name_from_path(Path::new("/")), None);
}
