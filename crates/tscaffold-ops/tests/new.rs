use std::path::Path;

use tempfile::TempDir;
use tscaffold_core::config::PackageManager;
use tscaffold_core::template::TemplateRegistry;
use tscaffold_ops::ops_new::{
    create_project, inspect_target, prepare_target, NewProjectOptions, TargetAction, TargetState,
};
use tscaffold_resolver::DependencyResolver;

#[test]
fn test_inspect_target_states() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing");
    assert_eq!(inspect_target(&missing).unwrap(), TargetState::Missing);

    let dir = tmp.path().join("dir");
    std::fs::create_dir_all(dir.join(".git")).unwrap();
    assert_eq!(inspect_target(&dir).unwrap(), TargetState::EmptyDir);

    std::fs::write(dir.join("file.txt"), "x").unwrap();
    assert_eq!(inspect_target(&dir).unwrap(), TargetState::NonEmptyDir);

    let file = tmp.path().join("file");
    std::fs::write(&file, "x").unwrap();
    assert_eq!(inspect_target(&file).unwrap(), TargetState::File);
}

#[test]
fn test_prepare_target_clear_keeps_git() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    std::fs::create_dir_all(dir.join(".git")).unwrap();
    std::fs::create_dir_all(dir.join("src")).unwrap();
    std::fs::write(dir.join("a.txt"), "x").unwrap();

    prepare_target(dir, TargetAction::ClearDir).unwrap();
    assert!(dir.join(".git").is_dir());
    assert!(!dir.join("src").exists());
    assert!(!dir.join("a.txt").exists());
}

#[test]
fn test_prepare_target_delete_file() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("my-app");
    std::fs::write(&file, "x").unwrap();
    prepare_target(&file, TargetAction::DeleteFile).unwrap();
    assert!(!file.exists());
}

#[test]
fn test_create_project_unknown_template_dir_fails() {
    let tmp = TempDir::new().unwrap();
    let registry = TemplateRegistry::new().unwrap();
    let tmpl = registry.get("node").unwrap();
    let target = tmp.path().join("app");

    let result = create_project(
        &NewProjectOptions {
            project_name: "app",
            target_dir: &target,
            templates_root: &tmp.path().join("no-templates"),
            template: tmpl,
            options: &[],
            workflows: &[],
            package_manager: PackageManager::Npm,
            install: false,
            git_init: false,
        },
        &DependencyResolver::builtin(),
    );
    assert!(result.is_err());
    assert!(!target.exists());
}

#[test]
fn test_create_project_without_options() {
    let tmp = TempDir::new().unwrap();
    let registry = TemplateRegistry::new().unwrap();
    let tmpl = registry.get("node").unwrap();
    let target = tmp.path().join("plain");
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates");

    let created = create_project(
        &NewProjectOptions {
            project_name: "plain",
            target_dir: &target,
            templates_root: &root,
            template: tmpl,
            options: &[],
            workflows: &[],
            package_manager: PackageManager::Npm,
            install: false,
            git_init: false,
        },
        &DependencyResolver::builtin(),
    )
    .unwrap();

    assert_eq!(created.dir, target);
    assert!(!created.installed);
    assert!(!created.git_initialized);
    assert!(target.join("src").join("index.ts").is_file());
    assert!(!target.join("eslint.config.mjs").exists());
    let pkg = std::fs::read_to_string(target.join("package.json")).unwrap();
    assert!(pkg.contains("\"name\": \"plain\""));
    assert!(!pkg.contains("\"\""));
}
