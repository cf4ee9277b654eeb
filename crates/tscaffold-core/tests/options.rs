use tscaffold_core::options::{
    deselect, finalize_options, has_hook_conflict, missing_vitest, select, sort_options,
    unknown_options,
};
use tscaffold_core::template::{OptionCatalog, TemplateRegistry};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_hook_conflict() {
    assert!(has_hook_conflict(&strings(&["husky", "githooks"])));
    assert!(!has_hook_conflict(&strings(&["husky", "eslint"])));
}

#[test]
fn test_missing_vitest() {
    assert!(missing_vitest(&strings(&["reactTestingLibrary"])));
    assert!(!missing_vitest(&strings(&["reactTestingLibrary", "vitest"])));
    assert!(!missing_vitest(&strings(&["eslint"])));
}

#[test]
fn test_select_and_deselect() {
    let mut options = strings(&["eslint", "husky"]);
    select(&mut options, "vitest");
    select(&mut options, "eslint");
    deselect(&mut options, "husky");
    assert_eq!(options, strings(&["eslint", "vitest"]));
}

#[test]
fn test_sort_options_catalog_order() {
    let catalog = OptionCatalog::builtin().unwrap();
    let sorted = sort_options(&strings(&["vitest", "custom", "eslint", "prettier", "eslint"]), &catalog);
    assert_eq!(sorted, strings(&["eslint", "prettier", "vitest", "custom"]));
}

#[test]
fn test_finalize_appends_project_options() {
    let registry = TemplateRegistry::new().unwrap();
    let tmpl = registry.get("react-lib").unwrap();
    let options = finalize_options(&strings(&["vitest", "eslint"]), tmpl, registry.catalog());
    assert_eq!(options, strings(&["eslint", "vitest", "react", "lib"]));
}

#[test]
fn test_unknown_options() {
    let registry = TemplateRegistry::new().unwrap();
    let node = registry.get("node").unwrap();
    let options = strings(&["eslint", "reactTestingLibrary", "bogus"]);
    assert_eq!(unknown_options(&options, node), vec!["reactTestingLibrary", "bogus"]);
}
