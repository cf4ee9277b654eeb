use serde_json::Value;
use tempfile::TempDir;
use tscaffold_ops::tsconfig::{add_types_to_tsconfig, include_file_in_tsconfig};

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    /* Type checking */
    "strict": true, // always
  },
  "include": ["src"],
}
"#;

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_include_file_appends() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tsconfig.json");
    std::fs::write(&path, TSCONFIG).unwrap();

    include_file_in_tsconfig("vitest.config.ts", &path).unwrap();
    let json = read_json(&path);
    assert_eq!(json["include"], serde_json::json!(["src", "vitest.config.ts"]));
    assert_eq!(json["compilerOptions"]["strict"], Value::Bool(true));
}

#[test]
fn test_include_file_is_not_duplicated() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tsconfig.json");
    std::fs::write(&path, TSCONFIG).unwrap();

    include_file_in_tsconfig("src", &path).unwrap();
    // unchanged file keeps its comments
    assert_eq!(std::fs::read_to_string(&path).unwrap(), TSCONFIG);
}

#[test]
fn test_add_types_creates_array() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tsconfig.app.json");
    std::fs::write(&path, TSCONFIG).unwrap();

    add_types_to_tsconfig("vitest/globals", &path).unwrap();
    add_types_to_tsconfig("@testing-library/jest-dom", &path).unwrap();
    let json = read_json(&path);
    assert_eq!(
        json["compilerOptions"]["types"],
        serde_json::json!(["vitest/globals", "@testing-library/jest-dom"])
    );
}

#[test]
fn test_add_types_without_compiler_options() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tsconfig.json");
    std::fs::write(&path, r#"{ "include": [] }"#).unwrap();

    add_types_to_tsconfig("vitest/globals", &path).unwrap();
    let json = read_json(&path);
    assert_eq!(json["compilerOptions"]["types"], serde_json::json!(["vitest/globals"]));
}

#[test]
fn test_non_array_include_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tsconfig.json");
    std::fs::write(&path, r#"{ "include": "src" }"#).unwrap();
    assert!(include_file_in_tsconfig("x.ts", &path).is_err());
}

#[test]
fn test_missing_tsconfig_is_an_error() {
    let tmp = TempDir::new().unwrap();
    assert!(add_types_to_tsconfig("x", &tmp.path().join("tsconfig.json")).is_err());
}
