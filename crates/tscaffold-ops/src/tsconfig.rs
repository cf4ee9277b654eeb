//! Edits of tsconfig files.
//!
//! tsconfig files are JSON with comments and trailing commas. They are parsed
//! leniently and written back as plain pretty-printed JSON, so comments in an
//! edited file are dropped.

use serde_json::{Map, Value};
use std::path::Path;

use tscaffold_util::errors::ScaffoldError;

fn read(path: &Path) -> miette::Result<Map<String, Value>> {
    let text = std::fs::read_to_string(path).map_err(|e| ScaffoldError::Template {
        message: format!("Failed to read {}: {e}", path.display()),
    })?;
    let value = jsonc_parser::parse_to_serde_value(&text, &Default::default()).map_err(|e| {
        ScaffoldError::Template {
            message: format!("Failed to parse {}: {e}", path.display()),
        }
    })?;
    match value {
        Some(Value::Object(root)) => Ok(root),
        _ => Err(ScaffoldError::Template {
            message: format!("{} must contain a JSON object", path.display()),
        }
        .into()),
    }
}

fn write(path: &Path, root: &Map<String, Value>) -> miette::Result<()> {
    let mut text = serde_json::to_string_pretty(root).map_err(|e| ScaffoldError::Template {
        message: format!("Failed to serialize {}: {e}", path.display()),
    })?;
    text.push('\n');
    std::fs::write(path, text).map_err(ScaffoldError::Io)?;
    Ok(())
}

/// Append `item` to the string array at `key` of `object`, creating the array
/// if needed. Returns `false` if the item was already present.
fn push_unique(
    object: &mut Map<String, Value>,
    key: &str,
    item: &str,
    path: &Path,
) -> miette::Result<bool> {
    let entry = object
        .entry(key)
        .or_insert_with(|| Value::Array(Vec::new()));
    let Value::Array(items) = entry else {
        return Err(ScaffoldError::Template {
            message: format!("'{key}' in {} is not an array", path.display()),
        }
        .into());
    };
    if items.iter().any(|v| v.as_str() == Some(item)) {
        return Ok(false);
    }
    items.push(Value::String(item.to_string()));
    Ok(true)
}

/// Add `file` to the `include` list of the tsconfig at `tsconfig`.
pub fn include_file_in_tsconfig(file: &str, tsconfig: &Path) -> miette::Result<()> {
    let mut root = read(tsconfig)?;
    if push_unique(&mut root, "include", file, tsconfig)? {
        write(tsconfig, &root)?;
        tracing::debug!("included {file} in {}", tsconfig.display());
    }
    Ok(())
}

/// Add `types` to `compilerOptions.types` of the tsconfig at `tsconfig`.
pub fn add_types_to_tsconfig(types: &str, tsconfig: &Path) -> miette::Result<()> {
    let mut root = read(tsconfig)?;
    let compiler_options = root
        .entry("compilerOptions")
        .or_insert_with(|| Value::Object(Map::new()));
    let Value::Object(compiler_options) = compiler_options else {
        return Err(ScaffoldError::Template {
            message: format!("'compilerOptions' in {} is not an object", tsconfig.display()),
        }
        .into());
    };
    if push_unique(compiler_options, "types", types, tsconfig)? {
        write(tsconfig, &root)?;
        tracing::debug!("added {types} types to {}", tsconfig.display());
    }
    Ok(())
}
