//! The `package.json` of a scaffolded project.
//!
//! The file is kept as an ordered JSON object so keys the scaffolder does not
//! touch keep their position and content.

use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::path::Path;

use tscaffold_util::errors::ScaffoldError;

use crate::dependency::{DependencyMap, DependencySet, Section};

/// Name of the manifest file in a project directory.
pub const PACKAGE_JSON: &str = "package.json";

/// An ordered, loosely typed `package.json` document.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageJson {
    root: Map<String, Value>,
}

impl PackageJson {
    /// Parse a `package.json` from a string. The top level must be an object.
    pub fn parse(content: &str) -> miette::Result<Self> {
        let value: Value = serde_json::from_str(content).map_err(|e| ScaffoldError::Manifest {
            message: format!("Failed to parse package.json: {e}"),
        })?;
        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(ScaffoldError::Manifest {
                message: "package.json must contain a JSON object".to_string(),
            }
            .into()),
        }
    }

    /// Read and parse `package.json` at `path`.
    pub fn read(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ScaffoldError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse(&content)
    }

    /// Serialize with two-space indentation and a trailing newline.
    pub fn to_pretty_string(&self) -> miette::Result<String> {
        let mut out =
            serde_json::to_string_pretty(&self.root).map_err(|e| ScaffoldError::Manifest {
                message: format!("Failed to serialize package.json: {e}"),
            })?;
        out.push('\n');
        Ok(out)
    }

    pub fn write(&self, path: &Path) -> miette::Result<()> {
        let content = self.to_pretty_string()?;
        std::fs::write(path, content).map_err(|e| {
            ScaffoldError::Manifest {
                message: format!("Failed to write {}: {e}", path.display()),
            }
            .into()
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.root.get("name").and_then(Value::as_str)
    }

    pub fn set_name(&mut self, name: &str) {
        self.root
            .insert("name".to_string(), Value::String(name.to_string()));
    }

    /// The dependency sections currently present, as string maps.
    ///
    /// Non-string versions are skipped with a warning.
    pub fn dependencies(&self) -> DependencySet {
        let mut set = DependencySet::new();
        for section in Section::ALL {
            let Some(entries) = self.root.get(section.key()).and_then(Value::as_object) else {
                continue;
            };
            let map = set.get_mut(section);
            for (name, version) in entries {
                match version.as_str() {
                    Some(v) => {
                        map.insert(name.clone(), v.to_string());
                    }
                    None => tracing::warn!(
                        "ignoring non-string version for '{name}' in {section}"
                    ),
                }
            }
        }
        set
    }

    /// Replace the dependency sections with `deps`, keys sorted for
    /// presentation. Empty sections are written only if they already exist.
    pub fn set_dependencies(&mut self, deps: &DependencySet) {
        for section in Section::ALL {
            let map = deps.get(section);
            if map.is_empty() && !self.root.contains_key(section.key()) {
                continue;
            }
            let sorted: Map<String, Value> = sorted_dependencies(map)
                .into_iter()
                .map(|(name, version)| (name.to_string(), Value::String(version.to_string())))
                .collect();
            self.root
                .insert(section.key().to_string(), Value::Object(sorted));
        }
    }

    /// Set a script, creating the `scripts` object if needed.
    pub fn set_script(&mut self, name: &str, command: &str) {
        let scripts = self
            .root
            .entry("scripts")
            .or_insert_with(|| Value::Object(Map::new()));
        if !scripts.is_object() {
            tracing::warn!("replacing non-object 'scripts' in package.json");
            *scripts = Value::Object(Map::new());
        }
        if let Value::Object(map) = scripts {
            map.insert(name.to_string(), Value::String(command.to_string()));
        }
    }

    pub fn script(&self, name: &str) -> Option<&str> {
        self.root
            .get("scripts")
            .and_then(|s| s.get(name))
            .and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }
}

/// Presentation order of dependency keys: `@`-scoped names first, then the
/// rest, each group alphabetically.
pub fn compare_dependency_names(a: &str, b: &str) -> Ordering {
    let a_scoped = a.starts_with('@');
    let b_scoped = b.starts_with('@');
    b_scoped.cmp(&a_scoped).then_with(|| a.cmp(b))
}

/// Entries of `map` in presentation order.
pub fn sorted_dependencies(map: &DependencyMap) -> Vec<(&str, &str)> {
    let mut entries: Vec<(&str, &str)> = map
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    entries.sort_by(|a, b| compare_dependency_names(a.0, b.0));
    entries
}
