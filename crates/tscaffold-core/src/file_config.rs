//! `template.config.json`: per-template configuration file bindings.
//!
//! Each key names a configurable thing (an option, `readme`, ...). The value
//! is either the file name of a configuration file template, or an object
//! that may also name a configure script and carry extra arguments for it:
//!
//! ```json
//! {
//!   "eslint": "eslint.config.react.hbs",
//!   "vitest": {
//!     "script": "configureVitest.react",
//!     "other": { "globalsTsconfig": "tsconfig.app.json" }
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

use tscaffold_util::errors::ScaffoldError;

/// File name of the binding file inside a template directory.
pub const TEMPLATE_CONFIG_FILE: &str = "template.config.json";

/// One binding from `template.config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FileConfigEntry {
    Name(String),
    Detailed {
        #[serde(default)]
        template: Option<String>,
        #[serde(default)]
        script: Option<String>,
        #[serde(default)]
        other: Option<serde_json::Value>,
    },
}

impl FileConfigEntry {
    pub fn template(&self) -> Option<&str> {
        match self {
            FileConfigEntry::Name(name) => Some(name),
            FileConfigEntry::Detailed { template, .. } => template.as_deref(),
        }
    }

    pub fn script(&self) -> Option<&str> {
        match self {
            FileConfigEntry::Name(_) => None,
            FileConfigEntry::Detailed { script, .. } => script.as_deref(),
        }
    }

    pub fn other(&self) -> Option<&serde_json::Value> {
        match self {
            FileConfigEntry::Name(_) => None,
            FileConfigEntry::Detailed { other, .. } => other.as_ref(),
        }
    }
}

/// Extra arguments read by the Vitest configure scripts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitestArgs {
    #[serde(default)]
    pub globals_tsconfig: Option<String>,
    #[serde(default)]
    pub test_setup_tsconfig: Option<String>,
    #[serde(default)]
    pub test_setup_file_name: Option<String>,
}

/// Parsed `template.config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TemplateFileConfig(IndexMap<String, FileConfigEntry>);

impl TemplateFileConfig {
    pub fn parse(content: &str) -> miette::Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            ScaffoldError::Template {
                message: format!("Failed to parse {TEMPLATE_CONFIG_FILE}: {e}"),
            }
            .into()
        })
    }

    /// Read the binding file in `dir` and delete it, since it must not end
    /// up in the generated project. A missing file yields an empty config.
    pub fn take_from(dir: &Path) -> miette::Result<Self> {
        let path = dir.join(TEMPLATE_CONFIG_FILE);
        if !path.is_file() {
            tracing::debug!("no {TEMPLATE_CONFIG_FILE} in {}", dir.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(ScaffoldError::Io)?;
        let config = Self::parse(&content)?;
        std::fs::remove_file(&path).map_err(ScaffoldError::Io)?;
        Ok(config)
    }

    pub fn get(&self, key: &str) -> Option<&FileConfigEntry> {
        self.0.get(key)
    }

    /// The template file bound to `key`, or a `Template` error.
    pub fn template_for(&self, key: &str) -> miette::Result<&str> {
        self.get(key).and_then(FileConfigEntry::template).ok_or_else(|| {
            ScaffoldError::Template {
                message: format!("No configuration file template for '{key}' in {TEMPLATE_CONFIG_FILE}"),
            }
            .into()
        })
    }

    /// The configure script bound to `key`, if any.
    pub fn script_for(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FileConfigEntry::script)
    }

    /// Deserialize the `other` arguments bound to `key`.
    pub fn args_for<T>(&self, key: &str) -> miette::Result<T>
    where
        T: Default + serde::de::DeserializeOwned,
    {
        match self.get(key).and_then(FileConfigEntry::other) {
            Some(other) => serde_json::from_value(other.clone()).map_err(|e| {
                ScaffoldError::Template {
                    message: format!("Invalid 'other' arguments for '{key}': {e}"),
                }
                .into()
            }),
            None => Ok(T::default()),
        }
    }
}
