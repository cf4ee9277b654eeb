use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;
use tscaffold_util::errors::ScaffoldError;

/// Latest known version of each package, used when a reference has none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct VersionRegistry(BTreeMap<String, String>);

impl VersionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat `name = "version"` TOML table.
    pub fn parse_toml(toml_str: &str) -> miette::Result<Self> {
        toml::from_str(toml_str).map_err(|e| {
            ScaffoldError::Config {
                message: format!("Failed to parse version registry: {e}"),
            }
            .into()
        })
    }

    /// The built-in registry, parsed once from the embedded `data/versions.toml`.
    pub fn builtin() -> &'static VersionRegistry {
        static BUILTIN: OnceLock<VersionRegistry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Self::parse_toml(include_str!("../data/versions.toml")).unwrap_or_else(|e| {
                tracing::error!("built-in version registry is malformed: {e}");
                Self::default()
            })
        })
    }

    /// Look up a version. Empty registry values count as missing.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn insert(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.0.insert(name.into(), version.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VersionRegistry {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
