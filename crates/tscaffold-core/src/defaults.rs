//! Default dependencies implied by selected options.
//!
//! The table maps an option name to the packages it pulls in, per section,
//! plus a nested `withOption` table for packages that are only needed when a
//! second option is selected as well (e.g. `eslint-config-prettier` when both
//! `prettier` and `eslint` are chosen). Default entries carry names only;
//! versions come from the [`VersionRegistry`](crate::version_registry::VersionRegistry).

use indexmap::IndexMap;
use serde::Deserialize;
use std::sync::OnceLock;

use tscaffold_util::errors::ScaffoldError;

use crate::dependency::Section;

/// Packages implied by one option, with nested option combinations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DefaultDependencies {
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub dev_dependencies: Vec<String>,
    #[serde(default)]
    pub peer_dependencies: Vec<String>,
    #[serde(default)]
    pub with_option: IndexMap<String, DefaultDependencies>,
}

impl DefaultDependencies {
    /// Package names this node contributes to `section`.
    pub fn packages(&self, section: Section) -> &[String] {
        match section {
            Section::Dependencies => &self.dependencies,
            Section::DevDependencies => &self.dev_dependencies,
            Section::PeerDependencies => &self.peer_dependencies,
        }
    }
}

/// Option name -> default dependencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct DefaultTable(IndexMap<String, DefaultDependencies>);

impl DefaultTable {
    pub fn new(entries: IndexMap<String, DefaultDependencies>) -> Self {
        Self(entries)
    }

    /// Parse a table from TOML where each top-level table is an option.
    pub fn parse_toml(toml_str: &str) -> miette::Result<Self> {
        toml::from_str(toml_str).map_err(|e| {
            ScaffoldError::Config {
                message: format!("Failed to parse default dependency table: {e}"),
            }
            .into()
        })
    }

    /// The built-in table, parsed once from the embedded `data/defaults.toml`.
    pub fn builtin() -> &'static DefaultTable {
        static BUILTIN: OnceLock<DefaultTable> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Self::parse_toml(include_str!("../data/defaults.toml")).unwrap_or_else(|e| {
                tracing::error!("built-in default dependency table is malformed: {e}");
                Self::default()
            })
        })
    }

    pub fn get(&self, option: &str) -> Option<&DefaultDependencies> {
        self.0.get(option)
    }

    pub fn options(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Every package name mentioned anywhere in the table, nested ones included.
    pub fn all_packages(&self) -> Vec<&str> {
        fn collect<'a>(node: &'a DefaultDependencies, out: &mut Vec<&'a str>) {
            for section in Section::ALL {
                out.extend(node.packages(section).iter().map(String::as_str));
            }
            for nested in node.with_option.values() {
                collect(nested, out);
            }
        }
        let mut out = Vec::new();
        for node in self.0.values() {
            collect(node, &mut out);
        }
        out
    }
}

impl FromIterator<(String, DefaultDependencies)> for DefaultTable {
    fn from_iter<I: IntoIterator<Item = (String, DefaultDependencies)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
