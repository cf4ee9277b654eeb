//! Built-in project templates and the option catalogue.
//!
//! Template descriptors are TOML files compiled into the binary via
//! `include_str!`. A descriptor names the template directory to copy, the
//! options offered for it, the recommended subset, project options that are
//! always applied, and the dependency overrides the template needs.

use serde::Deserialize;
use std::collections::BTreeMap;

use tscaffold_util::errors::ScaffoldError;

use crate::dependency::DependencyOverrides;

/// Colour used when presenting a template in prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateColor {
    #[default]
    Green,
    Cyan,
    Yellow,
    Magenta,
    Blue,
}

/// Presentation and location data of a template.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateMeta {
    pub name: String,
    pub label: String,
    pub hint: String,
    #[serde(default)]
    pub color: TemplateColor,
    /// Directory under the templates root holding the template files.
    pub dir: String,
}

/// A complete project template parsed from a TOML descriptor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectTemplate {
    pub template: TemplateMeta,
    /// Names of the options offered for this template, in catalogue order.
    #[serde(default)]
    pub options: Vec<String>,
    /// Options pre-selected in the prompt.
    #[serde(default)]
    pub recommended: Vec<String>,
    /// Options that are always in effect for this template (e.g. `react`).
    #[serde(default)]
    pub project_options: Vec<String>,
    #[serde(default)]
    pub overrides: DependencyOverrides,
}

impl ProjectTemplate {
    /// Parse a template from a TOML string.
    pub fn parse_toml(toml_str: &str) -> miette::Result<Self> {
        toml::from_str(toml_str).map_err(|e| {
            ScaffoldError::Template {
                message: format!("Failed to parse project template: {e}"),
            }
            .into()
        })
    }

    pub fn name(&self) -> &str {
        &self.template.name
    }
}

/// A selectable option (or GitHub Actions workflow) with its prompt text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateOption {
    pub name: String,
    pub label: String,
    pub hint: String,
}

/// All options and workflows known to the CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionCatalog {
    #[serde(default, rename = "option")]
    pub options: Vec<TemplateOption>,
    #[serde(default, rename = "workflow")]
    pub workflows: Vec<TemplateOption>,
}

impl OptionCatalog {
    pub fn parse_toml(toml_str: &str) -> miette::Result<Self> {
        toml::from_str(toml_str).map_err(|e| {
            ScaffoldError::Template {
                message: format!("Failed to parse option catalogue: {e}"),
            }
            .into()
        })
    }

    pub fn builtin() -> miette::Result<Self> {
        Self::parse_toml(include_str!("../data/options.toml"))
    }

    pub fn option(&self, name: &str) -> Option<&TemplateOption> {
        self.options.iter().find(|o| o.name == name)
    }

    pub fn workflow(&self, name: &str) -> Option<&TemplateOption> {
        self.workflows.iter().find(|o| o.name == name)
    }
}

/// Registry of all built-in project templates.
pub struct TemplateRegistry {
    templates: BTreeMap<String, ProjectTemplate>,
    catalog: OptionCatalog,
}

impl TemplateRegistry {
    /// Build the registry from the embedded template TOML files.
    ///
    /// Fails if a descriptor is malformed or references an option missing
    /// from the catalogue.
    pub fn new() -> miette::Result<Self> {
        let raw_templates: Vec<(&str, &str)> = vec![
            ("node", include_str!("../templates/node.toml")),
            ("react", include_str!("../templates/react.toml")),
            ("react-lib", include_str!("../templates/react-lib.toml")),
        ];

        let catalog = OptionCatalog::builtin()?;
        let mut templates = BTreeMap::new();
        for (name, src) in raw_templates {
            let tmpl = ProjectTemplate::parse_toml(src).map_err(|e| ScaffoldError::Template {
                message: format!("Built-in template '{name}' is malformed: {e}"),
            })?;
            if let Some(unknown) = tmpl
                .options
                .iter()
                .chain(&tmpl.recommended)
                .find(|o| catalog.option(o).is_none())
            {
                return Err(ScaffoldError::Template {
                    message: format!("Built-in template '{name}' offers unknown option '{unknown}'"),
                }
                .into());
            }
            templates.insert(name.to_string(), tmpl);
        }

        Ok(Self { templates, catalog })
    }

    /// Look up a template by name.
    pub fn get(&self, name: &str) -> Option<&ProjectTemplate> {
        self.templates.get(name)
    }

    /// All templates in presentation order.
    pub fn templates(&self) -> Vec<&ProjectTemplate> {
        let order = ["node", "react", "react-lib"];
        let mut all: Vec<&ProjectTemplate> = self.templates.values().collect();
        all.sort_by_key(|t| {
            order
                .iter()
                .position(|n| *n == t.name())
                .unwrap_or(order.len())
        });
        all
    }

    /// Return all valid template names (for CLI validation).
    pub fn names(&self) -> Vec<&str> {
        self.templates().into_iter().map(|t| t.name()).collect()
    }

    pub fn catalog(&self) -> &OptionCatalog {
        &self.catalog
    }

    /// Option choices offered for `template`, in the template's order.
    pub fn choices(&self, template: &ProjectTemplate) -> Vec<&TemplateOption> {
        template
            .options
            .iter()
            .filter_map(|name| self.catalog.option(name))
            .collect()
    }
}
