//! Per-option configuration of a freshly copied project.
//!
//! Each selected option may have a configurator that copies or renders
//! configuration files into the project. Options whose `template.config.json`
//! entry names a script are dispatched through [`ConfigureScript`] instead.

mod eslint;
mod files;
mod github_actions;
mod hooks;
mod readme;
mod vite;
mod vitest;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tscaffold_core::config::PackageManager;
use tscaffold_core::file_config::TemplateFileConfig;
use tscaffold_util::errors::ScaffoldError;

pub use github_actions::configure_workflows;
pub use readme::configure_readme;

/// Name of the directory holding configuration file templates, under the
/// templates root.
pub const CONFIG_TEMPLATES_DIR: &str = "configFileTemplates";

/// Everything a configurator needs to know about the project being set up.
pub struct ConfigureContext<'a> {
    pub project_name: &'a str,
    pub target_dir: &'a Path,
    /// `configFileTemplates/` under the templates root.
    pub config_templates_dir: PathBuf,
    /// Final option list: selected options followed by project options.
    pub options: &'a [String],
    pub package_manager: PackageManager,
    pub file_config: &'a TemplateFileConfig,
}

impl ConfigureContext<'_> {
    pub fn has_option(&self, name: &str) -> bool {
        self.options.iter().any(|o| o == name)
    }

    /// Path of a file in the configuration templates directory.
    pub fn config_template(&self, file: &str) -> PathBuf {
        self.config_templates_dir.join(file)
    }

    /// Path of the configuration template bound to `key` in `template.config.json`.
    pub fn bound_template(&self, key: &str) -> miette::Result<PathBuf> {
        Ok(self.config_template(self.file_config.template_for(key)?))
    }

    /// Copy a file from the configuration templates directory into the
    /// project, optionally under a different name.
    pub fn copy_config_file(&self, file: &str, dest_name: Option<&str>) -> miette::Result<()> {
        let src = self.config_template(file);
        let dest = self.target_dir.join(dest_name.unwrap_or(file));
        std::fs::copy(&src, &dest).map_err(|e| ScaffoldError::Template {
            message: format!("Failed to copy {}: {e}", src.display()),
        })?;
        tracing::debug!("copied {} -> {}", src.display(), dest.display());
        Ok(())
    }
}

/// Configure scripts that can be named in `template.config.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigureScript {
    VitestNode,
    VitestReact,
    ViteReact,
}

impl ConfigureScript {
    pub fn name(self) -> &'static str {
        match self {
            ConfigureScript::VitestNode => "configureVitest.node",
            ConfigureScript::VitestReact => "configureVitest.react",
            ConfigureScript::ViteReact => "configureVite.react",
        }
    }

    pub fn run(self, ctx: &ConfigureContext<'_>, key: &str) -> miette::Result<()> {
        tracing::debug!("running configure script {self} for '{key}'");
        match self {
            ConfigureScript::VitestNode => vitest::configure_node(ctx, key),
            ConfigureScript::VitestReact => vitest::configure_react(ctx, key),
            ConfigureScript::ViteReact => vite::configure_react(ctx),
        }
    }
}

impl fmt::Display for ConfigureScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigureScript {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "configureVitest.node" => Ok(ConfigureScript::VitestNode),
            "configureVitest.react" => Ok(ConfigureScript::VitestReact),
            "configureVite.react" => Ok(ConfigureScript::ViteReact),
            other => Err(ScaffoldError::Template {
                message: format!("Unknown configure script '{other}'"),
            }),
        }
    }
}

/// Run the configurator of a single option.
pub fn configure_option(ctx: &ConfigureContext<'_>, option: &str) -> miette::Result<()> {
    match option {
        "eslint" => eslint::configure(ctx),
        "prettier" => files::configure_prettier(ctx),
        "editorconfig" => files::configure_editorconfig(ctx),
        "husky" => hooks::configure_husky(ctx),
        "githooks" => hooks::configure_githooks(ctx),
        "vitest" => run_bound_script(ctx, option),
        "react" => match ctx.file_config.script_for(option) {
            Some(_) => run_bound_script(ctx, option),
            None => ConfigureScript::ViteReact.run(ctx, option),
        },
        other => {
            tracing::debug!("no configurator for option '{other}'");
            Ok(())
        }
    }
}

/// Run every selected option's configurator, in option order.
pub fn configure_options(ctx: &ConfigureContext<'_>) -> miette::Result<()> {
    for option in ctx.options {
        configure_option(ctx, option)?;
    }
    Ok(())
}

fn run_bound_script(ctx: &ConfigureContext<'_>, key: &str) -> miette::Result<()> {
    match ctx.file_config.script_for(key) {
        Some(name) => name.parse::<ConfigureScript>()?.run(ctx, key),
        None => {
            tracing::warn!("no configure script for '{key}' in template.config.json");
            Ok(())
        }
    }
}
