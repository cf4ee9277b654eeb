//! Operation: turn a freshly copied template into the requested project.

use std::path::Path;

use tscaffold_core::config::PackageManager;
use tscaffold_core::file_config::TemplateFileConfig;
use tscaffold_core::manifest::{PackageJson, PACKAGE_JSON};
use tscaffold_core::options::GITHUB_ACTIONS;
use tscaffold_core::template::ProjectTemplate;
use tscaffold_resolver::DependencyResolver;
use tscaffold_util::errors::ScaffoldError;

use crate::configure::{self, ConfigureContext, CONFIG_TEMPLATES_DIR};

/// Inputs for [`update_created_project`].
pub struct UpdateOptions<'a> {
    pub project_name: &'a str,
    pub target_dir: &'a Path,
    /// Root holding `template-*/` and `configFileTemplates/`.
    pub templates_root: &'a Path,
    pub template: &'a ProjectTemplate,
    /// Final option list, project options included.
    pub options: &'a [String],
    pub workflows: &'a [String],
    pub package_manager: PackageManager,
}

/// Scripts added to `package.json` for each option that needs them.
fn option_scripts(option: &str) -> &'static [(&'static str, &'static str)] {
    match option {
        "eslint" => &[("lint", "eslint .")],
        "vitest" => &[
            ("test", "vitest run"),
            ("test:watch", "vitest watch"),
            ("test:coverage", "vitest run --coverage"),
            ("test:coverage:watch", "vitest watch --coverage"),
        ],
        "husky" => &[("prepare", "husky")],
        "githooks" => &[("prepare", "git config core.hooksPath git-hooks")],
        _ => &[],
    }
}

/// Set the project name, merge dependencies and add option scripts.
///
/// Fails without touching anything if a dependency is left without a version.
pub fn update_package_json(
    pkg: &mut PackageJson,
    project_name: &str,
    options: &[String],
    template: &ProjectTemplate,
    resolver: &DependencyResolver<'_>,
) -> miette::Result<()> {
    let resolution = resolver.resolve(options, &pkg.dependencies(), Some(&template.overrides));
    if !resolution.unresolved.is_empty() {
        return Err(ScaffoldError::Resolution {
            message: resolution.unresolved.to_string().trim_end().to_string(),
        }
        .into());
    }

    pkg.set_name(project_name);
    pkg.set_dependencies(&resolution.dependencies);
    for option in options {
        for (name, command) in option_scripts(option) {
            pkg.set_script(name, command);
        }
    }
    tracing::debug!(
        "package.json: {} dependencies across all sections",
        resolution.dependencies.len()
    );
    Ok(())
}

/// Update the copied project in `opts.target_dir`: rewrite `package.json`,
/// apply option configurators, add workflows and render the README.
pub fn update_created_project(
    opts: &UpdateOptions<'_>,
    resolver: &DependencyResolver<'_>,
) -> miette::Result<()> {
    let manifest_path = opts.target_dir.join(PACKAGE_JSON);
    if !manifest_path.is_file() {
        return Err(ScaffoldError::Manifest {
            message: format!(
                "Could not find package.json in the target directory {}",
                opts.target_dir.display()
            ),
        }
        .into());
    }
    let mut pkg = PackageJson::read(&manifest_path)?;
    update_package_json(
        &mut pkg,
        opts.project_name,
        opts.options,
        opts.template,
        resolver,
    )?;
    pkg.write(&manifest_path)?;

    let file_config = TemplateFileConfig::take_from(opts.target_dir)?;
    let ctx = ConfigureContext {
        project_name: opts.project_name,
        target_dir: opts.target_dir,
        config_templates_dir: opts.templates_root.join(CONFIG_TEMPLATES_DIR),
        options: opts.options,
        package_manager: opts.package_manager,
        file_config: &file_config,
    };
    configure::configure_options(&ctx)?;

    let workflows: &[String] = if ctx.has_option(GITHUB_ACTIONS) {
        opts.workflows
    } else {
        &[]
    };
    configure::configure_workflows(&ctx, workflows)?;
    configure::configure_readme(&ctx, workflows)?;
    Ok(())
}
