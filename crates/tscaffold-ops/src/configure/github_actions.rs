//! GitHub Actions workflows and Release Please configuration.

use serde::Serialize;

use super::ConfigureContext;
use crate::render::{camel_to_kebab, Renderer};

const RELEASE_PLEASE_FILES: [&str; 2] = [
    "release-please-config.json",
    ".release-please-manifest.json",
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WorkflowData {
    package_manager: String,
}

/// Render each workflow into `.github/workflows/<kebab-name>.yaml`.
pub fn configure_workflows(
    ctx: &ConfigureContext<'_>,
    workflows: &[String],
) -> miette::Result<()> {
    if workflows.is_empty() {
        return Ok(());
    }
    let templates_dir = ctx.config_template("workflows");
    let out_dir = ctx.target_dir.join(".github").join("workflows");

    let mut renderer = Renderer::new();
    renderer.register_partial_file(
        "installDepsPartial",
        &templates_dir.join("partials").join("installDeps.hbs"),
    )?;

    let data = WorkflowData {
        package_manager: ctx.package_manager.to_string(),
    };
    for workflow in workflows {
        let file = camel_to_kebab(workflow);
        renderer.render_to(
            &templates_dir.join(format!("{file}.yaml.hbs")),
            &out_dir.join(format!("{file}.yaml")),
            &data,
        )?;
    }

    if workflows.iter().any(|w| w == "releasePlease") {
        for file in RELEASE_PLEASE_FILES {
            ctx.copy_config_file(&format!("workflows/{file}"), Some(file))?;
        }
    }
    Ok(())
}
