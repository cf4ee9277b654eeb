use serde::Serialize;
use std::collections::BTreeMap;

use super::ConfigureContext;
use crate::render::Renderer;

const README_FILE_NAME: &str = "README.md";

/// Partials available to the README template: (file in `readmePartials/`, partial name).
const PARTIALS: [(&str, &str); 9] = [
    ("common.hbs", "common"),
    ("eslint.hbs", "eslintPartial"),
    ("prettier.hbs", "prettierPartial"),
    ("vitest.hbs", "vitestPartial"),
    ("editorconfig.hbs", "editorconfigPartial"),
    ("githooks.hbs", "githooksPartial"),
    ("husky.hbs", "huskyPartial"),
    ("githubActions.hbs", "githubActionsPartial"),
    ("releasePlease.hbs", "releasePleasePartial"),
];

#[derive(Debug, Serialize)]
struct OptionData {
    display: &'static str,
    link: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReadmeData<'a> {
    project_name: &'a str,
    package_manager: String,
    options: &'a [String],
    workflows: &'a [String],
    option_data: BTreeMap<&'a str, OptionData>,
}

fn option_data(option: &str) -> Option<OptionData> {
    let (display, link) = match option {
        "eslint" => ("ESLint", "eslint"),
        "prettier" => ("Prettier", "prettier"),
        "editorconfig" => ("EditorConfig", "editorconfig"),
        "vitest" => ("Vitest", "vitest"),
        _ => return None,
    };
    Some(OptionData { display, link })
}

/// Render the project `README.md` from the template bound to `readme`.
pub fn configure_readme(ctx: &ConfigureContext<'_>, workflows: &[String]) -> miette::Result<()> {
    let partials_dir = ctx.config_template("readmePartials");
    let mut renderer = Renderer::new();
    for (file, name) in PARTIALS {
        let path = partials_dir.join(file);
        if path.is_file() {
            renderer.register_partial_file(name, &path)?;
        } else {
            tracing::debug!("README partial {} not found", path.display());
        }
    }

    let data = ReadmeData {
        project_name: ctx.project_name,
        package_manager: ctx.package_manager.to_string(),
        options: ctx.options,
        workflows,
        option_data: ctx
            .options
            .iter()
            .filter_map(|o| option_data(o).map(|d| (o.as_str(), d)))
            .collect(),
    };
    let src = ctx.bound_template("readme")?;
    renderer.render_to(&src, &ctx.target_dir.join(README_FILE_NAME), &data)
}
