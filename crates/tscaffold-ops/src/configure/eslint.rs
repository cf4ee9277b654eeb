//! `eslint.config.mjs` generation.

use serde::Serialize;

use super::ConfigureContext;
use crate::render::Renderer;

const CONFIG_FILE_NAME: &str = "eslint.config.mjs";

#[derive(Debug, Serialize)]
struct Import {
    default: &'static str,
    source: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TestConfig {
    vitest_plugin: bool,
    testing_library: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EslintData {
    imports: Vec<Import>,
    ignores: Vec<String>,
    shareable_configs: Option<Vec<&'static str>>,
    test_config: Option<TestConfig>,
}

fn eslint_data(ctx: &ConfigureContext<'_>) -> EslintData {
    let mut imports = Vec::new();
    if ctx.has_option("prettier") {
        imports.push(Import {
            default: "eslintConfigPrettier",
            source: "eslint-config-prettier/flat",
        });
    }
    if ctx.has_option("reactTestingLibrary") {
        imports.push(Import {
            default: "testingLibrary",
            source: "eslint-plugin-testing-library",
        });
    }
    if ctx.has_option("vitest") {
        imports.push(Import {
            default: "vitest",
            source: "@vitest/eslint-plugin",
        });
    }

    let ignores = vec!["'dist'".to_string(), format!("'{CONFIG_FILE_NAME}'")];

    let shareable_configs = ctx
        .has_option("prettier")
        .then(|| vec!["eslintConfigPrettier"]);

    let test_config = ctx.has_option("vitest").then(|| TestConfig {
        vitest_plugin: true,
        testing_library: ctx.has_option("reactTestingLibrary"),
    });

    EslintData {
        imports,
        ignores,
        shareable_configs,
        test_config,
    }
}

pub(super) fn configure(ctx: &ConfigureContext<'_>) -> miette::Result<()> {
    let src = ctx.bound_template("eslint")?;
    Renderer::new().render_to(&src, &ctx.target_dir.join(CONFIG_FILE_NAME), &eslint_data(ctx))
}
