use serde::Serialize;

use super::ConfigureContext;
use crate::render::Renderer;

const TEMPLATE_FILE_NAME: &str = "vite.config.react.hbs";
const CONFIG_FILE_NAME: &str = "vite.config.ts";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ViteData<'a> {
    define_config_source: &'static str,
    test_config: bool,
    testing_library: bool,
    build_config: bool,
    project_name: &'a str,
}

/// `configureVite.react`: render `vite.config.ts`, with Vitest settings when
/// `vitest` is selected and library build settings for `lib` projects.
pub(super) fn configure_react(ctx: &ConfigureContext<'_>) -> miette::Result<()> {
    let vitest = ctx.has_option("vitest");
    let data = ViteData {
        define_config_source: if vitest { "vitest/config" } else { "vite" },
        test_config: vitest,
        testing_library: ctx.has_option("reactTestingLibrary"),
        build_config: ctx.has_option("lib"),
        project_name: ctx.project_name,
    };
    Renderer::new().render_to(
        &ctx.config_template(TEMPLATE_FILE_NAME),
        &ctx.target_dir.join(CONFIG_FILE_NAME),
        &data,
    )
}
