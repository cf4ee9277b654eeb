//! Git pre-commit hooks, managed by Husky or as native git hooks.

use serde::Serialize;
use std::path::Path;

use tscaffold_util::errors::ScaffoldError;

use super::ConfigureContext;
use crate::render::Renderer;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HookData {
    eslint: bool,
    vitest: bool,
    husky: bool,
    package_manager: String,
}

fn write_hook(ctx: &ConfigureContext<'_>, key: &str, dest: &Path) -> miette::Result<()> {
    let data = HookData {
        eslint: ctx.has_option("eslint"),
        vitest: ctx.has_option("vitest"),
        husky: key == "husky",
        package_manager: ctx.package_manager.to_string(),
    };
    let src = ctx.bound_template(key)?;
    Renderer::new().render_to(&src, dest, &data)?;
    tscaffold_util::fs::make_executable(dest).map_err(ScaffoldError::Io)?;
    Ok(())
}

pub(super) fn configure_husky(ctx: &ConfigureContext<'_>) -> miette::Result<()> {
    write_hook(ctx, "husky", &ctx.target_dir.join(".husky").join("pre-commit"))
}

pub(super) fn configure_githooks(ctx: &ConfigureContext<'_>) -> miette::Result<()> {
    write_hook(ctx, "githooks", &ctx.target_dir.join("git-hooks").join("pre-commit"))
}
