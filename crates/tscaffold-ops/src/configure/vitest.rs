//! Vitest setup for node and React projects.

use tscaffold_core::file_config::VitestArgs;
use tscaffold_util::errors::ScaffoldError;

use super::ConfigureContext;
use crate::tsconfig::{add_types_to_tsconfig, include_file_in_tsconfig};

const VITEST_GLOBALS: &str = "vitest/globals";
const JEST_DOM_TYPES: &str = "@testing-library/jest-dom";

fn required<'a>(value: &'a Option<String>, key: &str, field: &str) -> miette::Result<&'a str> {
    value.as_deref().ok_or_else(|| {
        ScaffoldError::Template {
            message: format!("No other.{field} property for '{key}' in template.config.json"),
        }
        .into()
    })
}

/// `configureVitest.node`: globals types, a standalone `vitest.config.ts`
/// included in `tsconfig.json`.
pub(super) fn configure_node(ctx: &ConfigureContext<'_>, key: &str) -> miette::Result<()> {
    let args: VitestArgs = ctx.file_config.args_for(key)?;
    let globals_tsconfig = required(&args.globals_tsconfig, key, "globalsTsconfig")?;

    add_types_to_tsconfig(VITEST_GLOBALS, &ctx.target_dir.join(globals_tsconfig))?;
    ctx.copy_config_file("vitest.config.node.ts", Some("vitest.config.ts"))?;
    include_file_in_tsconfig("vitest.config.ts", &ctx.target_dir.join("tsconfig.json"))
}

/// `configureVitest.react`: globals types and, with React Testing Library,
/// jest-dom types plus a test setup file. The Vitest config itself lives in
/// `vite.config.ts`.
pub(super) fn configure_react(ctx: &ConfigureContext<'_>, key: &str) -> miette::Result<()> {
    let args: VitestArgs = ctx.file_config.args_for(key)?;
    let globals_tsconfig = ctx
        .target_dir
        .join(required(&args.globals_tsconfig, key, "globalsTsconfig")?);
    add_types_to_tsconfig(VITEST_GLOBALS, &globals_tsconfig)?;

    if !ctx.has_option("reactTestingLibrary") {
        return Ok(());
    }

    add_types_to_tsconfig(JEST_DOM_TYPES, &globals_tsconfig)?;
    let setup_tsconfig = required(&args.test_setup_tsconfig, key, "testSetupTsconfig")?;
    let setup_file = required(&args.test_setup_file_name, key, "testSetupFileName")?;
    ctx.copy_config_file(setup_file, None)?;
    include_file_in_tsconfig(setup_file, &ctx.target_dir.join(setup_tsconfig))
}
