use super::ConfigureContext;

pub(super) fn configure_prettier(ctx: &ConfigureContext<'_>) -> miette::Result<()> {
    ctx.copy_config_file(".prettierrc.json", None)
}

pub(super) fn configure_editorconfig(ctx: &ConfigureContext<'_>) -> miette::Result<()> {
    ctx.copy_config_file(".editorconfig", None)
}
