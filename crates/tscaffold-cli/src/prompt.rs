//! Thin wrappers over `dialoguer` prompts that report failures as
//! [`ScaffoldError::Prompt`].

use std::sync::OnceLock;

use dialoguer::theme::SimpleTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use tscaffold_util::errors::ScaffoldError;

static THEME: OnceLock<SimpleTheme> = OnceLock::new();

fn theme() -> &'static SimpleTheme {
    THEME.get_or_init(|| SimpleTheme)
}

fn prompt_error(e: dialoguer::Error) -> ScaffoldError {
    ScaffoldError::Prompt {
        message: e.to_string(),
    }
}

/// Pick one of `items`; returns its index.
pub(crate) fn select<T: ToString>(prompt: &str, items: &[T], default: usize) -> miette::Result<usize> {
    Ok(Select::with_theme(theme())
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()
        .map_err(prompt_error)?)
}

/// Pick any number of `items`; returns their indices.
pub(crate) fn multi_select<T: ToString>(
    prompt: &str,
    items: &[T],
    defaults: &[bool],
) -> miette::Result<Vec<usize>> {
    Ok(MultiSelect::with_theme(theme())
        .with_prompt(prompt)
        .items(items)
        .defaults(defaults)
        .interact()
        .map_err(prompt_error)?)
}

pub(crate) fn confirm(prompt: &str, default: bool) -> miette::Result<bool> {
    Ok(Confirm::with_theme(theme())
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(prompt_error)?)
}

/// Free-text input validated by `validator`.
pub(crate) fn input<V>(prompt: &str, default: &str, validator: V) -> miette::Result<String>
where
    V: FnMut(&String) -> Result<(), String>,
{
    Ok(Input::<String>::with_theme(theme())
        .with_prompt(prompt)
        .default(default.to_string())
        .validate_with(validator)
        .interact_text()
        .map_err(prompt_error)?)
}
