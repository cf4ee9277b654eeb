//! Handlebars rendering of configuration file templates.

use handlebars::{handlebars_helper, Handlebars};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use tscaffold_util::errors::ScaffoldError;

handlebars_helper!(join: |items: array, sep: str| {
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(sep)
});

handlebars_helper!(enclose_in_double_curly: |value: str| format!("{{{{ {value} }}}}"));

/// Template renderer for generated source and config files.
///
/// Output is never HTML-escaped. Besides the built-in helpers (`eq`, `if`,
/// `each`, ...) it provides `join` and `encloseInDoubleCurly`.
pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.register_helper("join", Box::new(join));
        registry.register_helper("encloseInDoubleCurly", Box::new(enclose_in_double_curly));
        Self { registry }
    }

    /// Register the contents of `path` as partial `name`.
    pub fn register_partial_file(&mut self, name: &str, path: &Path) -> miette::Result<()> {
        let content = read_template(path)?;
        self.registry
            .register_partial(name, content)
            .map_err(|e| {
                ScaffoldError::Render {
                    message: format!("Invalid partial {}: {e}", path.display()),
                }
                .into()
            })
    }

    /// Render a template string.
    pub fn render_str<T: Serialize>(&self, template: &str, data: &T) -> miette::Result<String> {
        self.registry
            .render_template(template, data)
            .map_err(|e| ScaffoldError::Render {
                message: e.to_string(),
            }
            .into())
    }

    /// Render the template file at `path`.
    pub fn render_file<T: Serialize>(&self, path: &Path, data: &T) -> miette::Result<String> {
        let template = read_template(path)?;
        self.registry
            .render_template(&template, data)
            .map_err(|e| {
                ScaffoldError::Render {
                    message: format!("{}: {e}", path.display()),
                }
                .into()
            })
    }

    /// Render `src` and write the result to `dest`, creating parent directories.
    pub fn render_to<T: Serialize>(&self, src: &Path, dest: &Path, data: &T) -> miette::Result<()> {
        let output = self.render_file(src, data)?;
        if let Some(parent) = dest.parent() {
            tscaffold_util::fs::ensure_dir(parent).map_err(ScaffoldError::Io)?;
        }
        std::fs::write(dest, output).map_err(ScaffoldError::Io)?;
        tracing::debug!("rendered {} -> {}", src.display(), dest.display());
        Ok(())
    }
}

fn read_template(path: &Path) -> miette::Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        ScaffoldError::Template {
            message: format!("Failed to read template {}: {e}", path.display()),
        }
        .into()
    })
}

/// `camelCase` -> `kebab-case`, as used for workflow file names.
pub fn camel_to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower_or_digit = false;
    for c in name.chars() {
        if c.is_ascii_uppercase() && prev_lower_or_digit {
            out.push('-');
        }
        prev_lower_or_digit = c.is_ascii_lowercase() || c.is_ascii_digit();
        out.push(c.to_ascii_lowercase());
    }
    out
}
