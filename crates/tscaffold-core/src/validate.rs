//! Validation of project names and target directories.

use regex::Regex;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

use tscaffold_util::errors::ScaffoldError;

fn package_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:@[a-z\d\-*~][a-z\d\-*._~]*/)?[a-z\d\-~][a-z\d\-._~]*$")
            .expect("package name pattern is a valid regex")
    })
}

/// Returns `true` if `name` is a valid npm package name.
pub fn is_valid_package_name(name: &str) -> bool {
    !name.is_empty() && name.len() <= 214 && package_name_regex().is_match(name)
}

/// Validate a package name, returning a descriptive error.
pub fn validate_package_name(name: &str) -> miette::Result<()> {
    if is_valid_package_name(name) {
        Ok(())
    } else {
        Err(ScaffoldError::InvalidTarget {
            message: format!(
                "'{name}' is not a valid npm package name (use lowercase letters, digits, '-', '.', '_' or '~', optionally scoped as @scope/name)"
            ),
        }
        .into())
    }
}

#[cfg(windows)]
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

fn invalid_component(component: &str) -> Option<&'static str> {
    if component.chars().any(char::is_control) {
        return Some("contains control characters");
    }
    if component.ends_with(' ') || component.ends_with('.') {
        return Some("ends with a space or a period");
    }
    #[cfg(windows)]
    {
        if component
            .chars()
            .any(|c| matches!(c, '<' | '>' | ':' | '"' | '|' | '?' | '*'))
        {
            return Some("contains a reserved character");
        }
        let stem = component.split('.').next().unwrap_or(component);
        if RESERVED_NAMES.iter().any(|r| r.eq_ignore_ascii_case(stem)) {
            return Some("is a reserved name");
        }
    }
    None
}

/// Resolve the directory a project is created in.
///
/// Relative paths are joined onto `cwd`; `.` and `..` components are folded
/// lexically. The result must not be the filesystem root and every normal
/// component must be a usable directory name.
pub fn resolve_target_dir(input: &str, cwd: &Path) -> miette::Result<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ScaffoldError::InvalidTarget {
            message: "Target directory must not be empty".to_string(),
        }
        .into());
    }

    let raw = Path::new(trimmed);
    let joined = if raw.is_absolute() {
        raw.to_path_buf()
    } else {
        cwd.join(raw)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(part) => {
                let part_str = part.to_string_lossy();
                if let Some(reason) = invalid_component(&part_str) {
                    return Err(ScaffoldError::InvalidTarget {
                        message: format!("Path component '{part_str}' {reason}"),
                    }
                    .into());
                }
                normalized.push(part);
            }
            Component::RootDir | Component::Prefix(_) => normalized.push(component),
        }
    }

    if normalized.parent().is_none() {
        return Err(ScaffoldError::InvalidTarget {
            message: "Refusing to create a project in the filesystem root".to_string(),
        }
        .into());
    }
    Ok(normalized)
}

/// Default project name for a target directory: its last component.
pub fn project_name_from_path(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
}
