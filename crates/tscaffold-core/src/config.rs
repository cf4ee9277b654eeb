use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tscaffold_util::errors::ScaffoldError;

/// Environment variable that overrides the templates root.
pub const TEMPLATES_DIR_ENV: &str = "TSCAFFOLD_TEMPLATES_DIR";

/// Package manager used for installing dependencies and in generated scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
}

impl PackageManager {
    pub const ALL: [PackageManager; 2] = [PackageManager::Npm, PackageManager::Pnpm];

    pub fn as_str(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "npm" => Ok(PackageManager::Npm),
            "pnpm" => Ok(PackageManager::Pnpm),
            other => Err(ScaffoldError::Config {
                message: format!("Unknown package manager '{other}' (expected npm or pnpm)"),
            }),
        }
    }
}

/// Global user configuration loaded from `~/.tscaffold/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default, rename = "package-manager")]
    pub package_manager: PackageManager,

    /// Directory holding the template sources (`template-node/`, ...).
    #[serde(default, rename = "templates-dir")]
    pub templates_dir: Option<PathBuf>,

    /// Install dependencies after scaffolding without asking.
    #[serde(default)]
    pub install: bool,

    #[serde(default = "default_git_init", rename = "git-init")]
    pub git_init: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            package_manager: PackageManager::default(),
            templates_dir: None,
            install: false,
            git_init: default_git_init(),
        }
    }
}

fn default_git_init() -> bool {
    true
}

impl GlobalConfig {
    /// Load the global configuration, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| ScaffoldError::Config {
            message: format!("Failed to read global config: {e}"),
        })?;
        toml::from_str(&content).map_err(|e| {
            ScaffoldError::Config {
                message: format!("Failed to parse global config: {e}"),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// Locate the templates root.
    ///
    /// Checked in order: `TSCAFFOLD_TEMPLATES_DIR`, `templates-dir` from the
    /// config, `share/tscaffold/templates` next to the installed binary, and
    /// the `templates/` directory of the source tree.
    pub fn templates_root(&self) -> miette::Result<PathBuf> {
        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Some(dir) = std::env::var_os(TEMPLATES_DIR_ENV) {
            candidates.push(PathBuf::from(dir));
        }
        if let Some(dir) = &self.templates_dir {
            candidates.push(dir.clone());
        }
        if let Some(prefix) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().and_then(Path::parent).map(Path::to_path_buf))
        {
            candidates.push(prefix.join("share").join("tscaffold").join("templates"));
        }
        candidates.push(Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates"));

        for candidate in &candidates {
            if candidate.is_dir() {
                tracing::debug!("using templates root {}", candidate.display());
                return Ok(candidate.clone());
            }
            tracing::debug!("templates root candidate {} not found", candidate.display());
        }
        Err(ScaffoldError::Config {
            message: format!(
                "Could not locate the templates directory; set {TEMPLATES_DIR_ENV} or 'templates-dir' in {}",
                Self::default_path().display()
            ),
        }
        .into())
    }
}

/// Returns the path to the tscaffold data directory (`~/.tscaffold/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".tscaffold")
}
