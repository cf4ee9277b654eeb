use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all tscaffold operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid, missing or malformed `package.json`.
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check that the template contains a valid package.json"))]
    Manifest { message: String },

    /// Dependency resolution produced an unusable result.
    #[error("Dependency resolution failed: {message}")]
    #[diagnostic(help("Add the missing packages to the version registry or give them an explicit version"))]
    Resolution { message: String },

    /// A template descriptor or template file is missing or malformed.
    #[error("Template error: {message}")]
    Template { message: String },

    /// Rendering a configuration file template failed.
    #[error("Render error: {message}")]
    Render { message: String },

    /// Global configuration could not be read or parsed.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.tscaffold/config.toml for syntax errors"))]
    Config { message: String },

    /// The requested target directory cannot be used.
    #[error("Invalid target: {message}")]
    InvalidTarget { message: String },

    /// An interactive prompt failed or was cancelled.
    #[error("Prompt error: {message}")]
    Prompt { message: String },

    /// An external process (package manager, git) failed.
    #[error("Process error: {message}")]
    Process { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type ScaffoldResult<T> = miette::Result<T>;
