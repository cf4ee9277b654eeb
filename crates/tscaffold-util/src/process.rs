use std::path::PathBuf;
use std::process::{Command, Output};

use crate::errors::ScaffoldError;

/// Builder for running external tools (package managers, git) against a
/// freshly scaffolded project.
pub struct CommandBuilder {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl CommandBuilder {
    /// Create a new builder for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory for the child process.
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Human-readable rendering of the command line, used in messages.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(ref dir) = self.cwd {
            cmd.current_dir(dir);
        }
        cmd
    }

    /// Execute the command, capturing its output.
    pub fn exec(&self) -> Result<Output, ScaffoldError> {
        tracing::debug!("running `{}`", self.display());
        self.command().output().map_err(ScaffoldError::from)
    }

    /// Execute the command with inherited stdio and fail on a non-zero exit.
    pub fn run(&self) -> Result<(), ScaffoldError> {
        tracing::debug!("running `{}`", self.display());
        let status = self
            .command()
            .status()
            .map_err(|e| ScaffoldError::Process {
                message: format!("Failed to start `{}`: {e}", self.display()),
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(ScaffoldError::Process {
                message: format!("`{}` exited with {status}", self.display()),
            })
        }
    }
}
