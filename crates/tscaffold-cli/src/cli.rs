//! CLI argument definitions for `create-project`.
//!
//! Running without a subcommand creates a project; every value that is not
//! given as a flag is prompted for, unless `--yes` is set.

use clap::{Args, Parser, Subcommand};

use tscaffold_core::config::PackageManager;

#[derive(Parser, Debug)]
#[command(
    name = "create-project",
    version,
    about = "Scaffold a TypeScript project from a template",
    long_about = "create-project copies a Node, React or React library template, merges the \
                  dependencies of the selected tools into package.json and generates their \
                  configuration files."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub new: NewArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Args, Debug, Default)]
pub struct NewArgs {
    /// Directory to create the project in
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<String>,

    /// Project template: node, react, react-lib
    #[arg(short, long)]
    pub template: Option<String>,

    /// Delete an existing file or clear a non-empty directory at the target
    #[arg(short, long)]
    pub overwrite: bool,

    /// Do not prompt; use flags, then configured defaults
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Package name (defaults to the directory name)
    #[arg(long)]
    pub name: Option<String>,

    /// Comma-separated tools to add (e.g. eslint,prettier,vitest)
    #[arg(long, value_delimiter = ',')]
    pub options: Option<Vec<String>>,

    /// Comma-separated GitHub Actions workflows (e.g. ci,releasePlease)
    #[arg(long, value_delimiter = ',')]
    pub workflows: Option<Vec<String>>,

    /// Package manager: npm, pnpm
    #[arg(long)]
    pub package_manager: Option<PackageManager>,

    /// Install dependencies after scaffolding
    #[arg(long)]
    pub install: bool,

    /// Initialize a git repository
    #[arg(long)]
    pub git: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List templates, options and workflows
    List,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_comma_separated_options() {
        let cli = Cli::parse_from([
            "create-project",
            "my-app",
            "--options",
            "eslint,vitest",
            "--package-manager",
            "pnpm",
        ]);
        assert!(cli.command.is_none());
        assert_eq!(cli.new.directory.as_deref(), Some("my-app"));
        assert_eq!(
            cli.new.options,
            Some(vec!["eslint".to_string(), "vitest".to_string()])
        );
        assert_eq!(cli.new.package_manager, Some(PackageManager::Pnpm));
    }

    #[test]
    fn test_list_subcommand() {
        let cli = Cli::parse_from(["create-project", "list"]);
        assert!(matches!(cli.command, Some(Command::List)));
    }

    #[test]
    fn test_unknown_package_manager_rejected() {
        let result = Cli::try_parse_from(["create-project", "--package-manager", "yarn"]);
        assert!(result.is_err());
    }
}
