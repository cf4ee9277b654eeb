//! Command dispatch and handler modules.

mod list;
mod new;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::List) => list::exec(),
        None => new::exec(cli.new),
    }
}
