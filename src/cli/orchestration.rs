//! Command dispatch against a storage backend
//!
//! Keeps the binary's argument parsing separate from the operations so the
//! workflow can be driven programmatically without depending on clap.

use crate::domain::{BumpInstruction, SemanticVersion};
use crate::driver::Driver;
use crate::error::Result;

/// One operation requested by the caller
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Bump(BumpInstruction),
    Set(SemanticVersion),
    Check(Option<SemanticVersion>),
}

/// Result of a successful command
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// The version written by a bump
    Bumped(SemanticVersion),

    /// The version written verbatim
    Set(SemanticVersion),

    /// Versions at least as new as the cursor (possibly none)
    Checked(Vec<SemanticVersion>),
}

impl CommandOutcome {
    /// Versions to report, in output order
    pub fn versions(&self) -> &[SemanticVersion] {
        match self {
            CommandOutcome::Bumped(version) | CommandOutcome::Set(version) => {
                std::slice::from_ref(version)
            }
            CommandOutcome::Checked(versions) => versions,
        }
    }
}

/// Run `command` against `driver`
pub fn run_command<D: Driver>(driver: &D, command: Command) -> Result<CommandOutcome> {
    tracing::debug!(?command, "running command");
    match command {
        Command::Bump(bump) => driver.bump(&bump).map(CommandOutcome::Bumped),
        Command::Set(version) => {
            driver.set(&version)?;
            Ok(CommandOutcome::Set(version))
        }
        Command::Check(cursor) => driver.check(cursor.as_ref()).map(CommandOutcome::Checked),
    }
}
