use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use semver_file::cli::orchestration::{run_command, Command, CommandOutcome};
use semver_file::config::{self, ConfigOverrides};
use semver_file::{logging, ui, BumpInstruction, FileDriver, SemanticVersion};

#[derive(Parser)]
#[command(
    name = "semver-file",
    version,
    about = "Track a semantic version stored in a file"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, global = true, help = "File the current version is read from")]
    file: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "File the new version is written to (defaults to --file)"
    )]
    bumped_file: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Version assumed when the file does not exist yet"
    )]
    initial_version: Option<SemanticVersion>,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,

    #[command(subcommand)]
    command: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Bump the stored version and write the result
    Bump {
        #[arg(long, help = "major, minor, patch, final or pre")]
        bump: Option<String>,

        #[arg(long, help = "Pre-release label, e.g. beta or rc")]
        pre: Option<String>,
    },
    /// Overwrite the stored version
    Set {
        #[arg(value_name = "VERSION")]
        target: SemanticVersion,
    },
    /// Print the stored version if it is at least the cursor
    Check {
        #[arg(long, help = "Only report versions at least this new")]
        cursor: Option<SemanticVersion>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let from_file = config::load_config(args.config.as_deref())
        .context("Error loading config")?
        .unwrap_or_default();
    let from_cli = ConfigOverrides {
        initial_version: args.initial_version,
        file: args.file,
        bumped_file: args.bumped_file,
    };
    let store = from_file.merge(from_cli).resolve()?;

    let command = match args.command {
        Action::Bump { bump, pre } => Command::Bump(BumpInstruction::from_params(
            bump.as_deref(),
            pre.as_deref(),
        )?),
        Action::Set { target } => Command::Set(target),
        Action::Check { cursor } => Command::Check(cursor),
    };

    let write_path = store.write_path().display().to_string();
    let driver = FileDriver::new(store);
    let outcome = run_command(&driver, command)?;

    match &outcome {
        CommandOutcome::Bumped(version) => {
            ui::display_success(&format!("Bumped to {} in {}", version, write_path))
        }
        CommandOutcome::Set(version) => {
            ui::display_success(&format!("Set {} in {}", version, write_path))
        }
        CommandOutcome::Checked(versions) if versions.is_empty() => {
            ui::display_status("No version at or beyond the cursor")
        }
        CommandOutcome::Checked(_) => {}
    }
    ui::display_versions(outcome.versions());

    Ok(())
}
