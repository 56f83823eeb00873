mod check;
mod completions;
mod generate;
mod languages;

use std::process;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand, error::ErrorKind};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use languages::LanguagesCommand;

#[derive(Parser)]
#[command(name = "sdkgen")]
#[command(version)]
#[command(about = "Generate client SDKs from a resource schema")]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateCommand,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub(crate) verbose: u8,

    /// Silence all logging
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub(crate) quiet: bool,
}

impl Cli {
    /// Parse the command line. Help and version exit 0; any other parse
    /// error is a failed run, printed to stdout with status 1.
    pub fn parse_or_exit() -> Self {
        Self::try_parse().unwrap_or_else(|err| {
            if usage_exit_code(&err) == 0 {
                err.exit()
            }
            print!("{}", err);
            process::exit(1)
        })
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Some(Commands::Check(cmd)) => cmd.run(),
            Some(Commands::Languages(cmd)) => cmd.run(),
            Some(Commands::Completions(cmd)) => cmd.run(),
            None => self.generate.run(),
        }
    }
}

fn usage_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a schema without generating code
    Check(CheckCommand),

    /// List supported target languages
    Languages(LanguagesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
