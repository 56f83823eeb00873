mod commands;
mod failure;
mod language;
mod logging;
mod ops;
mod reports;

use eyre::Result;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse_or_exit();
    logging::init(cli.verbose, cli.quiet);
    cli.run()
}
