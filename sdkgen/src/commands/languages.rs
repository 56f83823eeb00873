use clap::Args;
use eyre::Result;

use crate::{
    language::dispatcher,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct LanguagesCommand {}

impl LanguagesCommand {
    pub fn run(&self) -> Result<()> {
        ops::languages(&dispatcher()).render(&mut TerminalOutput::new());
        Ok(())
    }
}
