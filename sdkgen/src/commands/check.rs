use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::{
    failure::UnwrapOrExit,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the JSON schema file
    pub schema: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::check(&self.schema).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
