use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::{
    failure::UnwrapOrExit,
    language::dispatcher,
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Target language (go, nodejs, python, dotnet)
    #[arg(required = true)]
    pub language: Option<String>,

    /// Directory to write the SDK into (created if missing)
    #[arg(required = true)]
    pub output_dir: Option<PathBuf>,

    /// Path to the JSON schema file
    #[arg(required = true)]
    pub schema: Option<PathBuf>,

    /// Options file (JSON or TOML) keyed by language
    #[arg(short, long, value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write pipeline snapshots to <output-dir>/.sdkgen/debug
    #[arg(long)]
    pub visualize: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let (Some(language), Some(output_dir), Some(schema)) =
            (&self.language, &self.output_dir, &self.schema)
        else {
            eyre::bail!("<language>, <output-dir> and <schema-file> are required");
        };

        let report = ops::generate(
            &dispatcher(),
            GenerateOptions {
                language,
                schema,
                output_dir,
                options_file: self.options.as_deref(),
                dry_run: self.dry_run,
                visualize: self.visualize,
            },
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
