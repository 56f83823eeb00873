//! Stage-labelled failures.
//!
//! Every failed run prints one line to stdout naming the stage that failed,
//! followed by the cause chain. Errors with source spans are also rendered
//! as diagnostics on stderr.

use std::{error::Error as StdError, fmt, process};

use sdkgen_core::EmitError;

/// The step of a run that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    ReadSchema,
    ParseSchema,
    LoadSchema,
    LoadOptions,
    UnsupportedLanguage,
    Generate,
    Write(String),
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::ReadSchema => write!(f, "Failed to read schema file"),
            Stage::ParseSchema => write!(f, "Failed to parse schema"),
            Stage::LoadSchema => write!(f, "Failed to load schema"),
            Stage::LoadOptions => write!(f, "Failed to load options"),
            Stage::UnsupportedLanguage => write!(f, "Unsupported language"),
            Stage::Generate => write!(f, "Failed to generate code"),
            Stage::Write(path) => write!(f, "Failed to write file {}", path),
        }
    }
}

/// A failed run.
#[derive(Debug)]
pub struct Failure {
    pub stage: Stage,
    /// The cause chain on one line.
    pub message: String,
    diagnostic: Option<miette::Report>,
}

impl Failure {
    pub fn new(stage: Stage, error: impl Into<eyre::Report>) -> Self {
        Self {
            stage,
            message: format!("{:#}", error.into()),
            diagnostic: None,
        }
    }

    /// A failure whose cause also renders as a diagnostic.
    pub fn diagnostic<E>(stage: Stage, error: E) -> Self
    where
        E: miette::Diagnostic + Send + Sync + 'static,
    {
        Self {
            stage,
            message: chain(&error),
            diagnostic: Some(miette::Report::new(error)),
        }
    }

    pub fn emit(error: EmitError) -> Self {
        let stage = Stage::Write(error.path());
        let message = match &error {
            EmitError::Io { source, .. } => source.to_string(),
            EmitError::PathTraversal { .. } => error.to_string(),
        };
        Self {
            stage,
            message,
            diagnostic: Some(miette::Report::new(error)),
        }
    }

    /// Print the failure and exit with status 1.
    pub fn exit(self) -> ! {
        println!("{}", self);
        if let Some(diagnostic) = &self.diagnostic {
            eprintln!("{:?}", diagnostic);
        }
        process::exit(1)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.stage, self.message)
    }
}

fn chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Exit on failure with the stage message.
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for Result<T, Failure> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(failure) => failure.exit(),
        }
    }
}
