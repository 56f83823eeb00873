//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod languages;
mod output;

pub use check::{CheckReport, ResourceLine};
pub use generate::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};
pub use languages::{LanguageLine, LanguagesReport};
pub use output::{Report, TerminalOutput};

#[cfg(test)]
pub use output::BufferOutput;
