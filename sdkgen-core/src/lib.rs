//! Core utilities and types for the sdkgen SDK generator.
//!
//! This crate provides the fundamental types shared by every part of the
//! generator: the immutable [`GeneratedFile`], the file [`emit`]ter that
//! persists a file set under an output root, and the naming utilities used
//! by every language backend.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod emit;
mod file;
mod utils;
mod version;

// File operations
pub use emit::{EmitError, EmitStats, emit, resolve_path};
pub use file::{GeneratedFile, SourceFile};
// String utilities
pub use utils::{split_words, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case};
pub use version::Version;
