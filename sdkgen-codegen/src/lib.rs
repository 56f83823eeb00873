//! Shared code generation utilities for the sdkgen SDK generator.
//!
//! This crate sits between the schema loader and the language backends
//! (`sdkgen-codegen-go`, `-nodejs`, `-python`, `-dotnet`).
//!
//! # Module Organization
//!
//! - [`pipeline`] - Validate, lower and analyze a schema into package IR
//! - [`language`] - Backend trait, dispatcher, naming and type mapping
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Output management (FileRegistry, ImportCollector, etc.)
//! - [`analysis`] - Summary data computed from the IR
//! - [`testing`] - Test fixtures and helpers (feature-gated)

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod analysis;
pub mod builder;
mod error;
pub mod generation;
pub mod language;
pub mod pipeline;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{Error, Result};
