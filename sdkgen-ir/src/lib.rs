//! Intermediate representation types for the sdkgen SDK generator.
//!
//! This crate provides the language-neutral package model that every
//! generation backend consumes.
//!
//! # Architecture
//!
//! ```text
//! schema.json → sdkgen-schema (parsing) → sdkgen-ir (lowered model) → backends
//! ```
//!
//! The IR types are designed to be:
//! - Language-agnostic (no Go/TypeScript/Python/C#-specific concerns)
//! - Deterministic (resources and properties are sorted by name)
//! - Self-contained (no dependencies beyond serde)

mod package;
mod property;

pub use package::{Package, PackageMeta, Resource};
pub use property::{Property, PropertyType};
