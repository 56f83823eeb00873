//! Python code generator for the sdkgen SDK generator.
//!
//! Generates a setuptools package on top of the pulumi Python SDK. Each
//! resource gets an `@pulumi.input_type` args class and a
//! `pulumi.CustomResource` subclass with typed output properties.
//!
//! # Generated Output
//!
//! - `<pkg>/<resource>.py` - one per resource, snake_case
//! - `<pkg>/__init__.py`, `<pkg>/_utilities.py`, `<pkg>/py.typed`
//! - `<pkg>/pulumi-plugin.json`
//! - `setup.py`, `README.md`

mod generator;
mod naming;
mod options;
mod type_mapper;

pub mod ast;
pub mod files;

pub use generator::Generator;
pub use naming::PY_NAMING;
pub use options::{PythonOptions, PythonSettings};
pub use sdkgen_codegen::language::LanguageCodegen;
pub use type_mapper::PythonTypeMapper;
