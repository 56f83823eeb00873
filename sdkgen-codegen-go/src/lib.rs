//! Go code generator for the sdkgen SDK generator.
//!
//! Generates a Go package on top of the pulumi Go SDK: one file per resource
//! with its constructor, lookup function, args and state structs and typed
//! outputs, plus package registration and helper files.
//!
//! ```
//! use sdkgen_codegen::language::LanguageCodegen;
//! use sdkgen_codegen::pipeline::Pipeline;
//! use sdkgen_codegen_go::Generator;
//! use sdkgen_schema::{Language, Schema};
//!
//! let schema: Schema = r#"{"name": "openai", "resources": {"File": {}}}"#.parse().unwrap();
//! let options = schema.language_options(Language::Go);
//! let mut ctx = Pipeline::new().run(schema).unwrap();
//! let package = ctx.take_ir().unwrap();
//!
//! let files = Generator.generate(&package, &options).unwrap();
//! assert!(files.iter().any(|f| f.path() == "openai/file.go"));
//! ```
//!
//! # Generated Output
//!
//! - `<pkg>/<resource>.go` - one per resource
//! - `<pkg>/doc.go`, `<pkg>/init.go`
//! - `<pkg>/internal/pulumiUtilities.go`
//! - `<pkg>/pulumi-plugin.json`
//! - `README.md`

mod generator;
mod naming;
mod options;
mod type_mapper;

pub mod ast;
pub mod files;

pub use generator::Generator;
pub use naming::{GO_KEYWORDS, GO_NAMING};
pub use options::{GoOptions, GoSettings};
pub use sdkgen_codegen::language::LanguageCodegen;
pub use type_mapper::GoTypeMapper;
