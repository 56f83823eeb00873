//! Node.js (TypeScript) code generator for the sdkgen SDK generator.
//!
//! Generates an npm package on top of `@pulumi/pulumi`: a
//! `pulumi.CustomResource` subclass and args interface per resource, a lazy
//! loading `index.ts` and the package manifests.
//!
//! ```
//! use sdkgen_codegen::language::LanguageCodegen;
//! use sdkgen_codegen::pipeline::Pipeline;
//! use sdkgen_codegen_nodejs::Generator;
//! use sdkgen_schema::{Language, Schema};
//!
//! let schema: Schema = r#"{"name": "openai", "resources": {"File": {}}}"#.parse().unwrap();
//! let options = schema.language_options(Language::NodeJs);
//! let mut ctx = Pipeline::new().run(schema).unwrap();
//! let package = ctx.take_ir().unwrap();
//!
//! let files = Generator.generate(&package, &options).unwrap();
//! assert!(files.iter().any(|f| f.path() == "file.ts"));
//! ```
//!
//! # Generated Output
//!
//! - `<resource>.ts` - one per resource, camelCase
//! - `index.ts`, `utilities.ts`
//! - `package.json`, `tsconfig.json`
//! - `README.md`

mod code_file;
mod generator;
mod naming;
mod options;
mod type_mapper;

pub mod ast;
pub mod files;

pub use code_file::{CodeFile, HEADER, RawCode};
pub use generator::Generator;
pub use naming::TS_NAMING;
pub use options::NodeOptions;
pub use sdkgen_codegen::language::LanguageCodegen;
pub use type_mapper::NodeTypeMapper;
