//! .NET code generator for the sdkgen SDK generator.
//!
//! Generates a C# class library on top of the Pulumi .NET SDK. Each resource
//! becomes a `Pulumi.CustomResource` subclass with `[Output]` properties, an
//! `Args` class for construction and a `State` class for lookups.
//!
//! # Generated Output
//!
//! - `<Name>.cs` - one per resource, PascalCase
//! - `Utilities.cs`
//! - `<Namespace>.csproj`, `pulumi-plugin.json`, `README.md`
//!
//! # Example
//!
//! ```
//! use sdkgen_codegen::pipeline::Pipeline;
//! use sdkgen_codegen_dotnet::{Generator, LanguageCodegen};
//! use sdkgen_schema::{Language, Schema};
//!
//! let schema: Schema = r#"{"name": "openai", "resources": {"File": {}}}"#.parse().unwrap();
//! let options = schema.language_options(Language::DotNet);
//! let package = Pipeline::new().run(schema).unwrap().take_ir().unwrap();
//!
//! let files = Generator.generate(&package, &options).unwrap();
//! assert!(files.iter().any(|f| f.path() == "File.cs"));
//! assert!(files.iter().any(|f| f.path() == "Pulumi.Openai.csproj"));
//! ```

mod generator;
mod naming;
mod options;
mod type_mapper;

pub mod ast;
pub mod files;

pub use generator::Generator;
pub use naming::DOTNET_NAMING;
pub use options::{DotNetOptions, DotNetSettings};
pub use sdkgen_codegen::language::LanguageCodegen;
pub use type_mapper::DotNetTypeMapper;
