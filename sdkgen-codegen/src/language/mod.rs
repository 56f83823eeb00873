//! Language backend abstractions.
//!
//! - [`LanguageCodegen`] - Trait every backend implements
//! - [`Dispatcher`] - Routes a language identifier to its backend
//! - [`TypeMapper`] - Maps IR types to target type expressions
//! - [`NamingConvention`] - Identifier casing and reserved words

mod dispatcher;
mod naming;
mod traits;

pub use dispatcher::Dispatcher;
pub use naming::{NamingConvention, unique_names};
pub use traits::{LanguageCodegen, TypeMapper, decode_options};
