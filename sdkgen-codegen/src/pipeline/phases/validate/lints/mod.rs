//! Built-in lints.

mod duplicate_resource;
mod empty_description;
mod property_naming;
mod secret_output;

pub use duplicate_resource::DuplicateResourceLint;
pub use empty_description::EmptyDescriptionLint;
pub use property_naming::PropertyNamingLint;
pub use secret_output::SecretOutputLint;
