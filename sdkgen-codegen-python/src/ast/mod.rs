//! Python AST builders.

mod docstring;
mod property;

pub use docstring::Docstring;
pub use property::PyProperty;
