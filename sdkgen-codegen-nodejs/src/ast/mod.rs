//! TypeScript AST builders for imports, exports and interfaces.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod exports;
mod imports;
mod interface;

pub use exports::Export;
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
