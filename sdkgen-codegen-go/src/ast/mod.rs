//! Go declaration builders.

mod func;
mod imports;
mod structs;

pub use func::Func;
pub use imports::ImportBlock;
pub use structs::{Struct, StructField};
