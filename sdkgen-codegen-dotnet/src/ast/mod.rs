//! C# declaration nodes.

mod property;
mod xml_doc;

pub use property::AutoProperty;
pub use xml_doc::{XmlDoc, xml_escape};
