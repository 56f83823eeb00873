//! Auto-implemented properties.

use sdkgen_codegen::builder::{CodeFragment, Renderable};

use super::XmlDoc;

/// A `public T Name { get; set; }` property with optional attribute,
/// documentation and initializer.
#[derive(Debug, Clone)]
pub struct AutoProperty {
    pub name: String,
    pub ty: String,
    pub doc: XmlDoc,
    /// Attribute without brackets, e.g. `Output("id")`.
    pub attribute: Option<String>,
    pub accessors: &'static str,
    pub initializer: Option<&'static str>,
}

impl AutoProperty {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: XmlDoc::default(),
            attribute: None,
            accessors: "{ get; set; }",
            initializer: None,
        }
    }

    pub fn doc(mut self, doc: XmlDoc) -> Self {
        self.doc = doc;
        self
    }

    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Settable only from inside the declaring class.
    pub fn private_set(mut self) -> Self {
        self.accessors = "{ get; private set; }";
        self
    }

    /// Initialize with `null!`, for non-nullable properties the runtime fills.
    pub fn null_forgiving(mut self) -> Self {
        self.initializer = Some("null!");
        self
    }
}

impl Renderable for AutoProperty {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.doc.to_fragments();
        if let Some(attribute) = &self.attribute {
            fragments.push(CodeFragment::line(format!("[{}]", attribute)));
        }
        let mut declaration = format!("public {} {} {}", self.ty, self.name, self.accessors);
        if let Some(init) = self.initializer {
            declaration.push_str(&format!(" = {};", init));
        }
        fragments.push(CodeFragment::line(declaration));
        fragments
    }
}
