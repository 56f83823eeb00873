//! `@property` accessors backed by `pulumi.get`.

use sdkgen_codegen::builder::{CodeFragment, Renderable};

use super::Docstring;

/// A property getter, and optionally its setter, on an input type or a
/// resource class.
#[derive(Debug, Clone)]
pub struct PyProperty {
    /// Python attribute name.
    name: String,
    /// Name on the wire, when it differs from `name`.
    wire: Option<String>,
    ty: String,
    doc: Option<String>,
    setter: bool,
}

impl PyProperty {
    pub fn new(name: impl Into<String>, wire: &str, ty: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            wire: (name != wire).then(|| wire.to_string()),
            name,
            ty: ty.into(),
            doc: None,
            setter: false,
        }
    }

    pub fn doc(mut self, doc: Option<&str>) -> Self {
        self.doc = doc.map(str::to_string);
        self
    }

    pub fn with_setter(mut self) -> Self {
        self.setter = true;
        self
    }
}

impl Renderable for PyProperty {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let getter = match &self.wire {
            Some(wire) => format!("@pulumi.getter(name=\"{}\")", wire),
            None => "@pulumi.getter".to_string(),
        };
        let mut body = Docstring::new()
            .text(self.doc.as_deref().unwrap_or_default())
            .to_fragments();
        body.push(CodeFragment::line(format!(
            "return pulumi.get(self, \"{}\")",
            self.name
        )));

        let mut fragments = vec![
            CodeFragment::line("@property"),
            CodeFragment::line(getter),
            CodeFragment::block(format!("def {}(self) -> {}:", self.name, self.ty), body, None),
        ];
        if self.setter {
            fragments.push(CodeFragment::blank());
            fragments.push(CodeFragment::line(format!("@{}.setter", self.name)));
            fragments.push(CodeFragment::block(
                format!("def {}(self, value: {}):", self.name, self.ty),
                vec![CodeFragment::line(format!(
                    "pulumi.set(self, \"{}\", value)",
                    self.name
                ))],
                None,
            ));
        }
        fragments
    }
}
