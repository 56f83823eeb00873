//! Go function builder.

use sdkgen_codegen::builder::{CodeFragment, Renderable};

/// Builder for Go functions and methods.
#[derive(Debug, Clone)]
pub struct Func {
    name: String,
    doc: Option<String>,
    receiver: Option<String>,
    params: String,
    returns: Option<String>,
    body: Vec<CodeFragment>,
}

impl Func {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            receiver: None,
            params: String::new(),
            returns: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn doc_opt(mut self, doc: Option<&str>) -> Self {
        self.doc = doc.map(str::to_string);
        self
    }

    /// Make this a method, e.g. `o VectorStoreOutput` or a bare type.
    pub fn receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    /// Parameter list without parentheses. May span lines.
    pub fn params(mut self, params: impl Into<String>) -> Self {
        self.params = params.into();
        self
    }

    pub fn returns(mut self, returns: impl Into<String>) -> Self {
        self.returns = Some(returns.into());
        self
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    pub fn body(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }

    fn signature(&self) -> String {
        let receiver = self
            .receiver
            .as_ref()
            .map(|r| format!("({}) ", r))
            .unwrap_or_default();
        let returns = self
            .returns
            .as_ref()
            .map(|r| format!(" {}", r))
            .unwrap_or_default();
        format!(
            "func {}{}({}){} {{",
            receiver, self.name, self.params, returns
        )
    }
}

impl Renderable for Func {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::comment("//", doc.clone()));
        }
        fragments.push(CodeFragment::block(
            self.signature(),
            self.body.clone(),
            Some("}".to_string()),
        ));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use sdkgen_codegen::builder::CodeBuilder;

    use super::*;

    fn render(node: &Func) -> String {
        let mut code = CodeBuilder::go();
        code.emit(node);
        code.build()
    }

    #[test]
    fn test_method() {
        let node = Func::new("ElementType")
            .receiver("VectorStoreArgs")
            .returns("reflect.Type")
            .line("return reflect.TypeOf((*vectorStoreArgs)(nil)).Elem()");
        assert_eq!(
            render(&node),
            "func (VectorStoreArgs) ElementType() reflect.Type {\n\treturn reflect.TypeOf((*vectorStoreArgs)(nil)).Elem()\n}\n"
        );
    }

    #[test]
    fn test_documented_function_without_returns() {
        let node = Func::new("init")
            .doc("Registers types.")
            .line("pulumi.RegisterOutputType(VectorStoreOutput{})");
        assert_eq!(
            render(&node),
            "// Registers types.\nfunc init() {\n\tpulumi.RegisterOutputType(VectorStoreOutput{})\n}\n"
        );
    }
}
