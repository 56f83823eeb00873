//! Go struct builder.

use sdkgen_codegen::builder::{CodeFragment, Renderable};

/// A field in a Go struct.
#[derive(Debug, Clone)]
pub struct StructField {
    pub name: String,
    pub ty: String,
    /// Wire name written as a `pulumi:"..."` tag.
    pub tag: Option<String>,
    pub doc: Option<String>,
}

impl StructField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            tag: None,
            doc: None,
        }
    }

    pub fn tag(mut self, wire_name: impl Into<String>) -> Self {
        self.tag = Some(wire_name.into());
        self
    }

    pub fn doc(mut self, doc: Option<&str>) -> Self {
        self.doc = doc.map(str::to_string);
        self
    }

    fn declaration(&self, name_width: usize, type_width: usize) -> String {
        match &self.tag {
            Some(tag) => format!(
                "{:<nw$} {:<tw$} `pulumi:\"{}\"`",
                self.name,
                self.ty,
                tag,
                nw = name_width,
                tw = type_width
            ),
            None => format!("{:<nw$} {}", self.name, self.ty, nw = name_width),
        }
    }
}

/// Field declarations padded the way gofmt aligns them.
///
/// A comment line ends an alignment run, so every documented field starts a
/// new one. Within a run names share one column, and types share a column
/// across each stretch of tagged fields.
fn aligned(fields: &[StructField]) -> Vec<String> {
    let mut lines = Vec::with_capacity(fields.len());
    let mut start = 0;
    while start < fields.len() {
        let end = fields[start + 1..]
            .iter()
            .position(|f| f.doc.is_some())
            .map_or(fields.len(), |i| start + 1 + i);
        let run = &fields[start..end];
        let name_width = run.iter().map(|f| f.name.chars().count()).max().unwrap_or(0);

        let mut type_widths = vec![0; run.len()];
        let mut i = 0;
        while i < run.len() {
            let stretch = run[i..].iter().take_while(|f| f.tag.is_some()).count();
            let width = run[i..i + stretch]
                .iter()
                .map(|f| f.ty.chars().count())
                .max()
                .unwrap_or(0);
            type_widths[i..i + stretch].fill(width);
            i += stretch.max(1);
        }

        lines.extend(
            run.iter()
                .zip(type_widths)
                .map(|(field, type_width)| field.declaration(name_width, type_width)),
        );
        start = end;
    }
    lines
}

/// Builder for Go struct types.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    doc: Option<String>,
    embedded: Vec<String>,
    fields: Vec<StructField>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            embedded: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Embed a type, e.g. `pulumi.CustomResourceState`.
    pub fn embed(mut self, ty: impl Into<String>) -> Self {
        self.embedded.push(ty.into());
        self
    }

    pub fn field(mut self, field: StructField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = StructField>) -> Self {
        self.fields.extend(fields);
        self
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::comment("//", doc.clone()));
        }

        let mut body: Vec<CodeFragment> = self
            .embedded
            .iter()
            .map(|ty| CodeFragment::line(ty.clone()))
            .collect();
        if !self.embedded.is_empty() && !self.fields.is_empty() {
            body.push(CodeFragment::blank());
        }
        for (field, declaration) in self.fields.iter().zip(aligned(&self.fields)) {
            if let Some(doc) = &field.doc {
                body.push(CodeFragment::comment("//", doc.clone()));
            }
            body.push(CodeFragment::line(declaration));
        }

        fragments.push(CodeFragment::block(
            format!("type {} struct {{", self.name),
            body,
            Some("}".to_string()),
        ));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use sdkgen_codegen::builder::CodeBuilder;

    use super::*;

    fn render(node: &Struct) -> String {
        let mut code = CodeBuilder::go();
        code.emit(node);
        code.build()
    }

    #[test]
    fn test_resource_struct() {
        let node = Struct::new("VectorStore")
            .embed("pulumi.CustomResourceState")
            .field(
                StructField::new("Name", "pulumi.StringOutput")
                    .tag("name")
                    .doc(Some("The name of the vector store.")),
            );
        assert_eq!(
            render(&node),
            "type VectorStore struct {\n\tpulumi.CustomResourceState\n\n\t// The name of the vector store.\n\tName pulumi.StringOutput `pulumi:\"name\"`\n}\n"
        );
    }

    #[test]
    fn test_empty_struct() {
        let node = Struct::new("vectorStoreState").doc("Lookup state.");
        assert_eq!(
            render(&node),
            "// Lookup state.\ntype vectorStoreState struct {\n}\n"
        );
    }

    #[test]
    fn test_untagged_field() {
        let node = Struct::new("VectorStoreArgs").field(StructField::new("Name", "pulumi.StringInput"));
        assert_eq!(
            render(&node),
            "type VectorStoreArgs struct {\n\tName pulumi.StringInput\n}\n"
        );
    }

    #[test]
    fn test_undocumented_fields_are_aligned() {
        let node = Struct::new("vectorStoreState").fields([
            StructField::new("ApiKey", "*string").tag("apiKey"),
            StructField::new("FileIds", "[]string").tag("fileIds"),
            StructField::new("Metadata", "map[string]string").tag("metadata"),
        ]);
        assert_eq!(
            render(&node),
            "type vectorStoreState struct {\n\tApiKey   *string           `pulumi:\"apiKey\"`\n\tFileIds  []string          `pulumi:\"fileIds\"`\n\tMetadata map[string]string `pulumi:\"metadata\"`\n}\n"
        );

    }

    #[test]
    fn test_doc_comment_ends_alignment_run() {
        let node = Struct::new("VectorStoreArgs").fields([
            StructField::new("ApiKey", "pulumi.StringPtrInput"),
            StructField::new("FileIds", "pulumi.StringArrayInput"),
            StructField::new("Name", "pulumi.StringInput").doc(Some("The name.")),
            StructField::new("Metadata", "pulumi.StringMapInput"),
        ]);
        assert_eq!(
            render(&node),
            "type VectorStoreArgs struct {\n\tApiKey  pulumi.StringPtrInput\n\tFileIds pulumi.StringArrayInput\n\t// The name.\n\tName     pulumi.StringInput\n\tMetadata pulumi.StringMapInput\n}\n"
        );
    }
}
