//! `///` XML documentation comments.

use sdkgen_codegen::builder::{CodeFragment, Renderable};

/// Escape text for XML element content and attribute values.
pub fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// A `<summary>` doc comment followed by optional `<param>` tags.
#[derive(Debug, Clone, Default)]
pub struct XmlDoc {
    summary: Vec<String>,
    params: Vec<(String, String)>,
}

impl XmlDoc {
    pub fn summary(text: &str) -> Self {
        Self {
            summary: text.lines().map(|l| xml_escape(l.trim_end())).collect(),
            params: Vec::new(),
        }
    }

    /// Summary from an optional description; empty when absent.
    pub fn from_description(text: Option<&str>) -> Self {
        text.map(Self::summary).unwrap_or_default()
    }

    pub fn param(mut self, name: &str, text: &str) -> Self {
        self.params.push((name.to_string(), xml_escape(text)));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.params.is_empty()
    }
}

impl Renderable for XmlDoc {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.is_empty() {
            return Vec::new();
        }
        let mut fragments = vec![CodeFragment::line("/// <summary>")];
        fragments.extend(self.summary.iter().map(|line| {
            if line.is_empty() {
                CodeFragment::line("///")
            } else {
                CodeFragment::line(format!("/// {}", line))
            }
        }));
        fragments.push(CodeFragment::line("/// </summary>"));
        if !self.params.is_empty() {
            fragments.push(CodeFragment::line("///"));
        }
        fragments.extend(self.params.iter().map(|(name, text)| {
            CodeFragment::line(format!("/// <param name=\"{}\">{}</param>", name, text))
        }));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use sdkgen_codegen::builder::CodeBuilder;

    use super::*;

    #[test]
    fn test_summary_is_escaped() {
        let mut builder = CodeBuilder::csharp();
        builder.emit(&XmlDoc::summary("Maps <key> & value"));
        assert_eq!(
            builder.build(),
            "/// <summary>\n/// Maps &lt;key&gt; &amp; value\n/// </summary>\n"
        );
    }

    #[test]
    fn test_params_follow_summary() {
        let doc = XmlDoc::summary("Create a resource.")
            .param("name", "The unique name of the resource");
        let mut builder = CodeBuilder::csharp();
        builder.emit(&doc);
        insta::assert_snapshot!(builder.build(), @r#"
        /// <summary>
        /// Create a resource.
        /// </summary>
        ///
        /// <param name="name">The unique name of the resource</param>
        "#);
    }

    #[test]
    fn test_missing_description_renders_nothing() {
        assert!(XmlDoc::from_description(None).to_fragments().is_empty());
    }
}
