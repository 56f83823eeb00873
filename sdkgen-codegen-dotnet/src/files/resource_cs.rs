//! Resource file generator, one `<Name>.cs` per resource.
//!
//! Each file holds the `CustomResource` subclass plus its `Args` and `State`
//! classes, all in the package namespace.

use sdkgen_codegen::{
    Result,
    builder::{CodeBuilder, CodeFragment, Renderable},
    language::TypeMapper,
};
use sdkgen_core::{SourceFile, to_camel_case};
use sdkgen_ir::{Property, PropertyType, Resource};
use sdkgen_schema::Language;

use super::{HEADER, cs_str};
use crate::{
    DotNetSettings,
    ast::{AutoProperty, XmlDoc},
    naming::DOTNET_NAMING,
    type_mapper::{DotNetTypeMapper, is_collection},
};

const USINGS: &[&str] = &[
    "using System;",
    "using System.Collections.Generic;",
    "using System.Collections.Immutable;",
    "using System.Threading.Tasks;",
    "using Pulumi.Serialization;",
];

/// A property of an `Args` or `State` class.
#[derive(Debug, Clone)]
struct ArgMember {
    wire: String,
    field: String,
    doc: Option<String>,
    required: bool,
    secret: bool,
    /// `Input<T>`, `InputList<T>` or `InputMap<T>`.
    ty: String,
    kind: PropertyType,
}

impl ArgMember {
    fn new(resource: &str, property: &Property, field: String, required: bool) -> Result<Self> {
        Ok(Self {
            wire: property.name.clone(),
            field,
            doc: property.description.clone(),
            required,
            secret: property.secret,
            ty: DotNetTypeMapper.input_type(resource, property)?,
            kind: property.ty.clone(),
        })
    }

    fn attribute(&self) -> String {
        if self.required {
            format!("Input({}, required: true)", cs_str(&self.wire))
        } else {
            format!("Input({})", cs_str(&self.wire))
        }
    }

    fn backing_field(&self) -> String {
        format!("_{}", to_camel_case(&self.field))
    }

    /// Collections are never null, and secrets go through a backing field
    /// so the setter can wrap them.
    fn needs_backing_field(&self) -> bool {
        self.secret || is_collection(&self.kind)
    }

    fn secret_setter(&self) -> Vec<CodeFragment> {
        let backing = self.backing_field();
        let (seed, assign) = match self.kind {
            PropertyType::StringArray => (
                "ImmutableArray.Create<string>()",
                format!("{} = Output.All(value, emptySecret).Apply(v => v[0]);", backing),
            ),
            PropertyType::StringMap => (
                "ImmutableDictionary.Create<string, string>()",
                format!("{} = Output.All(value, emptySecret).Apply(v => v[0]);", backing),
            ),
            _ => (
                "0",
                format!(
                    "{} = Output.Tuple<{}, int>(value, emptySecret).Apply(t => t.Item1);",
                    backing,
                    self.nullable_ty()
                ),
            ),
        };
        vec![braced(
            "set",
            vec![
                CodeFragment::line(format!("var emptySecret = Output.CreateSecret({});", seed)),
                CodeFragment::line(assign),
            ],
        )]
    }

    fn nullable_ty(&self) -> String {
        if self.required {
            self.ty.clone()
        } else {
            format!("{}?", self.ty)
        }
    }
}

impl Renderable for ArgMember {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let doc = XmlDoc::from_description(self.doc.as_deref());
        if !self.needs_backing_field() {
            let mut property = AutoProperty::new(&self.field, self.nullable_ty())
                .doc(doc)
                .attribute(self.attribute());
            if self.required {
                property = property.null_forgiving();
            }
            return property.to_fragments();
        }

        let backing = self.backing_field();
        let collection = is_collection(&self.kind);
        let field_decl = if self.required && !collection {
            format!("private {} {} = null!;", self.ty, backing)
        } else {
            format!("private {}? {};", self.ty, backing)
        };
        let (public_ty, getter) = if collection {
            (
                self.ty.clone(),
                format!("get => {0} ?? ({0} = new {1}());", backing, self.ty),
            )
        } else {
            (self.nullable_ty(), format!("get => {};", backing))
        };
        let setter = if self.secret {
            self.secret_setter()
        } else {
            vec![CodeFragment::line(format!("set => {} = value;", backing))]
        };

        let mut fragments = vec![
            CodeFragment::line(format!("[{}]", self.attribute())),
            CodeFragment::line(field_decl),
            CodeFragment::blank(),
        ];
        fragments.extend(doc.to_fragments());
        let mut accessors = vec![CodeFragment::line(getter)];
        accessors.extend(setter);
        fragments.push(braced(format!("public {} {}", public_ty, self.field), accessors));
        fragments
    }
}

#[derive(Debug, Clone)]
struct CsOutput {
    wire: String,
    field: String,
    doc: Option<String>,
    ty: String,
}

/// A resource class with its `Args` and `State` classes.
#[derive(Debug, Clone)]
pub struct ResourceCs {
    namespace: String,
    attribute: String,
    token: String,
    class_name: String,
    description: Option<String>,
    args: Vec<ArgMember>,
    state: Vec<ArgMember>,
    outputs: Vec<CsOutput>,
    secrets: Vec<String>,
}

impl ResourceCs {
    pub fn new(resource: &Resource, settings: &DotNetSettings) -> Result<Self> {
        let mapper = DotNetTypeMapper;
        let name = &resource.name;
        let class_name = DOTNET_NAMING.type_name(name);
        let fields = |props: &[Property]| -> Result<Vec<String>> {
            let mut fields = DOTNET_NAMING.field_names(Language::DotNet, name, props)?;
            // A member may not share its enclosing type's name.
            for field in fields.iter_mut().filter(|f| **f == class_name) {
                field.push_str("Value");
            }
            Ok(fields)
        };
        let input_fields = fields(&resource.inputs)?;
        let output_fields = fields(&resource.outputs)?;

        let args = resource
            .inputs
            .iter()
            .zip(input_fields)
            .map(|(p, field)| ArgMember::new(name, p, field, p.required))
            .collect::<Result<Vec<_>>>()?;
        let state = resource
            .outputs
            .iter()
            .zip(output_fields.iter().cloned())
            .map(|(p, field)| ArgMember::new(name, p, field, false))
            .collect::<Result<Vec<_>>>()?;
        let outputs = resource
            .outputs
            .iter()
            .zip(output_fields)
            .map(|(p, field)| {
                Ok(CsOutput {
                    wire: p.name.clone(),
                    field,
                    doc: p.description.clone(),
                    ty: mapper.output_type(name, p)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            namespace: settings.namespace.clone(),
            attribute: settings.resource_type_attribute(),
            token: resource.token.clone(),
            class_name,
            description: resource.description.clone(),
            args,
            state,
            outputs,
            secrets: resource
                .additional_secret_outputs()
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    fn args_name(&self) -> String {
        format!("{}Args", self.class_name)
    }

    fn state_name(&self) -> String {
        format!("{}State", self.class_name)
    }

    fn output_members(&self) -> Vec<Vec<CodeFragment>> {
        self.outputs
            .iter()
            .map(|output| {
                AutoProperty::new(&output.field, &output.ty)
                    .doc(XmlDoc::from_description(output.doc.as_deref()))
                    .attribute(format!("Output({})", cs_str(&output.wire)))
                    .private_set()
                    .null_forgiving()
                    .to_fragments()
            })
            .collect()
    }

    fn constructors(&self) -> Vec<Vec<CodeFragment>> {
        let class = &self.class_name;
        let token = cs_str(&self.token);
        let args = self.args_name();
        let args_param = if self.args.iter().any(|m| m.required) {
            format!("{} args", args)
        } else {
            format!("{}? args = null", args)
        };

        let mut public_ctor = XmlDoc::summary(&format!(
            "Create a {} resource with the given unique name, arguments, and options.",
            class
        ))
        .param("name", "The unique name of the resource")
        .param("args", "The arguments used to populate this resource's properties")
        .param("options", "A bag of options that control this resource's behavior")
        .to_fragments();
        public_ctor.extend(constructor(
            format!(
                "public {}(string name, {}, CustomResourceOptions? options = null)",
                class, args_param
            ),
            format!(
                ": base({}, name, args ?? new {}(), MakeResourceOptions(options, \"\"))",
                token, args
            ),
        ));

        let private_ctor = constructor(
            format!(
                "private {}(string name, Input<string> id, {}? state = null, CustomResourceOptions? options = null)",
                class,
                self.state_name()
            ),
            format!(": base({}, name, state, MakeResourceOptions(options, id))", token),
        );

        vec![public_ctor, private_ctor]
    }

    fn make_resource_options(&self) -> Vec<CodeFragment> {
        let mut defaults = vec![CodeFragment::line("Version = Utilities.Version,")];
        if !self.secrets.is_empty() {
            defaults.push(CodeFragment::line("AdditionalSecretOutputs ="));
            defaults.push(CodeFragment::block(
                "{",
                self.secrets
                    .iter()
                    .map(|s| CodeFragment::line(format!("{},", cs_str(s))))
                    .collect(),
                Some("},".to_string()),
            ));
        }
        vec![braced(
            "private static CustomResourceOptions MakeResourceOptions(CustomResourceOptions? options, Input<string>? id)",
            vec![
                CodeFragment::line("var defaultOptions = new CustomResourceOptions"),
                CodeFragment::block("{", defaults, Some("};".to_string())),
                CodeFragment::line(
                    "var merged = CustomResourceOptions.Merge(defaultOptions, options);",
                ),
                CodeFragment::line("merged.Id = id ?? merged.Id;"),
                CodeFragment::line("return merged;"),
            ],
        )]
    }

    fn get_method(&self) -> Vec<CodeFragment> {
        let class = &self.class_name;
        let mut fragments = XmlDoc::summary(&format!(
            "Get an existing {} resource's state with the given name, ID, and optional extra\n\
             properties used to qualify the lookup.",
            class
        ))
        .param("name", "The unique name of the resulting resource.")
        .param("id", "The unique provider ID of the resource to lookup.")
        .param("state", "Any extra arguments used during the lookup.")
        .param("options", "A bag of options that control this resource's behavior")
        .to_fragments();
        fragments.push(braced(
            format!(
                "public static {} Get(string name, Input<string> id, {}? state = null, CustomResourceOptions? options = null)",
                class,
                self.state_name()
            ),
            vec![CodeFragment::line(format!(
                "return new {}(name, id, state, options);",
                class
            ))],
        ));
        fragments
    }

    fn resource_class(&self) -> Vec<CodeFragment> {
        let mut members = self.output_members();
        members.extend(self.constructors());
        members.push(self.make_resource_options());
        members.push(self.get_method());

        let mut fragments = XmlDoc::from_description(self.description.as_deref()).to_fragments();
        fragments.push(CodeFragment::line(format!(
            "[{}({})]",
            self.attribute,
            cs_str(&self.token)
        )));
        fragments.push(braced(
            format!(
                "public partial class {} : global::Pulumi.CustomResource",
                self.class_name
            ),
            separated(members),
        ));
        fragments
    }

    fn args_class(&self, name: &str, members: &[ArgMember]) -> Vec<CodeFragment> {
        let mut groups: Vec<Vec<CodeFragment>> =
            members.iter().map(Renderable::to_fragments).collect();
        groups.push(vec![
            braced(format!("public {}()", name), Vec::new()),
            CodeFragment::line(format!(
                "public static new {0} Empty => new {0}();",
                name
            )),
        ]);
        vec![braced(
            format!("public sealed class {} : global::Pulumi.ResourceArgs", name),
            separated(groups),
        )]
    }
}

impl SourceFile for ResourceCs {
    fn path(&self) -> String {
        format!("{}.cs", DOTNET_NAMING.file_name(&self.class_name))
    }

    fn render(&self) -> String {
        let body = separated(vec![
            self.resource_class(),
            self.args_class(&self.args_name(), &self.args),
            self.args_class(&self.state_name(), &self.state),
        ]);
        let mut builder = CodeBuilder::csharp();
        builder.push_raw(HEADER).push_blank();
        for using in USINGS {
            builder.push_line(using);
        }
        builder.push_blank();
        builder.emit(&braced(format!("namespace {}", self.namespace), body));
        builder.build()
    }
}

/// `header` followed by a brace-delimited body, C# style.
fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> CodeFragment {
    CodeFragment::sequence(vec![
        CodeFragment::line(header),
        CodeFragment::block("{", body, Some("}".to_string())),
    ])
}

fn constructor(signature: String, base_call: String) -> Vec<CodeFragment> {
    vec![
        CodeFragment::line(signature),
        CodeFragment::indent(vec![CodeFragment::line(base_call)]),
        CodeFragment::line("{"),
        CodeFragment::line("}"),
    ]
}

/// Concatenate groups with a blank line between each.
fn separated(groups: Vec<Vec<CodeFragment>>) -> Vec<CodeFragment> {
    let mut out = Vec::new();
    for (i, group) in groups.into_iter().enumerate() {
        if i > 0 {
            out.push(CodeFragment::blank());
        }
        out.extend(group);
    }
    out
}

#[cfg(test)]
mod tests {
    use sdkgen_codegen::{generation::DependencyCollector, testing::vector_store_package};

    use super::*;

    fn settings() -> DotNetSettings {
        DotNetSettings {
            namespace: "Pulumi.Openai".to_string(),
            package_class: "Openai".to_string(),
            package_references: DependencyCollector::new(),
        }
    }

    fn vector_store() -> ResourceCs {
        let package = vector_store_package();
        ResourceCs::new(&package.resources[0], &settings()).unwrap()
    }

    #[test]
    fn test_path_and_layout() {
        let file = vector_store();
        assert_eq!(file.path(), "VectorStore.cs");
        let content = file.render();
        assert!(content.starts_with(HEADER));
        assert!(content.contains("using Pulumi.Serialization;\n\nnamespace Pulumi.Openai\n{\n"));
        assert!(content.contains(
            "    [OpenaiResourceType(\"openai:index:VectorStore\")]\n    public partial class VectorStore : global::Pulumi.CustomResource\n    {\n"
        ));
        assert!(content.ends_with("    }\n}\n"));
    }

    #[test]
    fn test_outputs() {
        let content = vector_store().render();
        assert!(content.contains(
            "        [Output(\"createdAt\")]\n        public Output<double> CreatedAt { get; private set; } = null!;\n"
        ));
        assert!(content.contains("public Output<string> IdValue { get; private set; } = null!;"));
    }

    #[test]
    fn test_constructors_and_get() {
        let content = vector_store().render();
        assert!(content.contains(
            "        public VectorStore(string name, VectorStoreArgs args, CustomResourceOptions? options = null)\n            : base(\"openai:index:VectorStore\", name, args ?? new VectorStoreArgs(), MakeResourceOptions(options, \"\"))\n        {\n        }\n"
        ));
        assert!(content.contains(
            "public static VectorStore Get(string name, Input<string> id, VectorStoreState? state = null, CustomResourceOptions? options = null)"
        ));
        assert!(content.contains("            return new VectorStore(name, id, state, options);\n"));
    }

    #[test]
    fn test_additional_secret_outputs() {
        let content = vector_store().render();
        assert!(content.contains(
            "                AdditionalSecretOutputs =\n                {\n                    \"apiKey\",\n                },\n"
        ));
        assert!(content.contains("                merged.Id = id ?? merged.Id;\n"));
    }

    #[test]
    fn test_args_members() {
        let content = vector_store().render();
        assert!(content.contains("    public sealed class VectorStoreArgs : global::Pulumi.ResourceArgs\n"));
        assert!(content.contains(
            "        [Input(\"name\", required: true)]\n        public Input<string> Name { get; set; } = null!;\n"
        ));
        assert!(content.contains(
            "        [Input(\"fileIds\")]\n        private InputList<string>? _fileIds;\n\n        public InputList<string> FileIds\n        {\n            get => _fileIds ?? (_fileIds = new InputList<string>());\n            set => _fileIds = value;\n        }\n"
        ));
        assert!(content.contains("public static new VectorStoreArgs Empty => new VectorStoreArgs();"));
    }

    #[test]
    fn test_secret_input_is_wrapped() {
        let content = vector_store().render();
        assert!(content.contains("        private Input<string>? _apiKey;\n"));
        assert!(content.contains(
            "            set\n            {\n                var emptySecret = Output.CreateSecret(0);\n                _apiKey = Output.Tuple<Input<string>?, int>(value, emptySecret).Apply(t => t.Item1);\n            }\n"
        ));
    }

    #[test]
    fn test_state_members_are_optional() {
        let content = vector_store().render();
        let state = &content[content.find("class VectorStoreState").unwrap()..];
        assert!(state.contains("        [Input(\"createdAt\")]\n        public Input<double>? CreatedAt { get; set; }\n"));
        assert!(!state.contains("required: true"));
    }

    #[test]
    fn test_member_named_like_class_is_suffixed() {
        let resource = Resource {
            token: "openai:index:Label".to_string(),
            module: "index".to_string(),
            name: "Label".to_string(),
            description: None,
            inputs: vec![Property::new("label", PropertyType::String).required()],
            outputs: Vec::new(),
        };
        let content = ResourceCs::new(&resource, &settings()).unwrap().render();
        assert!(content.contains("public Input<string> LabelValue { get; set; } = null!;"));
        assert!(content.contains("public LabelArgs()"));
    }
}
