//! Resource class generator, one `<camel>.ts` per resource.

use sdkgen_codegen::{
    Error, Result,
    builder::{CodeFragment, Renderable},
    language::TypeMapper,
};
use sdkgen_core::SourceFile;
use sdkgen_ir::{Property, PropertyType, Resource};
use sdkgen_schema::Language;

use crate::{
    ast::{Import, Interface, InterfaceField},
    code_file::CodeFile,
    naming::{INHERITED_METHODS, TS_NAMING, member_access, member_name},
    type_mapper::NodeTypeMapper,
};

#[derive(Debug, Clone)]
struct Member {
    wire: String,
    /// Class field and interface key, the wire name quoted when needed.
    field: String,
    doc: Option<String>,
    ty: String,
    required: bool,
    secret: bool,
    /// Outputs only: whether the value is also an input.
    is_input: bool,
}

/// Output field type. `id` and `urn` redeclare the base class members, so
/// they keep the base type whatever the schema says about presence.
fn output_type(mapper: &NodeTypeMapper, resource: &str, property: &Property) -> Result<String> {
    if INHERITED_METHODS.contains(&property.name.as_str()) {
        return Err(Error::generation(
            Language::NodeJs,
            format!(
                "output '{}' of resource '{}' would shadow pulumi.CustomResource.{}",
                property.name, resource, property.name
            ),
        ));
    }
    if property.is_resource_identity() {
        if property.ty != PropertyType::String {
            return Err(Error::identity_type(Language::NodeJs, resource, property));
        }
        return Ok("pulumi.Output<string>".to_string());
    }
    mapper.output_type(resource, property)
}

/// A `pulumi.CustomResource` subclass and its arguments interface.
#[derive(Debug, Clone)]
pub struct ResourceTs {
    token: String,
    class_name: String,
    file_stem: String,
    description: Option<String>,
    inputs: Vec<Member>,
    outputs: Vec<Member>,
    secrets: Vec<String>,
}

impl ResourceTs {
    pub fn new(resource: &Resource) -> Result<Self> {
        let mapper = NodeTypeMapper;

        let inputs = resource
            .inputs
            .iter()
            .map(|p| {
                Ok(Member {
                    wire: p.name.clone(),
                    field: member_name(&p.name),
                    doc: p.description.clone(),
                    ty: mapper.input_type(&resource.name, p)?,
                    required: p.required,
                    secret: p.secret,
                    is_input: true,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let outputs = resource
            .outputs
            .iter()
            .map(|p| {
                Ok(Member {
                    wire: p.name.clone(),
                    field: member_name(&p.name),
                    doc: p.description.clone(),
                    ty: output_type(&mapper, &resource.name, p)?,
                    required: p.required,
                    secret: p.secret,
                    is_input: resource.is_input(&p.name),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            token: resource.token.clone(),
            class_name: TS_NAMING.type_name(&resource.name),
            file_stem: TS_NAMING.file_name(&resource.name),
            description: resource.description.clone(),
            inputs,
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

    pub fn file_stem(&self) -> &str {
        &self.file_stem
    }

    fn args_name(&self) -> String {
        format!("{}Args", self.class_name)
    }

    fn has_required_inputs(&self) -> bool {
        self.inputs.iter().any(|m| m.required)
    }

    /// Every wire name the engine may report, sorted.
    fn all_wire_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .inputs
            .iter()
            .chain(&self.outputs)
            .map(|m| m.wire.as_str())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    fn args_interface(&self) -> Interface {
        Interface::new(self.args_name())
            .doc(format!(
                "The set of arguments for constructing a {} resource.",
                self.class_name
            ))
            .fields(self.inputs.iter().map(|m| {
                InterfaceField::new(&m.field, &m.ty)
                    .optional(!m.required)
                    .doc(m.doc.as_deref())
            }))
    }

    fn static_members(&self) -> Vec<CodeFragment> {
        let class = &self.class_name;
        vec![
            CodeFragment::jsdoc(format!(
                "Get an existing {} resource's state with the given name and ID.\n\n\
                 @param name The _unique_ name of the resulting resource.\n\
                 @param id The _unique_ provider ID of the resource to lookup.\n\
                 @param opts Optional settings to control the behavior of the CustomResource.",
                class
            )),
            CodeFragment::block(
                format!(
                    "public static get(name: string, id: pulumi.Input<pulumi.ID>, opts?: pulumi.CustomResourceOptions): {} {{",
                    class
                ),
                vec![CodeFragment::line(format!(
                    "return new {}(name, undefined as any, {{ ...opts, id: id }});",
                    class
                ))],
                Some("}".to_string()),
            ),
            CodeFragment::blank(),
            CodeFragment::line("/** @internal */"),
            CodeFragment::line(format!(
                "public static readonly __pulumiType = \"{}\";",
                self.token
            )),
            CodeFragment::blank(),
            CodeFragment::jsdoc(format!(
                "Returns true if the given object is an instance of {}. This is designed to work even\n\
                 when multiple copies of the Pulumi SDK have been loaded into the same process.",
                class
            )),
            CodeFragment::block(
                format!("public static isInstance(obj: any): obj is {} {{", class),
                vec![
                    CodeFragment::block(
                        "if (obj === undefined || obj === null) {",
                        vec![CodeFragment::line("return false;")],
                        Some("}".to_string()),
                    ),
                    CodeFragment::line(format!(
                        "return obj[\"__pulumiType\"] === {}.__pulumiType;",
                        class
                    )),
                ],
                Some("}".to_string()),
            ),
        ]
    }

    fn output_members(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        for output in &self.outputs {
            if let Some(doc) = &output.doc {
                fragments.push(CodeFragment::jsdoc(doc.clone()));
            }
            let marker = if output.is_input { "" } else { "/*out*/ " };
            fragments.push(CodeFragment::line(format!(
                "public {}readonly {}!: {};",
                marker, output.field, output.ty
            )));
        }
        fragments
    }

    fn create_branch(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        for input in self.inputs.iter().filter(|m| m.required) {
            body.push(CodeFragment::block(
                format!(
                    "if ((!args || {} === undefined) && !opts.urn) {{",
                    member_access("args", &input.wire, false)
                ),
                vec![CodeFragment::line(format!(
                    "throw new Error(\"Missing required property '{}'\");",
                    input.wire
                ))],
                Some("}".to_string()),
            ));
        }
        for input in &self.inputs {
            let value = if input.secret {
                format!(
                    "{} ? pulumi.secret({}) : undefined",
                    member_access("args", &input.wire, true),
                    member_access("args", &input.wire, false)
                )
            } else {
                format!(
                    "args ? {} : undefined",
                    member_access("args", &input.wire, false)
                )
            };
            body.push(CodeFragment::line(format!(
                "resourceInputs[\"{}\"] = {};",
                input.wire, value
            )));
        }
        for output in self.outputs.iter().filter(|m| !m.is_input) {
            body.push(CodeFragment::line(format!(
                "resourceInputs[\"{}\"] = undefined /*out*/;",
                output.wire
            )));
        }
        body
    }

    fn constructor(&self) -> Vec<CodeFragment> {
        let class = &self.class_name;
        let args_optional = if self.has_required_inputs() { "" } else { "?" };

        let mut body = vec![
            CodeFragment::line("let resourceInputs: pulumi.Inputs = {};"),
            CodeFragment::line("opts = opts || {};"),
            CodeFragment::block(
                "if (!opts.id) {",
                self.create_branch(),
                Some("} else {".to_string()),
            ),
            CodeFragment::indent(
                self.all_wire_names()
                    .into_iter()
                    .map(|wire| {
                        CodeFragment::line(format!("resourceInputs[\"{}\"] = undefined /*out*/;", wire))
                    })
                    .collect(),
            ),
            CodeFragment::line("}"),
            CodeFragment::line("opts = pulumi.mergeOptions(utilities.resourceOptsDefaults(), opts);"),
        ];
        if !self.secrets.is_empty() {
            let quoted: Vec<String> = self.secrets.iter().map(|s| format!("\"{}\"", s)).collect();
            body.push(CodeFragment::line(format!(
                "const secretOpts = {{ additionalSecretOutputs: [{}] }};",
                quoted.join(", ")
            )));
            body.push(CodeFragment::line("opts = pulumi.mergeOptions(opts, secretOpts);"));
        }
        body.push(CodeFragment::line(format!(
            "super({}.__pulumiType, name, resourceInputs, opts);",
            class
        )));

        vec![
            CodeFragment::jsdoc(format!(
                "Create a {} resource with the given unique name, arguments, and options.\n\n\
                 @param name The _unique_ name of the resource.\n\
                 @param args The arguments to use to populate this resource's properties.\n\
                 @param opts A bag of options that control this resource's behavior.",
                class
            )),
            CodeFragment::block(
                format!(
                    "constructor(name: string, args{}: {}, opts?: pulumi.CustomResourceOptions) {{",
                    args_optional,
                    self.args_name()
                ),
                body,
                Some("}".to_string()),
            ),
        ]
    }
}

impl Renderable for ResourceTs {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut members = self.static_members();
        if !self.outputs.is_empty() {
            members.push(CodeFragment::blank());
            members.extend(self.output_members());
        }
        members.push(CodeFragment::blank());
        members.extend(self.constructor());

        let mut fragments = Vec::new();
        if let Some(doc) = &self.description {
            fragments.push(CodeFragment::jsdoc(doc.clone()));
        }
        fragments.push(CodeFragment::block(
            format!("export class {} extends pulumi.CustomResource {{", self.class_name),
            members,
            Some("}".to_string()),
        ));
        fragments
    }
}

impl SourceFile for ResourceTs {
    fn path(&self) -> String {
        format!("{}.ts", self.file_stem)
    }

    fn render(&self) -> String {
        CodeFile::generated()
            .import(Import::new("@pulumi/pulumi").namespace("pulumi"))
            .import(Import::new("./utilities").namespace("utilities"))
            .add(self)
            .add(self.args_interface())
            .render()
    }
}

#[cfg(test)]
mod tests {
    use sdkgen_codegen::testing::{nested_object_package, vector_store_package};

    use super::*;

    fn vector_store() -> ResourceTs {
        ResourceTs::new(&vector_store_package().resources[0]).unwrap()
    }

    #[test]
    fn test_class_shape() {
        let content = vector_store().render();
        assert!(content.contains("/** A vector store */\nexport class VectorStore extends pulumi.CustomResource {\n"));
        assert!(content.contains("  public static readonly __pulumiType = \"openai:index:VectorStore\";\n"));
        assert!(content.contains("  public /*out*/ readonly createdAt!: pulumi.Output<number>;\n"));
        assert!(content.contains("  public readonly name!: pulumi.Output<string>;\n"));
        assert!(content.contains(
            "  constructor(name: string, args: VectorStoreArgs, opts?: pulumi.CustomResourceOptions) {\n"
        ));
    }

    #[test]
    fn test_constructor_body() {
        let content = vector_store().render();
        assert!(content.contains(
            "      if ((!args || args.name === undefined) && !opts.urn) {\n        throw new Error(\"Missing required property 'name'\");\n      }\n"
        ));
        assert!(content.contains(
            "      resourceInputs[\"apiKey\"] = args?.apiKey ? pulumi.secret(args.apiKey) : undefined;\n"
        ));
        assert!(content.contains("      resourceInputs[\"fileIds\"] = args ? args.fileIds : undefined;\n"));
        assert!(content.contains("      resourceInputs[\"status\"] = undefined /*out*/;\n    } else {\n"));
        assert!(content.contains(
            "    const secretOpts = { additionalSecretOutputs: [\"apiKey\"] };\n"
        ));
        assert!(content.contains("    super(VectorStore.__pulumiType, name, resourceInputs, opts);\n"));
    }

    #[test]
    fn test_args_interface() {
        let content = vector_store().render();
        assert!(content.contains("export interface VectorStoreArgs {\n"));
        assert!(content.contains("  fileIds?: pulumi.Input<pulumi.Input<string>[]>;\n"));
        assert!(content.contains(
            "  /** The name of the vector store. */\n  name: pulumi.Input<string>;\n"
        ));
    }

    #[test]
    fn test_optional_args_without_required_inputs() {
        let mut resource = vector_store_package().resources[0].clone();
        resource.inputs = vec![Property::new("status", PropertyType::String)];
        let content = ResourceTs::new(&resource).unwrap().render();
        assert!(content.contains("args?: VectorStoreArgs"));
        assert!(!content.contains("secretOpts"));
    }

    #[test]
    fn test_nested_object_input() {
        let resource = &nested_object_package().resources[0];
        let content = ResourceTs::new(resource).unwrap().render();
        assert!(content.contains(
            "  toolResources?: pulumi.Input<{ vectorStoreIds: pulumi.Input<pulumi.Input<string>[]> }>;\n"
        ));
    }

    #[test]
    fn test_reserved_word_members_keep_wire_name() {
        let mut resource = vector_store_package().resources[0].clone();
        resource.inputs = vec![Property::new("class", PropertyType::String)];
        resource
            .outputs
            .push(Property::new("class", PropertyType::String));
        let content = ResourceTs::new(&resource).unwrap().render();
        assert!(content.contains("  public readonly class!: pulumi.Output<string | undefined>;\n"));
        assert!(content.contains("resourceInputs[\"class\"] = args ? args.class : undefined;"));
        assert!(content.contains("  class?: pulumi.Input<string>;\n"));
        assert!(!content.contains("_class"));
    }

    #[test]
    fn test_snake_case_members_are_not_renamed() {
        let mut resource = vector_store_package().resources[0].clone();
        resource.inputs = vec![Property::new("file_ids", PropertyType::StringArray).secret()];
        let content = ResourceTs::new(&resource).unwrap().render();
        assert!(content.contains(
            "resourceInputs[\"file_ids\"] = args?.file_ids ? pulumi.secret(args.file_ids) : undefined;"
        ));
    }

    #[test]
    fn test_optional_id_keeps_base_type() {
        let mut resource = vector_store_package().resources[0].clone();
        for output in &mut resource.outputs {
            output.required = false;
        }
        resource.outputs.push(Property::new("urn", PropertyType::String));
        let content = ResourceTs::new(&resource).unwrap().render();
        assert!(content.contains("  public /*out*/ readonly id!: pulumi.Output<string>;\n"));
        assert!(content.contains("  public /*out*/ readonly urn!: pulumi.Output<string>;\n"));
        assert!(content.contains("  public /*out*/ readonly status!: pulumi.Output<string | undefined>;\n"));
    }

    #[test]
    fn test_non_string_id_is_rejected() {
        let mut resource = vector_store_package().resources[0].clone();
        resource.outputs = vec![Property::new("id", PropertyType::Number).required()];
        let err = ResourceTs::new(&resource).unwrap_err();
        assert!(err.to_string().contains("every resource's id is a string"));
    }

    #[test]
    fn test_inherited_method_output_is_rejected() {
        let mut resource = vector_store_package().resources[0].clone();
        resource
            .outputs
            .push(Property::new("getProvider", PropertyType::String));
        let err = ResourceTs::new(&resource).unwrap_err();
        assert!(err.to_string().contains("would shadow pulumi.CustomResource.getProvider"));
    }
}
