//! Per-resource Go file generator.

use sdkgen_codegen::{
    Result,
    builder::{CodeBuilder, CodeFragment, Renderable},
    generation::ImportCollector,
    language::TypeMapper,
};
use sdkgen_core::{SourceFile, to_camel_case};
use sdkgen_ir::{Property, Resource};
use sdkgen_schema::Language;

use super::{HEADER, PULUMI_SDK};
use crate::{
    GoSettings,
    ast::{Func, ImportBlock, Struct, StructField},
    naming::GO_NAMING,
    type_mapper::GoTypeMapper,
};

#[derive(Debug, Clone)]
struct GoInput {
    wire: String,
    field: String,
    doc: Option<String>,
    required: bool,
    secret: bool,
    input: String,
    plain: String,
}

#[derive(Debug, Clone)]
struct GoOutput {
    wire: String,
    field: String,
    doc: Option<String>,
    ty: String,
    /// State fields are always optional, so lookups can filter on any subset.
    state_input: String,
    state_plain: String,
}

/// The Go source file for one resource.
///
/// Types are resolved up front by [`ResourceGo::new`], so rendering cannot
/// fail.
#[derive(Debug, Clone)]
pub struct ResourceGo {
    package_name: String,
    internal_import: String,
    container_types: bool,
    token: String,
    type_name: String,
    /// Stem of the unexported structs, e.g. `vectorStore`.
    private_name: String,
    file_stem: String,
    inputs: Vec<GoInput>,
    outputs: Vec<GoOutput>,
    secrets: Vec<String>,
}

impl ResourceGo {
    pub fn new(resource: &Resource, settings: &GoSettings) -> Result<Self> {
        let mapper = GoTypeMapper;
        let name = resource.name.as_str();
        let type_name = GO_NAMING.type_name(name);

        let input_fields = GO_NAMING.field_names(Language::Go, name, &resource.inputs)?;
        let inputs = resource
            .inputs
            .iter()
            .zip(input_fields)
            .map(|(property, field)| {
                Ok(GoInput {
                    wire: property.name.clone(),
                    field,
                    doc: property.description.clone(),
                    required: property.required,
                    secret: property.secret,
                    input: mapper.input_type(name, property)?,
                    plain: mapper.plain_type(name, property)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let output_fields = GO_NAMING.field_names(Language::Go, name, &resource.outputs)?;
        let outputs = resource
            .outputs
            .iter()
            .zip(output_fields)
            .map(|(property, field)| {
                let optional = Property {
                    required: false,
                    ..property.clone()
                };
                Ok(GoOutput {
                    wire: property.name.clone(),
                    field,
                    doc: property.description.clone(),
                    ty: mapper.output_type(name, property)?,
                    state_input: mapper.input_type(name, &optional)?,
                    state_plain: mapper.plain_type(name, &optional)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            package_name: settings.package_name.clone(),
            internal_import: settings.internal_import(),
            container_types: settings.container_types,
            token: resource.token.clone(),
            private_name: to_camel_case(&type_name),
            file_stem: GO_NAMING.file_name(name),
            type_name,
            inputs,
            outputs,
            secrets: resource
                .additional_secret_outputs()
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
    }

    fn has_required_inputs(&self) -> bool {
        self.inputs.iter().any(|i| i.required)
    }

    fn imports(&self) -> ImportCollector {
        let mut imports = ImportCollector::new();
        imports.add_module("context");
        imports.add_module("reflect");
        if self.has_required_inputs() {
            imports.add_module("errors");
        }
        imports.add_module(&self.internal_import);
        imports.add_module(PULUMI_SDK);
        imports
    }

    fn resource_struct(&self) -> Struct {
        Struct::new(&self.type_name)
            .embed("pulumi.CustomResourceState")
            .fields(self.outputs.iter().map(|o| {
                StructField::new(&o.field, &o.ty)
                    .tag(&o.wire)
                    .doc(o.doc.as_deref())
            }))
    }

    fn constructor(&self) -> Func {
        let name = &self.type_name;
        let mut body = Vec::new();

        let on_nil = if self.has_required_inputs() {
            "return nil, errors.New(\"missing one or more required arguments\")".to_string()
        } else {
            format!("args = &{}Args{{}}", name)
        };
        body.push(if_block("args == nil", vec![CodeFragment::line(on_nil)]));
        body.push(CodeFragment::blank());

        for input in self.inputs.iter().filter(|i| i.required) {
            body.push(if_block(
                &format!("args.{} == nil", input.field),
                vec![CodeFragment::line(format!(
                    "return nil, errors.New(\"invalid value for required argument '{}'\")",
                    input.field
                ))],
            ));
        }

        for input in self.inputs.iter().filter(|i| i.secret) {
            let wrap = CodeFragment::line(format!(
                "args.{0} = pulumi.ToSecret(args.{0}).({1})",
                input.field, input.input
            ));
            if input.required {
                body.push(wrap);
            } else {
                body.push(if_block(&format!("args.{} != nil", input.field), vec![wrap]));
            }
        }

        if !self.secrets.is_empty() {
            body.push(CodeFragment::block(
                "secrets := pulumi.AdditionalSecretOutputs([]string{",
                self.secrets
                    .iter()
                    .map(|s| CodeFragment::line(format!("\"{}\",", s)))
                    .collect(),
                Some("})".to_string()),
            ));
            body.push(CodeFragment::line("opts = append(opts, secrets)"));
        }

        body.extend([
            CodeFragment::line("opts = internal.PkgResourceDefaultOpts(opts)"),
            CodeFragment::line(format!("var resource {}", name)),
            CodeFragment::line(format!(
                "err := ctx.RegisterResource(\"{}\", name, args, &resource, opts...)",
                self.token
            )),
            if_block("err != nil", vec![CodeFragment::line("return nil, err")]),
            CodeFragment::line("return &resource, nil"),
        ]);

        Func::new(format!("New{}", name))
            .doc(format!(
                "New{} registers a new resource with the given unique name, arguments, and options.",
                name
            ))
            .params(format!(
                "ctx *pulumi.Context,\n\tname string, args *{}Args, opts ...pulumi.ResourceOption",
                name
            ))
            .returns(format!("(*{}, error)", name))
            .body(body)
    }

    fn getter(&self) -> Func {
        let name = &self.type_name;
        Func::new(format!("Get{}", name))
            .doc(format!(
                "Get{0} gets an existing {0} resource's state with the given name, ID, and optional\n\
                 state properties that are used to uniquely qualify the lookup (nil if not required).",
                name
            ))
            .params(format!(
                "ctx *pulumi.Context,\n\tname string, id pulumi.IDInput, state *{}State, opts ...pulumi.ResourceOption",
                name
            ))
            .returns(format!("(*{}, error)", name))
            .line(format!("var resource {}", name))
            .line(format!(
                "err := ctx.ReadResource(\"{}\", name, id, state, &resource, opts...)",
                self.token
            ))
            .body([
                if_block("err != nil", vec![CodeFragment::line("return nil, err")]),
                CodeFragment::line("return &resource, nil"),
            ])
    }

    fn state(&self) -> Vec<Vec<CodeFragment>> {
        let name = &self.type_name;
        let private = Struct::new(format!("{}State", self.private_name))
            .doc(format!(
                "Input properties used for looking up and filtering {} resources.",
                name
            ))
            .fields(self.outputs.iter().map(|o| {
                StructField::new(&o.field, &o.state_plain)
                    .tag(&o.wire)
                    .doc(o.doc.as_deref())
            }));
        let public = Struct::new(format!("{}State", name)).fields(
            self.outputs
                .iter()
                .map(|o| StructField::new(&o.field, &o.state_input).doc(o.doc.as_deref())),
        );
        vec![
            private.to_fragments(),
            public.to_fragments(),
            element_type(
                &format!("{}State", name),
                &format!("(*{}State)(nil)", self.private_name),
            )
            .to_fragments(),
        ]
    }

    fn args(&self) -> Vec<Vec<CodeFragment>> {
        let name = &self.type_name;
        let private = Struct::new(format!("{}Args", self.private_name)).fields(
            self.inputs.iter().map(|i| {
                StructField::new(&i.field, &i.plain)
                    .tag(&i.wire)
                    .doc(i.doc.as_deref())
            }),
        );
        let public = Struct::new(format!("{}Args", name))
            .doc(format!(
                "The set of arguments for constructing a {} resource.",
                name
            ))
            .fields(
                self.inputs
                    .iter()
                    .map(|i| StructField::new(&i.field, &i.input).doc(i.doc.as_deref())),
            );
        vec![
            private.to_fragments(),
            public.to_fragments(),
            element_type(
                &format!("{}Args", name),
                &format!("(*{}Args)(nil)", self.private_name),
            )
            .to_fragments(),
        ]
    }

    fn input(&self) -> Vec<Vec<CodeFragment>> {
        let name = &self.type_name;
        let output = format!("{}Output", name);
        let mut decls = vec![
            input_interface(&format!("{}Input", name), &output, Vec::new()),
            element_type(&format!("*{}", name), &format!("(**{})(nil)", name)).to_fragments(),
        ];
        decls.extend(
            input_conversions(&format!("i *{}", name), &output)
                .iter()
                .map(Func::to_fragments),
        );
        decls
    }

    fn containers(&self) -> Vec<Vec<CodeFragment>> {
        let name = &self.type_name;
        let mut decls = Vec::new();
        for (kind, alias, element, example) in [
            (
                "Array",
                format!("[]{}Input", name),
                format!("(*[]*{})(nil)", name),
                format!("{0}Array{{ {0}Args{{...}} }}", name),
            ),
            (
                "Map",
                format!("map[string]{}Input", name),
                format!("(*map[string]*{})(nil)", name),
                format!("{0}Map{{ \"key\": {0}Args{{...}} }}", name),
            ),
        ] {
            let container = format!("{}{}", name, kind);
            let output = format!("{}Output", container);
            decls.push(input_interface(
                &format!("{}Input", container),
                &output,
                vec![
                    CodeFragment::line(format!(
                        "// {0}Input is an input type that accepts {0} and {1} values.",
                        container, output
                    )),
                    CodeFragment::line(format!(
                        "// You can construct a concrete instance of `{}Input` via:",
                        container
                    )),
                    CodeFragment::line("//"),
                    CodeFragment::line(format!("//\t{}", example)),
                ],
            ));
            decls.push(vec![CodeFragment::line(format!(
                "type {} {}",
                container, alias
            ))]);
            decls.push(element_type(&container, &element).to_fragments());
            decls.extend(
                input_conversions(&format!("i {}", container), &output)
                    .iter()
                    .map(Func::to_fragments),
            );
        }
        decls
    }

    fn output(&self) -> Vec<Vec<CodeFragment>> {
        let name = &self.type_name;
        let output = format!("{}Output", name);
        let mut decls = vec![
            vec![CodeFragment::line(format!(
                "type {} struct{{ *pulumi.OutputState }}",
                output
            ))],
            element_type(&output, &format!("(**{})(nil)", name)).to_fragments(),
        ];
        decls.extend(
            output_conversions(&format!("o {}", output), &output)
                .iter()
                .map(Func::to_fragments),
        );
        for o in &self.outputs {
            let accessor = Func::new(&o.field)
                .doc_opt(o.doc.as_deref())
                .receiver(format!("o {}", output))
                .returns(&o.ty)
                .line(format!(
                    "return o.ApplyT(func(v *{0}) {1} {{ return v.{2} }}).({1})",
                    name, o.ty, o.field
                ));
            decls.push(accessor.to_fragments());
        }
        decls
    }

    fn container_outputs(&self) -> Vec<Vec<CodeFragment>> {
        let name = &self.type_name;
        let element_output = format!("{}Output", name);
        let mut decls = Vec::new();
        for (kind, element, index) in [
            (
                "Array",
                format!("(*[]*{})(nil)", name),
                Func::new("Index")
                    .params("i pulumi.IntInput")
                    .body([CodeFragment::block(
                        format!(
                            "return pulumi.All(o, i).ApplyT(func(vs []interface{{}}) *{} {{",
                            name
                        ),
                        vec![CodeFragment::line(format!(
                            "return vs[0].([]*{})[vs[1].(int)]",
                            name
                        ))],
                        Some(format!("}}).({})", element_output)),
                    )]),
            ),
            (
                "Map",
                format!("(*map[string]*{})(nil)", name),
                Func::new("MapIndex")
                    .params("k pulumi.StringInput")
                    .body([CodeFragment::block(
                        format!(
                            "return pulumi.All(o, k).ApplyT(func(vs []interface{{}}) *{} {{",
                            name
                        ),
                        vec![CodeFragment::line(format!(
                            "return vs[0].(map[string]*{})[vs[1].(string)]",
                            name
                        ))],
                        Some(format!("}}).({})", element_output)),
                    )]),
            ),
        ] {
            let output = format!("{}{}Output", name, kind);
            decls.push(vec![CodeFragment::line(format!(
                "type {} struct{{ *pulumi.OutputState }}",
                output
            ))]);
            decls.push(element_type(&output, &element).to_fragments());
            decls.extend(
                output_conversions(&format!("o {}", output), &output)
                    .iter()
                    .map(Func::to_fragments),
            );
            decls.push(
                index
                    .receiver(format!("o {}", output))
                    .returns(&element_output)
                    .to_fragments(),
            );
        }
        decls
    }

    fn registration(&self) -> Func {
        let name = &self.type_name;
        let mut inputs = vec![(format!("{}Input", name), format!("&{}{{}}", name))];
        let mut outputs = vec![format!("{}Output", name)];
        if self.container_types {
            for kind in ["Array", "Map"] {
                inputs.push((
                    format!("{}{}Input", name, kind),
                    format!("{}{}{{}}", name, kind),
                ));
                outputs.push(format!("{}{}Output", name, kind));
            }
        }

        let mut init = Func::new("init");
        for (interface, value) in inputs {
            init = init.line(format!(
                "pulumi.RegisterInputType(reflect.TypeOf((*{})(nil)).Elem(), {})",
                interface, value
            ));
        }
        for output in outputs {
            init = init.line(format!("pulumi.RegisterOutputType({}{{}})", output));
        }
        init
    }

    fn declarations(&self) -> Vec<Vec<CodeFragment>> {
        let mut decls = vec![
            self.resource_struct().to_fragments(),
            self.constructor().to_fragments(),
            self.getter().to_fragments(),
        ];
        decls.extend(self.state());
        decls.extend(self.args());
        decls.extend(self.input());
        if self.container_types {
            decls.extend(self.containers());
        }
        decls.extend(self.output());
        if self.container_types {
            decls.extend(self.container_outputs());
        }
        decls.push(self.registration().to_fragments());
        decls
    }
}

impl SourceFile for ResourceGo {
    fn path(&self) -> String {
        format!("{}/{}.go", self.package_name, self.file_stem)
    }

    fn render(&self) -> String {
        let mut code = CodeBuilder::go();
        code.push_raw(HEADER)
            .push_blank()
            .push_line(&format!("package {}", self.package_name))
            .push_blank()
            .emit(&ImportBlock::new(&self.imports()));
        for decl in self.declarations() {
            code.push_blank();
            for fragment in decl {
                code.apply_fragment(fragment);
            }
        }
        code.build()
    }
}

fn if_block(condition: &str, body: Vec<CodeFragment>) -> CodeFragment {
    CodeFragment::block(format!("if {} {{", condition), body, Some("}".to_string()))
}

fn element_type(receiver: &str, pointer: &str) -> Func {
    Func::new("ElementType")
        .receiver(receiver)
        .returns("reflect.Type")
        .line(format!("return reflect.TypeOf({}).Elem()", pointer))
}

fn input_interface(name: &str, output: &str, doc: Vec<CodeFragment>) -> Vec<CodeFragment> {
    let mut fragments = doc;
    fragments.push(CodeFragment::block(
        format!("type {} interface {{", name),
        vec![
            CodeFragment::line("pulumi.Input"),
            CodeFragment::blank(),
            CodeFragment::line(format!("To{0}() {0}", output)),
            CodeFragment::line(format!("To{0}WithContext(ctx context.Context) {0}", output)),
        ],
        Some("}".to_string()),
    ));
    fragments
}

fn input_conversions(receiver: &str, output: &str) -> [Func; 2] {
    [
        Func::new(format!("To{}", output))
            .receiver(receiver)
            .returns(output)
            .line(format!(
                "return i.To{}WithContext(context.Background())",
                output
            )),
        Func::new(format!("To{}WithContext", output))
            .receiver(receiver)
            .params("ctx context.Context")
            .returns(output)
            .line(format!(
                "return pulumi.ToOutputWithContext(ctx, i).({})",
                output
            )),
    ]
}

fn output_conversions(receiver: &str, output: &str) -> [Func; 2] {
    [
        Func::new(format!("To{}", output))
            .receiver(receiver)
            .returns(output)
            .line("return o"),
        Func::new(format!("To{}WithContext", output))
            .receiver(receiver)
            .params("ctx context.Context")
            .returns(output)
            .line("return o"),
    ]
}

#[cfg(test)]
mod tests {
    use sdkgen_codegen::testing::vector_store_package;

    use super::*;

    fn settings(container_types: bool) -> GoSettings {
        GoSettings {
            import_base_path: "github.com/pulumi/pulumi-openai/sdk/go/openai".to_string(),
            package_name: "openai".to_string(),
            container_types,
        }
    }

    fn render(container_types: bool) -> String {
        let package = vector_store_package();
        ResourceGo::new(&package.resources[0], &settings(container_types))
            .unwrap()
            .render()
    }

    #[test]
    fn test_path_is_camel_case() {
        let package = vector_store_package();
        let file = ResourceGo::new(&package.resources[0], &settings(true)).unwrap();
        assert_eq!(file.path(), "openai/vectorStore.go");
    }

    #[test]
    fn test_imports() {
        let content = render(true);
        assert!(content.contains(
            "import (\n\t\"context\"\n\t\"errors\"\n\t\"reflect\"\n\n\t\"github.com/pulumi/pulumi-openai/sdk/go/openai/internal\"\n"
        ));
    }

    #[test]
    fn test_constructor_checks_and_secrets() {
        let content = render(true);
        assert!(content.contains(
            "func NewVectorStore(ctx *pulumi.Context,\n\tname string, args *VectorStoreArgs, opts ...pulumi.ResourceOption) (*VectorStore, error) {\n"
        ));
        assert!(content.contains(
            "\tif args.Name == nil {\n\t\treturn nil, errors.New(\"invalid value for required argument 'Name'\")\n\t}\n"
        ));
        assert!(content.contains(
            "\tif args.ApiKey != nil {\n\t\targs.ApiKey = pulumi.ToSecret(args.ApiKey).(pulumi.StringPtrInput)\n\t}\n"
        ));
        assert!(content.contains(
            "\tsecrets := pulumi.AdditionalSecretOutputs([]string{\n\t\t\"apiKey\",\n\t})\n\topts = append(opts, secrets)\n"
        ));
        assert!(content.contains(
            "err := ctx.RegisterResource(\"openai:index:VectorStore\", name, args, &resource, opts...)"
        ));
    }

    #[test]
    fn test_args_structs() {
        let content = render(true);
        assert!(content.contains("\tName string `pulumi:\"name\"`\n"));
        assert!(content.contains(
            "\tApiKey   *string           `pulumi:\"apiKey\"`\n\tFileIds  []string          `pulumi:\"fileIds\"`\n\tMetadata map[string]string `pulumi:\"metadata\"`\n"
        ));
        assert!(content.contains(
            "\tApiKey   pulumi.StringPtrInput\n\tFileIds  pulumi.StringArrayInput\n\tMetadata pulumi.StringMapInput\n"
        ));
        assert!(content.contains("\t// The name of the vector store.\n\tName pulumi.StringInput\n"));
    }

    #[test]
    fn test_resource_struct_fields_are_aligned() {
        let content = render(true);
        assert!(content.contains(
            "\tpulumi.CustomResourceState\n\n\tCreatedAt pulumi.Float64Output `pulumi:\"createdAt\"`\n\tId        pulumi.StringOutput  `pulumi:\"id\"`\n\tName      pulumi.StringOutput  `pulumi:\"name\"`\n\tStatus    pulumi.StringOutput  `pulumi:\"status\"`\n}\n"
        ));
    }

    #[test]
    fn test_output_accessors() {
        let content = render(true);
        assert!(content.contains(
            "func (o VectorStoreOutput) CreatedAt() pulumi.Float64Output {\n\treturn o.ApplyT(func(v *VectorStore) pulumi.Float64Output { return v.CreatedAt }).(pulumi.Float64Output)\n}\n"
        ));
        assert!(content.contains("func (o VectorStoreOutput) Id() pulumi.StringOutput {"));
        assert!(content.contains("func (o VectorStoreOutput) Status() pulumi.StringOutput {"));
        assert!(!content.contains("func (o VectorStoreOutput) ApiKey()"));
    }

    #[test]
    fn test_state_fields_are_optional() {
        let content = render(true);
        assert!(content.contains("\tCreatedAt *float64 `pulumi:\"createdAt\"`\n"));
        assert!(content.contains("\tCreatedAt pulumi.Float64PtrInput\n"));
    }

    #[test]
    fn test_container_types_toggle() {
        let with = render(true);
        assert!(with.contains("type VectorStoreArray []VectorStoreInput\n"));
        assert!(with.contains("func (o VectorStoreMapOutput) MapIndex(k pulumi.StringInput) VectorStoreOutput {"));
        assert!(with.contains("pulumi.RegisterOutputType(VectorStoreArrayOutput{})"));

        let without = render(false);
        assert!(!without.contains("VectorStoreArray"));
        assert!(!without.contains("VectorStoreMap"));
        assert!(without.contains("pulumi.RegisterOutputType(VectorStoreOutput{})"));
    }

    #[test]
    fn test_optional_only_inputs_default_args() {
        let mut package = vector_store_package();
        let resource = &mut package.resources[0];
        resource.inputs.retain(|p| !p.required);

        let content = ResourceGo::new(resource, &settings(false)).unwrap().render();
        assert!(content.contains("\tif args == nil {\n\t\targs = &VectorStoreArgs{}\n\t}\n"));
        assert!(!content.contains("\"errors\""));
    }

    #[test]
    fn test_required_secret_is_wrapped_unconditionally() {
        let mut package = vector_store_package();
        let resource = &mut package.resources[0];
        for input in &mut resource.inputs {
            if input.name == "apiKey" {
                input.required = true;
            }
        }

        let content = ResourceGo::new(resource, &settings(false)).unwrap().render();
        assert!(content.contains(
            "\targs.ApiKey = pulumi.ToSecret(args.ApiKey).(pulumi.StringInput)\n"
        ));
        assert!(!content.contains("if args.ApiKey != nil"));
    }
}
