//! Resource module generator, one `<snake>.py` per resource.

use sdkgen_codegen::{
    Error, Result,
    builder::{CodeBuilder, CodeFragment, Renderable},
    language::TypeMapper,
};
use sdkgen_core::SourceFile;
use sdkgen_ir::{Property, PropertyType, Resource};
use sdkgen_schema::Language;

use super::HEADER;
use crate::{
    PythonSettings,
    ast::{Docstring, PyProperty},
    naming::PY_NAMING,
    type_mapper::PythonTypeMapper,
};

/// Continuation indent of parameters under `def __init__(`.
const PARAM_INDENT: &str = "                 ";

/// Getter annotation. `id` and `urn` override the base resource's
/// attributes and keep their `Output[str]` type.
fn output_type(mapper: &PythonTypeMapper, resource: &str, property: &Property) -> Result<String> {
    if !property.is_resource_identity() {
        return mapper.output_type(resource, property);
    }
    if property.ty != PropertyType::String {
        return Err(Error::identity_type(Language::Python, resource, property));
    }
    Ok("pulumi.Output[str]".to_string())
}

#[derive(Debug, Clone)]
struct PyInput {
    wire: String,
    field: String,
    doc: Option<String>,
    required: bool,
    secret: bool,
    /// Annotation in the args class.
    ty: String,
    /// Annotation as a constructor keyword argument.
    keyword_ty: String,
    /// `pulumi.Input[...]` without `Optional`, for docstrings.
    value_ty: String,
}

#[derive(Debug, Clone)]
struct PyOutput {
    wire: String,
    field: String,
    doc: Option<String>,
    ty: String,
    is_input: bool,
}

/// A resource class and its `@pulumi.input_type` args class.
#[derive(Debug, Clone)]
pub struct ResourcePy {
    package_name: String,
    token: String,
    class_name: String,
    file_stem: String,
    description: Option<String>,
    inputs: Vec<PyInput>,
    outputs: Vec<PyOutput>,
    secrets: Vec<String>,
}

impl ResourcePy {
    pub fn new(resource: &Resource, settings: &PythonSettings) -> Result<Self> {
        let mapper = PythonTypeMapper;
        let name = &resource.name;
        let input_fields = PY_NAMING.field_names(Language::Python, name, &resource.inputs)?;
        let output_fields = PY_NAMING.field_names(Language::Python, name, &resource.outputs)?;

        let inputs = resource
            .inputs
            .iter()
            .zip(input_fields)
            .map(|(p, field)| {
                Ok(PyInput {
                    wire: p.name.clone(),
                    field,
                    doc: p.description.clone(),
                    required: p.required,
                    secret: p.secret,
                    ty: mapper.input_type(name, p)?,
                    keyword_ty: mapper.keyword_type(name, p)?,
                    value_ty: mapper.input_value_type(name, p)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let outputs = resource
            .outputs
            .iter()
            .zip(output_fields)
            .map(|(p, field)| {
                Ok(PyOutput {
                    wire: p.name.clone(),
                    field,
                    doc: p.description.clone(),
                    ty: output_type(&mapper, name, p)?,
                    is_input: resource.is_input(&p.name),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            package_name: settings.package_name.clone(),
            token: resource.token.clone(),
            class_name: PY_NAMING.type_name(name),
            file_stem: PY_NAMING.file_name(name),
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

    /// Required inputs first, as Python needs them before defaulted ones.
    fn args_init_params(&self) -> Vec<String> {
        let required = self
            .inputs
            .iter()
            .filter(|i| i.required)
            .map(|i| format!("{}: {}", i.field, i.ty));
        let optional = self
            .inputs
            .iter()
            .filter(|i| !i.required)
            .map(|i| format!("{}: {} = None", i.field, i.ty));
        required.chain(optional).collect()
    }

    fn keyword_params(&self) -> Vec<String> {
        self.inputs
            .iter()
            .map(|i| format!("{}: {} = None", i.field, i.keyword_ty))
            .collect()
    }

    fn args_class(&self) -> Vec<CodeFragment> {
        let params = self.args_init_params();
        let header = if params.is_empty() {
            "def __init__(__self__):".to_string()
        } else {
            format!(
                "def __init__(__self__, *,\n{}{}):",
                PARAM_INDENT,
                params.join(&format!(",\n{}", PARAM_INDENT))
            )
        };

        let mut doc = Docstring::new().text(&format!(
            "The set of arguments for constructing a {} resource.",
            self.class_name
        ));
        for input in &self.inputs {
            doc = doc.param(&input.value_ty, &input.field, input.doc.as_deref());
        }

        let mut init = vec![CodeFragment::sequence(
            doc.to_fragments(),
        )];
        for input in &self.inputs {
            let set = CodeFragment::line(format!(
                "pulumi.set(__self__, \"{0}\", {0})",
                input.field
            ));
            if input.required {
                init.push(set);
            } else {
                init.push(CodeFragment::block(
                    format!("if {} is not None:", input.field),
                    vec![set],
                    None,
                ));
            }
        }

        let mut body = vec![CodeFragment::block(header, init, None)];
        for input in &self.inputs {
            body.push(CodeFragment::blank());
            body.extend(
                PyProperty::new(&input.field, &input.wire, &input.ty)
                    .doc(input.doc.as_deref())
                    .with_setter()
                    .to_fragments(),
            );
        }

        vec![
            CodeFragment::line("@pulumi.input_type"),
            CodeFragment::block(format!("class {}:", self.args_name()), body, None),
        ]
    }

    fn constructor_doc(&self) -> Docstring {
        let mut doc = Docstring::new();
        if let Some(description) = &self.description {
            doc = doc.text(description);
        }
        doc.text(&format!(
            "Create a {} resource with the given unique name, props, and options.",
            self.class_name
        ))
        .param("str", "resource_name", Some("The name of the resource."))
        .param(
            "pulumi.ResourceOptions",
            "opts",
            Some("Options for the resource."),
        )
    }

    fn overloads(&self) -> Vec<CodeFragment> {
        let mut keyword_doc = self.constructor_doc();
        for input in &self.inputs {
            keyword_doc = keyword_doc.param(&input.value_ty, &input.field, input.doc.as_deref());
        }
        let mut keyword_params = vec![
            "resource_name: str".to_string(),
            "opts: Optional[pulumi.ResourceOptions] = None".to_string(),
        ];
        keyword_params.extend(self.keyword_params());
        keyword_params.push("__props__=None".to_string());

        let args_doc = self.constructor_doc().param(
            &self.args_name(),
            "args",
            Some("The arguments to use to populate this resource's properties."),
        );
        let args_params = [
            "resource_name: str".to_string(),
            format!("args: {}", self.args_name()),
            "opts: Optional[pulumi.ResourceOptions] = None".to_string(),
        ];

        let overload = |params: &[String], doc: &Docstring| {
            let mut body = doc.to_fragments();
            body.push(CodeFragment::line("..."));
            vec![
                CodeFragment::line("@overload"),
                CodeFragment::block(
                    format!(
                        "def __init__(__self__,\n{}{}):",
                        PARAM_INDENT,
                        params.join(&format!(",\n{}", PARAM_INDENT))
                    ),
                    body,
                    None,
                ),
            ]
        };

        let mut fragments = overload(&keyword_params, &keyword_doc);
        fragments.extend(overload(&args_params, &args_doc));
        fragments.push(CodeFragment::block(
            "def __init__(__self__, resource_name: str, *args, **kwargs):",
            vec![
                CodeFragment::line(format!(
                    "resource_args, opts = _utilities.get_resource_args_opts({}, pulumi.ResourceOptions, *args, **kwargs)",
                    self.args_name()
                )),
                CodeFragment::block(
                    "if resource_args is not None:",
                    vec![CodeFragment::line(
                        "__self__._internal_init(resource_name, opts, **resource_args.__dict__)",
                    )],
                    None,
                ),
                CodeFragment::block(
                    "else:",
                    vec![CodeFragment::line(
                        "__self__._internal_init(resource_name, *args, **kwargs)",
                    )],
                    None,
                ),
            ],
            None,
        ));
        fragments
    }

    fn internal_init(&self) -> Vec<CodeFragment> {
        let mut params = vec![
            "resource_name: str".to_string(),
            "opts: Optional[pulumi.ResourceOptions] = None".to_string(),
        ];
        params.extend(self.keyword_params());
        params.push("__props__=None".to_string());

        let mut create = vec![
            CodeFragment::block(
                "if __props__ is not None:",
                vec![CodeFragment::line(
                    "raise TypeError(\"__props__ is only valid when passed in combination with a valid opts.id to get an existing resource\")",
                )],
                None,
            ),
            CodeFragment::line(format!(
                "__props__ = {0}.__new__({0})",
                self.args_name()
            )),
            CodeFragment::blank(),
        ];
        for input in &self.inputs {
            if input.required {
                create.push(CodeFragment::block(
                    format!("if {} is None and not opts.urn:", input.field),
                    vec![CodeFragment::line(format!(
                        "raise TypeError(\"Missing required property '{}'\")",
                        input.wire
                    ))],
                    None,
                ));
            }
            let value = if input.secret {
                format!(
                    "None if {0} is None else pulumi.Output.secret({0})",
                    input.field
                )
            } else {
                input.field.clone()
            };
            create.push(CodeFragment::line(format!(
                "__props__.__dict__[\"{}\"] = {}",
                input.field, value
            )));
        }
        for output in self.outputs.iter().filter(|o| !o.is_input) {
            create.push(CodeFragment::line(format!(
                "__props__.__dict__[\"{}\"] = None",
                output.field
            )));
        }

        let mut body = vec![
            CodeFragment::line(
                "opts = pulumi.ResourceOptions.merge(_utilities.get_resource_opts_defaults(), opts)",
            ),
            CodeFragment::block(
                "if not isinstance(opts, pulumi.ResourceOptions):",
                vec![CodeFragment::line(
                    "raise TypeError(\"Expected resource options to be a ResourceOptions instance\")",
                )],
                None,
            ),
            CodeFragment::block("if opts.id is None:", create, None),
        ];
        if !self.secrets.is_empty() {
            let quoted: Vec<String> = self.secrets.iter().map(|s| format!("\"{}\"", s)).collect();
            body.push(CodeFragment::line(format!(
                "secret_opts = pulumi.ResourceOptions(additional_secret_outputs=[{}])",
                quoted.join(", ")
            )));
            body.push(CodeFragment::line(
                "opts = pulumi.ResourceOptions.merge(opts, secret_opts)",
            ));
        }
        body.push(CodeFragment::block(
            format!("super({}, __self__).__init__(", self.class_name),
            vec![
                CodeFragment::line(format!("\"{}\",", self.token)),
                CodeFragment::line("resource_name,"),
                CodeFragment::line("__props__,"),
                CodeFragment::line("opts)"),
            ],
            None,
        ));

        vec![CodeFragment::block(
            format!(
                "def _internal_init(__self__,\n{}{}):",
                PARAM_INDENT,
                params.join(&format!(",\n{}", PARAM_INDENT))
            ),
            body,
            None,
        )]
    }

    fn get(&self) -> Vec<CodeFragment> {
        let mut fields: Vec<&str> = self
            .inputs
            .iter()
            .map(|i| i.field.as_str())
            .chain(self.outputs.iter().map(|o| o.field.as_str()))
            .collect();
        fields.sort_unstable();
        fields.dedup();

        let doc = Docstring::new()
            .text(&format!(
                "Get an existing {} resource's state with the given name, id, and optional extra\nproperties used to qualify the lookup.\n\n",
                self.class_name
            ))
            .param("str", "resource_name", Some("The unique name of the resulting resource."))
            .param(
                "pulumi.Input[str]",
                "id",
                Some("The unique provider ID of the resource to lookup."),
            )
            .param(
                "pulumi.ResourceOptions",
                "opts",
                Some("Options for the resource."),
            );

        let mut body = doc.to_fragments();
        body.push(CodeFragment::line(
            "opts = pulumi.ResourceOptions.merge(opts, pulumi.ResourceOptions(id=id))",
        ));
        body.push(CodeFragment::blank());
        body.push(CodeFragment::line(format!(
            "__props__ = {0}.__new__({0})",
            self.args_name()
        )));
        body.push(CodeFragment::blank());
        for field in fields {
            body.push(CodeFragment::line(format!(
                "__props__.__dict__[\"{}\"] = None",
                field
            )));
        }
        body.push(CodeFragment::line(format!(
            "return {}(resource_name, opts=opts, __props__=__props__)",
            self.class_name
        )));

        vec![
            CodeFragment::line("@staticmethod"),
            CodeFragment::block(
                format!(
                    "def get(resource_name: str,\n            id: pulumi.Input[str],\n            opts: Optional[pulumi.ResourceOptions] = None) -> \"{}\":",
                    self.class_name
                ),
                body,
                None,
            ),
        ]
    }

    fn resource_class(&self) -> Vec<CodeFragment> {
        let mut body = self.overloads();
        body.push(CodeFragment::blank());
        body.extend(self.internal_init());
        body.push(CodeFragment::blank());
        body.extend(self.get());
        for output in &self.outputs {
            body.push(CodeFragment::blank());
            body.extend(
                PyProperty::new(&output.field, &output.wire, &output.ty)
                    .doc(output.doc.as_deref())
                    .to_fragments(),
            );
        }
        vec![CodeFragment::block(
            format!("class {}(pulumi.CustomResource):", self.class_name),
            body,
            None,
        )]
    }
}

impl SourceFile for ResourcePy {
    fn path(&self) -> String {
        format!("{}/{}.py", self.package_name, self.file_stem)
    }

    fn render(&self) -> String {
        let mut code = CodeBuilder::python();
        code.push_raw(HEADER)
            .push_blank()
            .push_line("import pulumi")
            .push_line("import pulumi.runtime")
            .push_line("from typing import Mapping, Optional, Sequence, overload")
            .push_line("from . import _utilities")
            .push_blank()
            .push_line(&format!(
                "__all__ = [\"{}\", \"{}\"]",
                self.args_name(),
                self.class_name
            ))
            .push_blank();
        for fragment in self.args_class() {
            code.apply_fragment(fragment);
        }
        code.push_blank().push_blank();
        for fragment in self.resource_class() {
            code.apply_fragment(fragment);
        }
        code.build()
    }
}
