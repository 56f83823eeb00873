//! Validation context and resolution of schema documents.

use std::{collections::HashMap, sync::Arc};

use indexmap::IndexMap;
use miette::SourceSpan;
use tracing::debug;

use super::{
    PropertyKind, PropertySpec, ResourceSpec, ResourceToken, Schema,
    document::{Entries, PropertyDocument, ResourceDocument, SchemaDocument},
};
use crate::{
    Language, Result,
    error::SourceContext,
    span::{find_json_key_span_after, find_json_key_spans, find_json_string_span_after},
};

/// Parsing and validation context that carries source information.
///
/// Holds the source for error reporting, the current path through the
/// schema (e.g. `["VectorStore", "inputProperties"]`) and the byte offset
/// where the current object starts, so lookups for a name find the
/// occurrence inside that object rather than the first one in the file.
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: Arc<SourceContext>,
    path: Vec<&'a str>,
    offset: usize,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
            offset: 0,
        }
    }

    pub fn src(&self) -> &str {
        self.source.src()
    }

    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Descend into a nested object that starts at `offset`.
    pub fn push(&self, segment: &'a str, offset: usize) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
            offset: offset.max(self.offset),
        }
    }

    /// The current path joined with dots.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Describe a kind of name at the current position, e.g. "property in
    /// 'VectorStore.inputProperties'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find `key` used as an object key inside the current object.
    pub fn find_key(&self, key: &str) -> Option<SourceSpan> {
        find_json_key_span_after(self.src(), key, self.offset)
    }

    /// Find `value` used as a string value inside the current object.
    pub fn find_value(&self, value: &str) -> Option<SourceSpan> {
        find_json_string_span_after(self.src(), value, self.offset)
    }

    /// Validate that a name is a usable identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_key(name),
            ));
        }
        Ok(())
    }
}

/// Validate a resource or property name.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

/// Validate a package name. Dashes are allowed after the first character.
pub(crate) fn validate_package_name(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        Some(_) => return Some("package name must start with a letter"),
        None => return Some("package name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '-')) {
        return Some("package name must contain only letters, numbers, underscores, and dashes");
    }

    None
}

/// Check a deserialized document and resolve it into a [`Schema`].
pub(super) fn resolve(doc: SchemaDocument, ctx: &ParseContext<'_>) -> Result<Schema> {
    if let Some(reason) = validate_package_name(&doc.name) {
        let span = ctx.find_value(&doc.name);
        return Err(ctx
            .source_context()
            .invalid_identifier_error(&doc.name, "package", reason, span));
    }

    let resources = resolve_resources(&doc.name, &doc.resources, ctx)?;

    for key in doc.language.keys() {
        if key.parse::<Language>().is_err() {
            debug!(section = %key, "ignoring options for unsupported language");
        }
    }

    Ok(Schema {
        name: doc.name,
        version: doc.version,
        description: doc.description,
        display_name: doc.display_name,
        publisher: doc.publisher,
        homepage: doc.homepage,
        repository: doc.repository,
        license: doc.license,
        keywords: doc.keywords,
        resources,
        language: doc.language,
    })
}

fn resolve_resources(
    package: &str,
    entries: &Entries<ResourceDocument>,
    ctx: &ParseContext<'_>,
) -> Result<Vec<ResourceSpec>> {
    let src = ctx.src();
    let source = ctx.source_context();

    // Occurrence index per key, so repeated keys map to their own span
    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    // Resource name -> first key that declared it
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut resources = Vec::with_capacity(entries.0.len());

    for (key, doc) in entries.iter() {
        let nth = occurrences.entry(key.as_str()).or_default();
        let key_span = find_json_key_spans(src, key).get(*nth).copied();
        *nth += 1;

        let token = ResourceToken::parse(key, package)
            .map_err(|message| source.validation_error_at(message, key_span))?;

        if let Some(reason) = validate_identifier(&token.name) {
            return Err(source.invalid_identifier_error(
                &token.name,
                "resource",
                reason,
                key_span,
            ));
        }

        if let Some(first_key) = seen.get(&token.name) {
            let first_span = find_json_key_spans(src, first_key).first().copied();
            return Err(source.duplicate_resource_error(
                &token.name,
                *first_key,
                key.as_str(),
                first_span,
                key_span,
            ));
        }
        seen.insert(token.name.clone(), key.as_str());

        let offset = key_span.map(|s| s.offset()).unwrap_or(0);
        let resource_ctx = ctx.push(key, offset);
        resources.push(resolve_resource(key, token, doc, &resource_ctx)?);
    }

    Ok(resources)
}

fn resolve_resource(
    key: &str,
    token: ResourceToken,
    doc: &ResourceDocument,
    ctx: &ParseContext<'_>,
) -> Result<ResourceSpec> {
    let name = token.name.as_str();

    let inputs_offset = ctx.find_key("inputProperties").map_or(0, |s| s.offset());
    let inputs_ctx = ctx.push("inputProperties", inputs_offset);
    let input_properties = resolve_properties(name, "", &doc.input_properties, &inputs_ctx)?;
    check_required(name, "requiredInputs", &doc.required_inputs, &input_properties, ctx)?;

    let outputs_offset = ctx.find_key("properties").map_or(0, |s| s.offset());
    let outputs_ctx = ctx.push("properties", outputs_offset);
    let properties = resolve_properties(name, "", &doc.properties, &outputs_ctx)?;
    check_required(name, "required", &doc.required, &properties, ctx)?;

    Ok(ResourceSpec {
        key: key.to_string(),
        token,
        description: doc.description.clone(),
        input_properties,
        required_inputs: doc.required_inputs.clone(),
        properties,
        required: doc.required.clone(),
    })
}

/// Resolve a property map. `prefix` is the dotted path of an enclosing
/// object property, empty at the top level.
fn resolve_properties(
    resource: &str,
    prefix: &str,
    entries: &Entries<PropertyDocument>,
    ctx: &ParseContext<'_>,
) -> Result<IndexMap<String, PropertySpec>> {
    let mut properties = IndexMap::with_capacity(entries.0.len());

    for (name, doc) in entries.iter() {
        ctx.validate_name(name, "property")?;

        if properties.contains_key(name) {
            return Err(ctx.source_context().validation_error_at(
                format!(
                    "duplicate property '{}' in {}",
                    name,
                    ctx.context_for("resource")
                ),
                ctx.find_key(name),
            ));
        }

        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };
        let offset = ctx.find_key(name).map_or(0, |s| s.offset());
        let property = resolve_property(resource, &path, doc, &ctx.push(name, offset))?;
        properties.insert(name.clone(), property);
    }

    Ok(properties)
}

fn resolve_property(
    resource: &str,
    path: &str,
    doc: &PropertyDocument,
    ctx: &ParseContext<'_>,
) -> Result<PropertySpec> {
    let source = ctx.source_context();
    let unknown = |ty: String, span: Option<SourceSpan>| {
        source.unknown_type_error(resource, path, ty, span)
    };

    let kind = match doc.ty.as_deref() {
        None => {
            return Err(source.validation_error_at(
                format!("property '{}' of resource '{}' has no type", path, resource),
                ctx.find_key(last_segment(path)),
            ));
        }
        Some("string") => PropertyKind::String,
        Some("number") => PropertyKind::Number,
        Some("boolean") => PropertyKind::Boolean,
        Some("array") => match &doc.items {
            None => {
                return Err(source.validation_error_at(
                    format!(
                        "array property '{}' of resource '{}' must declare 'items'",
                        path, resource
                    ),
                    ctx.find_key(last_segment(path)),
                ));
            }
            Some(items) if items.ty.as_deref() == Some("string") => PropertyKind::StringArray,
            Some(items) => {
                let inner = items.ty.as_deref().unwrap_or("unknown");
                return Err(unknown(format!("array of {}", inner), ctx.find_value(inner)));
            }
        },
        Some("object") => match (&doc.additional_properties, doc.properties.is_empty()) {
            (Some(values), true) if values.ty.as_deref() == Some("string") => {
                PropertyKind::StringMap
            }
            (Some(values), true) => {
                let inner = values.ty.as_deref().unwrap_or("unknown");
                return Err(unknown(format!("map of {}", inner), ctx.find_value(inner)));
            }
            (None, false) => {
                let properties = resolve_properties(resource, path, &doc.properties, ctx)?;
                let list = format!("{}.required", path);
                check_required(resource, &list, &doc.required, &properties, ctx)?;
                PropertyKind::Object {
                    properties,
                    required: doc.required.clone(),
                }
            }
            (Some(_), false) => {
                return Err(source.validation_error_at(
                    format!(
                        "object property '{}' of resource '{}' declares both 'properties' and 'additionalProperties'",
                        path, resource
                    ),
                    ctx.find_key(last_segment(path)),
                ));
            }
            (None, true) => {
                return Err(source.validation_error_at(
                    format!(
                        "object property '{}' of resource '{}' must declare 'properties' or 'additionalProperties'",
                        path, resource
                    ),
                    ctx.find_key(last_segment(path)),
                ));
            }
        },
        Some(other) => return Err(unknown(other.to_string(), ctx.find_value(other))),
    };

    Ok(PropertySpec {
        kind,
        secret: doc.secret,
        description: doc.description.clone(),
    })
}

fn check_required(
    resource: &str,
    list: &str,
    required: &[String],
    declared: &IndexMap<String, PropertySpec>,
    ctx: &ParseContext<'_>,
) -> Result<()> {
    for name in required {
        if !declared.contains_key(name) {
            return Err(ctx.source_context().undeclared_required_error(
                resource,
                name,
                list,
                ctx.find_value(name),
            ));
        }
    }
    Ok(())
}

fn last_segment(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}
