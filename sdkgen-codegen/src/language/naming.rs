//! Naming conventions for target languages.

use std::collections::HashMap;

use sdkgen_ir::Property;
use sdkgen_schema::Language;

use crate::{Error, Result};

/// Language-specific naming conventions.
///
/// Defines how schema names become type, file and member names, and how
/// reserved words are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Resource name to type name (e.g. `vector_store` -> `VectorStore`).
    pub type_case: fn(&str) -> String,
    /// Resource name to file stem (e.g. `VectorStore` -> `vector_store`).
    pub file_case: fn(&str) -> String,
    /// Property name to member name.
    pub field_case: fn(&str) -> String,
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g. `from` -> `from_` in Python).
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    pub fn type_name(&self, name: &str) -> String {
        self.safe_name(&(self.type_case)(name))
    }

    /// File names are never escaped.
    pub fn file_name(&self, name: &str) -> String {
        (self.file_case)(name)
    }

    pub fn field_name(&self, name: &str) -> String {
        self.safe_name(&(self.field_case)(name))
    }

    /// Member names for `properties`, in order.
    ///
    /// Fails when two properties of `resource` map to the same identifier,
    /// e.g. `fileIds` and `file_ids` under snake_case.
    pub fn field_names(
        &self,
        language: Language,
        resource: &str,
        properties: &[Property],
    ) -> Result<Vec<String>> {
        unique_names(language, resource, properties, |p| self.field_name(p))
    }
}

/// Apply `name` to each property, rejecting collisions.
pub fn unique_names(
    language: Language,
    resource: &str,
    properties: &[Property],
    name: impl Fn(&str) -> String,
) -> Result<Vec<String>> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut names = Vec::with_capacity(properties.len());

    for property in properties {
        let identifier = name(&property.name);
        if let Some(first) = seen.insert(identifier.clone(), &property.name) {
            return Err(Error::generation(
                language,
                format!(
                    "properties '{}' and '{}' of resource '{}' both map to '{}'",
                    first, property.name, resource, identifier
                ),
            ));
        }
        names.push(identifier);
    }

    Ok(names)
}
