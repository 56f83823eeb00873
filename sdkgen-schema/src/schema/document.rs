//! Raw schema documents as deserialized from JSON, before validation.

use std::{fmt, marker::PhantomData};

use indexmap::IndexMap;
use sdkgen_core::Version;
use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};

use crate::LanguageOptions;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SchemaDocument {
    pub name: String,
    #[serde(default)]
    pub version: Version,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub publisher: Option<String>,
    pub homepage: Option<String>,
    pub repository: Option<String>,
    pub license: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub resources: Entries<ResourceDocument>,
    #[serde(default)]
    pub language: IndexMap<String, LanguageOptions>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ResourceDocument {
    pub description: Option<String>,
    #[serde(default)]
    pub input_properties: Entries<PropertyDocument>,
    #[serde(default)]
    pub required_inputs: Vec<String>,
    #[serde(default)]
    pub properties: Entries<PropertyDocument>,
    #[serde(default)]
    pub required: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PropertyDocument {
    #[serde(rename = "type")]
    pub ty: Option<String>,
    pub items: Option<Box<PropertyDocument>>,
    pub additional_properties: Option<Box<PropertyDocument>>,
    #[serde(default)]
    pub properties: Entries<PropertyDocument>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub secret: bool,
    pub description: Option<String>,
}

/// A JSON object kept as an ordered list of entries.
///
/// Unlike a map, repeated keys survive deserialization so validation can
/// reject them instead of silently keeping the last one.
#[derive(Debug)]
pub(super) struct Entries<T>(pub Vec<(String, T)>);

impl<T> Default for Entries<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Entries<T> {
    pub fn iter(&self) -> impl Iterator<Item = (&String, &T)> {
        self.0.iter().map(|(k, v)| (k, v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Entries<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
            type Value = Entries<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, T>()? {
                    entries.push((key, value));
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}
