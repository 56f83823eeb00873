//! Summary data computed from the package IR.
//!
//! [`ComputedData`] holds counts and per-resource facts used by reports and
//! snapshots, computed once by the analyze phase.

use std::collections::BTreeSet;

use sdkgen_ir::{Package, Resource};
use serde::Serialize;

#[derive(Debug, Default, Clone, Serialize)]
pub struct ComputedData {
    pub resource_count: usize,
    pub input_count: usize,
    pub output_count: usize,
    /// Number of inputs marked secret across all resources.
    pub secret_input_count: usize,
    /// Distinct modules, sorted.
    pub modules: Vec<String>,
    /// Whether any property is a nested object. Only the Node.js backend can
    /// render these.
    pub has_nested_objects: bool,
    pub resources: Vec<ResourceSummary>,
}

/// Facts about one resource.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceSummary {
    pub name: String,
    pub token: String,
    pub inputs: usize,
    pub outputs: usize,
    pub required_inputs: Vec<String>,
    /// Names the generated constructors mark as additional secret outputs.
    pub secret_outputs: Vec<String>,
    pub has_nested_objects: bool,
}

impl ComputedData {
    pub fn from_package(package: &Package) -> Self {
        let resources: Vec<ResourceSummary> =
            package.resources.iter().map(ResourceSummary::from_resource).collect();

        let modules: BTreeSet<&str> = package
            .resources
            .iter()
            .map(|r| r.module.as_str())
            .collect();

        Self {
            resource_count: resources.len(),
            input_count: resources.iter().map(|r| r.inputs).sum(),
            output_count: resources.iter().map(|r| r.outputs).sum(),
            secret_input_count: package
                .resources
                .iter()
                .map(|r| r.secret_inputs().count())
                .sum(),
            modules: modules.into_iter().map(String::from).collect(),
            has_nested_objects: resources.iter().any(|r| r.has_nested_objects),
            resources,
        }
    }
}

impl ResourceSummary {
    fn from_resource(resource: &Resource) -> Self {
        Self {
            name: resource.name.clone(),
            token: resource.token.clone(),
            inputs: resource.inputs.len(),
            outputs: resource.outputs.len(),
            required_inputs: resource.required_inputs().map(|p| p.name.clone()).collect(),
            secret_outputs: resource
                .additional_secret_outputs()
                .into_iter()
                .map(String::from)
                .collect(),
            has_nested_objects: resource
                .inputs
                .iter()
                .chain(&resource.outputs)
                .any(|p| p.ty.is_object()),
        }
    }
}
