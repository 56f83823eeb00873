//! Go file generators.

mod doc_go;
mod init_go;
mod readme;
mod resource_go;
mod utilities_go;

pub use doc_go::DocGo;
pub use init_go::{InitGo, ModuleResource};
pub use readme::go_readme;
pub use resource_go::ResourceGo;
pub use utilities_go::UtilitiesGo;

/// Import path of the pulumi Go SDK.
pub const PULUMI_SDK: &str = "github.com/pulumi/pulumi/sdk/v3/go/pulumi";

/// Header carried by every generated Go source file.
pub const HEADER: &str = "\
// Code generated by sdkgen DO NOT EDIT.
// *** WARNING: Do not edit by hand unless you're certain you know what you are doing! ***
";
