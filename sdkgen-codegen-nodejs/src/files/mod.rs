//! TypeScript file generators.

mod index_ts;
mod package_json;
mod readme;
mod resource_ts;
mod tsconfig;
mod utilities_ts;

pub use index_ts::{IndexResource, IndexTs};
pub use package_json::PackageJson;
pub use readme::node_readme;
pub use resource_ts::ResourceTs;
pub use tsconfig::TsConfig;
pub use utilities_ts::UtilitiesTs;
