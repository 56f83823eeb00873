//! utilities.ts generator.

use sdkgen_core::SourceFile;

use crate::code_file::{CodeFile, RawCode};

const UTILITIES: &str = r#"export function getVersion(): string {
  let version = require("../package.json").version;
  // Node allows a "v" prefix, semver does not.
  if (version.indexOf("v") === 0) {
    version = version.slice(1);
  }
  return version;
}

/** @internal */
export function resourceOptsDefaults(): any {
  return { version: getVersion() };
}

/** @internal */
export function lazyLoad(exports: any, props: string[], loadModule: any) {
  for (let property of props) {
    Object.defineProperty(exports, property, {
      enumerable: true,
      get: function () {
        return loadModule()[property];
      },
    });
  }
}"#;

/// Runtime helpers shared by the resource classes.
pub struct UtilitiesTs;

impl SourceFile for UtilitiesTs {
    fn path(&self) -> String {
        "utilities.ts".to_string()
    }

    fn render(&self) -> String {
        CodeFile::generated().add(RawCode::new(UTILITIES)).render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utilities_exports() {
        let content = UtilitiesTs.render();
        assert!(content.contains("export function resourceOptsDefaults(): any {"));
        assert!(content.contains("export function lazyLoad("));
        assert!(content.ends_with("}\n"));
    }
}
