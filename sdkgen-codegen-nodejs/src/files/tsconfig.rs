//! tsconfig.json generator.

use sdkgen_core::SourceFile;
use serde_json::json;

/// The tsconfig.json compiler configuration, listing every source file.
pub struct TsConfig {
    pub files: Vec<String>,
}

impl SourceFile for TsConfig {
    fn path(&self) -> String {
        "tsconfig.json".to_string()
    }

    fn render(&self) -> String {
        let config = json!({
            "compilerOptions": {
                "outDir": "bin",
                "target": "es2016",
                "module": "commonjs",
                "moduleResolution": "node",
                "declaration": true,
                "sourceMap": true,
                "stripInternal": true,
                "experimentalDecorators": true,
                "noFallthroughCasesInSwitch": true,
                "forceConsistentCasingInFileNames": true,
                "strict": true
            },
            "files": self.files,
        });
        format!("{:#}\n", config)
    }
}
