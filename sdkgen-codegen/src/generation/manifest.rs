use serde_json::Value;

/// Render the `pulumi-plugin.json` marker that tells the engine which
/// resource plugin a generated package needs.
pub fn plugin_manifest(name: &str, version: &str) -> String {
    format!(
        "{{\n  \"resource\": true,\n  \"name\": {},\n  \"version\": {}\n}}\n",
        Value::from(name),
        Value::from(version)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_manifest_is_valid_json() {
        let manifest = plugin_manifest("openai", "0.1.0");
        let value: Value = serde_json::from_str(&manifest).unwrap();
        assert_eq!(value["resource"], true);
        assert_eq!(value["name"], "openai");
        assert_eq!(value["version"], "0.1.0");
    }

    #[test]
    fn test_plugin_manifest_escapes() {
        let manifest = plugin_manifest("we\"ird", "1.0.0");
        assert!(manifest.contains(r#""we\"ird""#));
    }
}
