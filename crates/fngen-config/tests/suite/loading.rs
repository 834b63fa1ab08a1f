use fngen_config::{ConfigError, GeneratorConfig};
use fngen_types::{ClassName, NamingPolicy};

use pretty_assertions::assert_eq;

const SAMPLE: &str = r#"
[naming]
default_policy = "exclude"

[classes."com.example.Point"]
policy = "rename"
generated_name = "Points"

[classes."com.example.Line"]
generated_name = "Lines"

[logging]
level = "debug"
json = true
"#;

#[test]
fn per_class_overrides_fall_back_to_default_policy() {
    let config = GeneratorConfig::load_from_str(SAMPLE).unwrap();

    let point = config.options_for(&ClassName::from_qualified("com.example.Point"));
    assert_eq!(point.policy, NamingPolicy::Rename);
    assert_eq!(point.generated_name.as_deref(), Some("Points"));

    let line = config.options_for(&ClassName::from_qualified("com.example.Line"));
    assert_eq!(line.policy, NamingPolicy::Exclude);
    assert_eq!(line.generated_name.as_deref(), Some("Lines"));

    let other = config.options_for(&ClassName::from_qualified("com.example.Other"));
    assert_eq!(other.policy, NamingPolicy::Exclude);
    assert_eq!(other.generated_name, None);

    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
}

#[test]
fn load_from_path_reads_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fngen.toml");
    std::fs::write(&path, SAMPLE).unwrap();

    let config = GeneratorConfig::load_from_path(&path).unwrap();
    assert_eq!(config.naming.default_policy, NamingPolicy::Exclude);
    assert_eq!(config.classes.len(), 2);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = GeneratorConfig::load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("missing.toml"), "{err}");
}

#[test]
fn unknown_keys_are_rejected() {
    let err = GeneratorConfig::load_from_str("[naming]\nstrategy = \"rename\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn schema_describes_naming_policy() {
    let schema = serde_json::to_value(fngen_config::json_schema()).unwrap();
    let text = schema.to_string();
    assert!(text.contains("default_policy"), "{text}");
    assert!(text.contains("exclude"), "{text}");
}
