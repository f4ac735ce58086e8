use std::path::Path;

use cms_fields_core::{Builder, FieldArgs, OutputFormat, PageArgs, Widget, format_value};
use cms_fields_settings::{GeneratorConfig, Revision, SettingsError, load_field, load_fields};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

// ---------------------------------------------------------------------------
// Field files
// ---------------------------------------------------------------------------

#[test]
fn test_fields_from_yaml_feed_a_page() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "home.yml",
        r#"
- name: title
  label: Title
  widget: string
  required: true
- name: intro
  label: Intro
  widget: markdown
  minimal: true
"#,
    );

    let builder = GeneratorConfig::default().builder();
    let fields = load_fields(&builder, &path).unwrap();
    let page = builder.page("home", fields, PageArgs::new());
    assert_eq!(page.fields.len(), 2);
    assert_eq!(page.find_field("intro").unwrap().widget, Widget::Markdown);
}

#[test]
fn test_generated_field_file_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let builder = GeneratorConfig::default().builder();
    let tag = builder.field("tag", FieldArgs::new().hint("Lowercase"));

    let json = format_value(&tag, OutputFormat::Json).unwrap();
    let path = write(dir.path(), "tag.json", &json);
    assert_eq!(load_field(&builder, &path).unwrap(), tag);

    let yaml = format_value(&vec![tag.clone()], OutputFormat::Yaml).unwrap();
    let path = write(dir.path(), "tags.yaml", &yaml);
    assert_eq!(load_fields(&builder, &path).unwrap(), vec![tag]);
}

#[test]
fn test_unlabelled_fields_get_builder_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "landing.yml",
        "- name: heroImage\n  widget: image\n- name: seo\n  widget: object\n",
    );

    let builder = Builder::default();
    let page = builder.page("landing", load_fields(&builder, &path).unwrap(), PageArgs::new());
    let hero = page.find_field("heroImage").unwrap();
    assert_eq!(hero.label, "Hero Image");
    assert!(!hero.required);
    let seo = page.find_field("seo").unwrap();
    assert_eq!(seo.label, "Seo");
    assert!(seo.required);

    let yaml = format_value(&page, OutputFormat::Yaml).unwrap();
    assert!(!yaml.contains("label: ''"));
}

#[test]
fn test_invalid_field_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "broken.json", "[{\"widget\": \"string\"}]");
    let err = load_fields(&Builder::default(), &path).unwrap_err();
    assert!(matches!(err, SettingsError::JsonError(_)));
}

// ---------------------------------------------------------------------------
// Generator config
// ---------------------------------------------------------------------------

#[test]
fn test_legacy_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        ".cms-fields.yml",
        "version: \"1.0\"\nrevision: legacy\n",
    );

    let config = GeneratorConfig::load(&path).unwrap();
    assert_eq!(config.revision, Revision::Legacy);
    let field = config.builder().field("caption", FieldArgs::new());
    assert!(field.i18n.is_none());
}

#[test]
fn test_config_missing_file() {
    let err = GeneratorConfig::load("no-such-dir/.cms-fields.yml").unwrap_err();
    assert!(matches!(err, SettingsError::IoError(_)));
}

#[test]
fn test_config_bad_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "config.yml", "version: [unclosed\n");
    let err = GeneratorConfig::load(&path).unwrap_err();
    assert!(matches!(err, SettingsError::YamlError(_)));
}
