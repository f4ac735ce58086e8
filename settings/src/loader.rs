//! Loading hand-written field definitions from disk.
//!
//! Field files hold either a sequence of fields (for pages, collections and
//! multi-field lists) or a single field (for single-item lists). The data
//! format is picked from the file extension. Only `name` is mandatory: every
//! loaded field, nested ones included, goes through
//! [`Builder::field`](cms_fields_core::Builder::field), so omitted keys get
//! the same defaults as fields built in code.
//!
//! ```no_run
//! use cms_fields_core::Builder;
//! use cms_fields_settings::{load_field, load_fields};
//!
//! let builder = Builder::default();
//! let fields = load_fields(&builder, "cms/post-fields.yml").unwrap();
//! let item = load_field(&builder, "cms/tag.json").unwrap();
//! println!("{} fields, item widget {}", fields.len(), item.widget.as_str());
//! ```

use std::path::Path;

use cms_fields_core::{Builder, Extra, Field, FieldArgs, I18n, Widget};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, SettingsError};

/// Serialization format of a field file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    /// Picks the format from a `.json`, `.yml` or `.yaml` extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use cms_fields_settings::DataFormat;
    ///
    /// assert_eq!(DataFormat::from_path("a/fields.yml"), Some(DataFormat::Yaml));
    /// assert_eq!(DataFormat::from_path("fields.JSON"), Some(DataFormat::Json));
    /// assert_eq!(DataFormat::from_path("fields.toml"), None);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(DataFormat::Json),
            "yml" | "yaml" => Some(DataFormat::Yaml),
            _ => None,
        }
    }

    /// Parses `raw` as this format.
    pub fn parse<T: DeserializeOwned>(self, raw: &str) -> Result<T> {
        match self {
            DataFormat::Json => Ok(serde_json::from_str(raw)?),
            DataFormat::Yaml => Ok(serde_yaml::from_str(raw)?),
        }
    }
}

/// A field as written in a file, before defaults are filled in.
#[derive(Debug, Deserialize)]
struct FieldDef {
    name: String,
    #[serde(default)]
    widget: Option<Widget>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    required: Option<bool>,
    #[serde(default)]
    collapsed: Option<bool>,
    #[serde(rename = "default", default)]
    default_value: Option<Value>,
    #[serde(default)]
    i18n: Option<I18n>,
    #[serde(default)]
    fields: Vec<FieldDef>,
    #[serde(default)]
    field: Option<Box<FieldDef>>,
    #[serde(default)]
    label_singular: Option<String>,
    #[serde(default)]
    allow_add: Option<bool>,
    #[serde(flatten)]
    extra: Extra,
}

impl FieldDef {
    fn build(self, builder: &Builder) -> Field {
        let args = FieldArgs {
            widget: self.widget,
            label: self.label,
            required: self.required,
            collapsed: self.collapsed,
            fields: self.fields.into_iter().map(|f| f.build(builder)).collect(),
            label_singular: self.label_singular,
            field: self.field.map(|f| Box::new((*f).build(builder))),
            default_value: self.default_value,
            allow_add: self.allow_add,
            i18n: self.i18n,
            extra: self.extra,
        };
        builder.field(&self.name, args)
    }
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = DataFormat::from_path(path)
        .ok_or_else(|| SettingsError::UnsupportedFormat(path.to_path_buf()))?;
    let raw = std::fs::read_to_string(path)?;
    format.parse(&raw)
}

/// Loads an ordered sequence of fields, defaulted by `builder`.
///
/// # Errors
///
/// Returns [`UnsupportedFormat`](SettingsError::UnsupportedFormat) for an
/// unknown extension, [`IoError`](SettingsError::IoError) if the file cannot
/// be read, or a JSON/YAML error if parsing fails.
pub fn load_fields(builder: &Builder, path: impl AsRef<Path>) -> Result<Vec<Field>> {
    let path = path.as_ref();
    let defs: Vec<FieldDef> = load(path)?;
    let fields: Vec<Field> = defs.into_iter().map(|def| def.build(builder)).collect();
    debug!(path = %path.display(), count = fields.len(), "loaded field sequence");
    Ok(fields)
}

/// Loads a single field definition, defaulted by `builder`.
///
/// # Errors
///
/// Same as [`load_fields`].
pub fn load_field(builder: &Builder, path: impl AsRef<Path>) -> Result<Field> {
    let path = path.as_ref();
    let def: FieldDef = load(path)?;
    let field = def.build(builder);
    debug!(path = %path.display(), name = %field.name, "loaded field");
    Ok(field)
}

#[cfg(test)]
mod tests {
    use cms_fields_core::Widget;

    use super::*;

    #[test]
    fn test_parse_yaml_sequence() {
        let raw = r#"
- name: title
  widget: string
  required: true
- name: cover
  widget: image
  media_library: uploadcare
"#;
        let fields: Vec<Field> = DataFormat::Yaml.parse(raw).unwrap();
        assert_eq!(fields.len(), 2);
        assert!(fields[0].required);
        assert_eq!(fields[1].widget, Widget::Image);
        assert_eq!(
            fields[1].get("media_library").and_then(|v| v.as_str()),
            Some("uploadcare")
        );
    }

    #[test]
    fn test_parse_json_single() {
        let field: Field = DataFormat::Json
            .parse(r#"{"name":"tag","widget":"string"}"#)
            .unwrap();
        assert_eq!(field.name, "tag");
    }

    #[test]
    fn test_field_def_gets_builder_defaults() {
        let raw = r#"
- name: heroImage
  widget: image
- name: seo
  widget: object
  fields:
    - name: metaTitle
- name: tags
  widget: list
  required: false
  default: [news]
"#;
        let builder = Builder::default();
        let defs: Vec<FieldDef> = DataFormat::Yaml.parse(raw).unwrap();
        let fields: Vec<Field> = defs.into_iter().map(|d| d.build(&builder)).collect();

        assert_eq!(fields[0].label, "Hero Image");
        assert!(!fields[0].required);
        assert_eq!(fields[1].label, "Seo");
        assert!(fields[1].required);
        let nested = fields[1].find_field("metaTitle").unwrap();
        assert_eq!(nested.label, "Meta Title");
        assert_eq!(nested.widget, Widget::String);
        assert!(!fields[2].required);
        assert_eq!(fields[2].default_value, Some(serde_json::json!(["news"])));
        assert!(fields.iter().all(|f| f.i18n == Some(I18n::Flag(true))));
    }

    #[test]
    fn test_field_def_single_item_and_legacy() {
        let def: FieldDef = DataFormat::Json
            .parse(r#"{"name":"authors","widget":"list","field":{"name":"author"}}"#)
            .unwrap();
        let list = def.build(&Builder::legacy());
        assert!(list.required);
        assert_eq!(list.field.as_ref().unwrap().label, "Author");
        assert!(list.i18n.is_none());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_fields(&Builder::default(), "fields.toml").unwrap_err();
        assert!(matches!(err, SettingsError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_field(&Builder::default(), "definitely-missing-cms-fields.json").unwrap_err();
        assert!(matches!(err, SettingsError::IoError(_)));
    }
}
