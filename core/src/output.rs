//! Output formatting for generated configuration.

use serde::Serialize;
use thiserror::Error;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    /// File extension conventionally used for the format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Yaml => "yml",
            OutputFormat::Json => "json",
        }
    }
}

/// Serialization failures while rendering a value.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Renders any built value (field, page, collection, defaults...) as text.
///
/// # Examples
///
/// ```
/// use cms_fields_core::prelude::*;
/// use cms_fields_core::{OutputFormat, format_value};
///
/// let yaml = format_value(&option("draft", None), OutputFormat::Yaml).unwrap();
/// assert_eq!(yaml, "value: draft\nlabel: Draft\n");
/// ```
pub fn format_value<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, OutputError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_yaml_field_key_order() {
        let f = list("posts", None, FieldArgs::new().hint("Newest first"));
        let yaml = format_value(&f, OutputFormat::Yaml).unwrap();
        let keys: Vec<&str> = yaml
            .lines()
            .filter(|l| !l.starts_with(' ') && !l.starts_with('-'))
            .filter_map(|l| l.split(':').next())
            .collect();
        assert_eq!(
            keys,
            vec![
                "widget",
                "name",
                "label",
                "required",
                "collapsed",
                "i18n",
                "hint",
                "minimize_collapsed",
                "label_singular",
            ]
        );
    }

    #[test]
    fn test_sparse_output_has_no_nulls() {
        let f = field("caption", FieldArgs::new());
        let json = format_value(&f, OutputFormat::Json).unwrap();
        assert!(!json.contains("null"));
        assert!(!json.contains("\"default\""));
        assert!(!json.contains("\"fields\""));
    }

    #[test]
    fn test_disabled_page_i18n_key() {
        let p = page("home", Vec::new(), PageArgs::new().i18n(false));
        let yaml = format_value(&p, OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("_i18n: false"));
        assert!(!yaml.lines().any(|l| l.starts_with("i18n:")));
    }

    #[test]
    fn test_post_type_json_shape() {
        let post = post_type("articles", Vec::new(), PostTypeArgs::new());
        let json = format_value(&post, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["editor"]["preview"], serde_json::json!(false));
        assert_eq!(value["format"], serde_json::json!("frontmatter"));
        assert_eq!(value["create"], serde_json::json!(true));
    }

    #[test]
    fn test_extension() {
        assert_eq!(OutputFormat::Yaml.extension(), "yml");
        assert_eq!(OutputFormat::Json.extension(), "json");
    }
}
