//! Generator configuration.
//!
//! Defines the YAML-serializable configuration that picks the output
//! revision and overrides individual builder defaults.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! revision: current
//! defaults:
//!   page_path: site/
//!   date_format: YYYY-MM-DD
//!   markdown_buttons: [bold, italic, link]
//!   i18n: translate
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use cms_fields_core::{Builder, Button, Defaults, I18n, PageExtension, PostFormat};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, SettingsError};

/// Which published revision of the generated format to start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Revision {
    /// Emits i18n keys and collection formats.
    #[default]
    Current,
    /// Omits i18n keys and collection formats; short-TLD URL pattern.
    Legacy,
}

impl Revision {
    /// Returns the unmodified defaults of this revision.
    pub fn defaults(self) -> Defaults {
        match self {
            Revision::Current => Defaults::default(),
            Revision::Legacy => Defaults::legacy(),
        }
    }
}

/// Individual default overrides. Unset entries keep the revision's value.
///
/// # Examples
///
/// ```
/// use cms_fields_core::Defaults;
/// use cms_fields_settings::DefaultsOverrides;
///
/// let overrides = DefaultsOverrides {
///     slug: Some("{{year}}-{{slug}}".into()),
///     ..Default::default()
/// };
/// let defaults = overrides.apply(Defaults::default());
/// assert_eq!(defaults.slug, "{{year}}-{{slug}}");
/// assert_eq!(defaults.pages_folder, "pages");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i18n: Option<I18n>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown_buttons: Option<Vec<Button>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_format: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages_folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_extension: Option<PageExtension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_format: Option<PostFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl DefaultsOverrides {
    /// Applies the set overrides on top of `base`.
    pub fn apply(self, mut base: Defaults) -> Defaults {
        if let Some(i18n) = self.i18n {
            base.i18n = Some(i18n);
        }
        if let Some(pattern) = self.url_pattern {
            base.url_pattern = pattern;
        }
        if let Some(message) = self.url_message {
            base.url_message = message;
        }
        if let Some(buttons) = self.markdown_buttons {
            base.markdown_buttons = buttons;
        }
        if let Some(format) = self.date_format {
            base.date_format = format;
        }
        if let Some(format) = self.time_format {
            base.time_format = format;
        }
        if let Some(format) = self.datetime_format {
            base.datetime_format = format;
        }
        if let Some(hint) = self.tags_hint {
            base.tags_hint = hint;
        }
        if let Some(path) = self.page_path {
            base.page_path = path;
        }
        if let Some(folder) = self.pages_folder {
            base.pages_folder = folder;
        }
        if let Some(folder) = self.data_folder {
            base.data_folder = folder;
        }
        if let Some(extension) = self.page_extension {
            base.page_extension = extension;
        }
        if let Some(path) = self.collection_path {
            base.collection_path = path;
        }
        if let Some(format) = self.post_format {
            base.post_format = Some(format);
        }
        if let Some(slug) = self.slug {
            base.slug = slug;
        }
        base
    }

    /// Returns `true` when no override is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Top-level generator configuration.
///
/// Loaded from a YAML file (typically `.cms-fields.yml` in the site root).
///
/// # Examples
///
/// ```
/// # let yaml = r#"
/// # version: "1.0"
/// # revision: legacy
/// # defaults:
/// #   data_folder: settings
/// # "#;
/// # let config: cms_fields_settings::GeneratorConfig = serde_yaml::from_str(yaml).unwrap();
/// let defaults = config.resolve_defaults();
/// assert_eq!(defaults.i18n, None);
/// assert_eq!(defaults.data_folder, "settings");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Configuration format version (e.g., `"1.0"`).
    pub version: String,
    #[serde(default)]
    pub revision: Revision,
    #[serde(default, skip_serializing_if = "DefaultsOverrides::is_empty")]
    pub defaults: DefaultsOverrides,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            revision: Revision::default(),
            defaults: DefaultsOverrides::default(),
        }
    }
}

impl GeneratorConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](SettingsError::IoError) if the file cannot be
    /// read, [`YamlError`](SettingsError::YamlError) if parsing fails, or
    /// [`InvalidConfig`](SettingsError::InvalidConfig) if the version is
    /// empty.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_yaml::from_reader(reader)?;
        if config.version.trim().is_empty() {
            return Err(SettingsError::InvalidConfig(
                "version cannot be empty".to_string(),
            ));
        }
        debug!(path = %path.display(), revision = ?config.revision, "loaded generator config");
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](SettingsError::IoError) if the file cannot be
    /// written, or [`YamlError`](SettingsError::YamlError) if serialization
    /// fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Revision defaults with the configured overrides applied.
    pub fn resolve_defaults(&self) -> Defaults {
        self.defaults.clone().apply(self.revision.defaults())
    }

    /// A builder using [`resolve_defaults`](Self::resolve_defaults).
    pub fn builder(&self) -> Builder {
        Builder::new(self.resolve_defaults())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_yaml() -> &'static str {
        r#"
version: "1.0"
revision: current
defaults:
  page_path: site/
  pages_folder: content
  page_extension: md
  date_format: YYYY-MM-DD
  time_format: HH:mm
  markdown_buttons: [bold, italic, link]
  i18n: translate
  post_format: yaml-frontmatter
"#
    }

    fn minimal_yaml() -> &'static str {
        r#"
version: "1.0"
"#
    }

    #[test]
    fn test_deserialize_complete() {
        let config: GeneratorConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.revision, Revision::Current);
        assert_eq!(config.defaults.page_path.as_deref(), Some("site/"));
        assert_eq!(config.defaults.page_extension, Some(PageExtension::Md));
        assert_eq!(
            config.defaults.markdown_buttons,
            Some(vec![Button::Bold, Button::Italic, Button::Link])
        );
        assert_eq!(config.defaults.i18n, Some(I18n::Strategy("translate".into())));
        assert_eq!(config.defaults.post_format, Some(PostFormat::YamlFrontmatter));
    }

    #[test]
    fn test_deserialize_minimal() {
        let config: GeneratorConfig = serde_yaml::from_str(minimal_yaml()).unwrap();
        assert_eq!(config.revision, Revision::Current);
        assert!(config.defaults.is_empty());
        assert_eq!(config.resolve_defaults(), Defaults::default());
    }

    #[test]
    fn test_resolve_applies_overrides() {
        let config: GeneratorConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        let defaults = config.resolve_defaults();
        assert_eq!(defaults.page_path, "site/");
        assert_eq!(defaults.time_format, Value::String("HH:mm".into()));
        assert_eq!(defaults.markdown_buttons.len(), 3);
        assert_eq!(defaults.slug, "{{slug}}");
    }

    #[test]
    fn test_builder_uses_resolved_defaults() {
        let config: GeneratorConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        let page = config
            .builder()
            .page("about", Vec::new(), cms_fields_core::PageArgs::new());
        assert_eq!(page.file, "site/content/about.md");
    }

    #[test]
    fn test_legacy_revision_base() {
        let config = GeneratorConfig {
            revision: Revision::Legacy,
            ..GeneratorConfig::default()
        };
        assert_eq!(config.resolve_defaults(), Defaults::legacy());
    }

    #[test]
    fn test_load_rejects_empty_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "version: \"\"\n").unwrap();
        let err = GeneratorConfig::load(&path).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidConfig(_)));
    }

    #[test]
    fn test_load_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");

        let original: GeneratorConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        original.save(&path).unwrap();

        let loaded = GeneratorConfig::load(&path).unwrap();
        assert_eq!(loaded, original);
    }
}
