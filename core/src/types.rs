//! Data model for generated CMS configuration.
//!
//! Every value produced by a builder is one of the types in this module. They
//! serialize with [`serde`] into the mapping shapes the CMS reads from its
//! YAML configuration file, and deserialize back so hand-written field
//! definitions can be loaded from disk.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Open-ended extension map merged last into a generated mapping.
///
/// Keys keep insertion order, and inserting an existing key replaces its
/// value in place.
pub type Extra = serde_json::Map<String, Value>;

/// Input control type for a field.
///
/// # Examples
///
/// ```
/// use cms_fields_core::Widget;
///
/// assert_eq!(Widget::default(), Widget::String);
/// assert!(Widget::List.is_container());
/// assert_eq!(Widget::Datetime.as_str(), "datetime");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Widget {
    Boolean,
    Code,
    Color,
    Datetime,
    File,
    Hidden,
    Image,
    List,
    Map,
    Markdown,
    Number,
    Object,
    Relation,
    Select,
    #[default]
    String,
    Text,
}

impl Widget {
    /// Every known widget kind.
    pub const ALL: [Widget; 16] = [
        Widget::Boolean,
        Widget::Code,
        Widget::Color,
        Widget::Datetime,
        Widget::File,
        Widget::Hidden,
        Widget::Image,
        Widget::List,
        Widget::Map,
        Widget::Markdown,
        Widget::Number,
        Widget::Object,
        Widget::Relation,
        Widget::Select,
        Widget::String,
        Widget::Text,
    ];

    /// Returns the tag written to the configuration file.
    pub fn as_str(self) -> &'static str {
        match self {
            Widget::Boolean => "boolean",
            Widget::Code => "code",
            Widget::Color => "color",
            Widget::Datetime => "datetime",
            Widget::File => "file",
            Widget::Hidden => "hidden",
            Widget::Image => "image",
            Widget::List => "list",
            Widget::Map => "map",
            Widget::Markdown => "markdown",
            Widget::Number => "number",
            Widget::Object => "object",
            Widget::Relation => "relation",
            Widget::Select => "select",
            Widget::String => "string",
            Widget::Text => "text",
        }
    }

    /// Looks a widget up by its tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.as_str() == tag)
    }

    /// Container widgets (`object`, `list`) are required unless told otherwise.
    pub fn is_container(self) -> bool {
        matches!(self, Widget::Object | Widget::List)
    }
}

/// Markdown editor toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Button {
    Bold,
    Italic,
    Code,
    Link,
    HeadingOne,
    HeadingTwo,
    HeadingThree,
    HeadingFour,
    HeadingFive,
    HeadingSix,
    Quote,
    BulletedList,
    NumberedList,
}

impl Button {
    pub fn as_str(self) -> &'static str {
        match self {
            Button::Bold => "bold",
            Button::Italic => "italic",
            Button::Code => "code",
            Button::Link => "link",
            Button::HeadingOne => "heading-one",
            Button::HeadingTwo => "heading-two",
            Button::HeadingThree => "heading-three",
            Button::HeadingFour => "heading-four",
            Button::HeadingFive => "heading-five",
            Button::HeadingSix => "heading-six",
            Button::Quote => "quote",
            Button::BulletedList => "bulleted-list",
            Button::NumberedList => "numbered-list",
        }
    }
}

/// File extension of a singleton page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageExtension {
    #[default]
    Yml,
    Yaml,
    Toml,
    Json,
    Md,
    Markdown,
    Html,
}

impl PageExtension {
    pub fn as_str(self) -> &'static str {
        match self {
            PageExtension::Yml => "yml",
            PageExtension::Yaml => "yaml",
            PageExtension::Toml => "toml",
            PageExtension::Json => "json",
            PageExtension::Md => "md",
            PageExtension::Markdown => "markdown",
            PageExtension::Html => "html",
        }
    }
}

/// Storage format of the entries of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PostFormat {
    Yml,
    Yaml,
    Toml,
    Json,
    #[default]
    Frontmatter,
    YamlFrontmatter,
    TomlFrontmatter,
    JsonFrontmatter,
}

/// Internationalization setting of a field, page or collection.
///
/// # Examples
///
/// ```
/// use cms_fields_core::I18n;
///
/// assert!(I18n::Flag(true).is_enabled());
/// assert!(!I18n::Flag(false).is_enabled());
/// assert!(I18n::Strategy("duplicate".into()).is_enabled());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum I18n {
    Flag(bool),
    /// Field-level strategy such as `translate` or `duplicate`.
    Strategy(String),
    /// Collection-level options (locales, structure...).
    Options(serde_json::Map<String, Value>),
}

impl I18n {
    /// `false` is the only disabled setting.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, I18n::Flag(false))
    }
}

impl From<bool> for I18n {
    fn from(flag: bool) -> Self {
        I18n::Flag(flag)
    }
}

impl From<&str> for I18n {
    fn from(strategy: &str) -> Self {
        I18n::Strategy(strategy.to_string())
    }
}

/// One editable property of a page or collection entry.
///
/// Optional keys are only serialized when set, and the extension map is
/// flattened between the common keys and the nested-field keys.
///
/// # Examples
///
/// ```
/// use cms_fields_core::prelude::*;
///
/// let f = field("heroImage", FieldArgs::new().widget(Widget::Image));
/// assert_eq!(f.label, "Hero Image");
/// assert!(!f.required);
/// assert!(f.get("pattern").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub widget: Widget,
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub collapsed: bool,
    #[serde(rename = "default", default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n: Option<I18n>,
    /// Widget-specific keys (`options`, `pattern`, `min`, `hint`...).
    #[serde(flatten)]
    pub extra: Extra,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Field>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<Box<Field>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_singular: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_add: Option<bool>,
}

impl Field {
    /// Keys owned by typed attributes. The builders move an extension-map
    /// `default` into [`default_value`](Self::default_value) and drop the rest.
    pub const RESERVED_KEYS: [&'static str; 11] = [
        "widget",
        "name",
        "label",
        "required",
        "collapsed",
        "default",
        "i18n",
        "fields",
        "field",
        "label_singular",
        "allow_add",
    ];

    /// Returns a widget-specific value from the extension map.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Nested fields of an `object` or multi-field `list`.
    pub fn nested(&self) -> &[Field] {
        self.fields.as_deref().unwrap_or(&[])
    }

    /// Finds a direct child field by name.
    pub fn find_field(&self, name: &str) -> Option<&Field> {
        self.nested().iter().find(|f| f.name == name)
    }
}

/// A `{value, label}` entry of a `select` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    /// Creates an option whose label is the title-cased value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cms_fields_core::SelectOption;
    ///
    /// let opt = SelectOption::new("my-value");
    /// assert_eq!(opt.label, "My value");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: crate::titleize(&value),
            value,
        }
    }

    /// Replaces the label. An empty label keeps the title-cased one.
    pub fn with_label(mut self, label: &str) -> Self {
        if !label.is_empty() {
            self.label = label.to_string();
        }
        self
    }
}

impl From<SelectOption> for Value {
    fn from(option: SelectOption) -> Self {
        let mut map = serde_json::Map::new();
        map.insert("value".into(), Value::String(option.value));
        map.insert("label".into(), Value::String(option.label));
        Value::Object(map)
    }
}

/// Sub-field definition of a `list`: several named fields, or one unnamed
/// item type.
#[derive(Debug, Clone, PartialEq)]
pub enum ListItems {
    /// Stored under `fields`.
    Fields(Vec<Field>),
    /// Stored under `field`.
    Field(Box<Field>),
}

impl From<Vec<Field>> for ListItems {
    fn from(fields: Vec<Field>) -> Self {
        ListItems::Fields(fields)
    }
}

impl From<Field> for ListItems {
    fn from(field: Field) -> Self {
        ListItems::Field(Box::new(field))
    }
}

/// Editor settings of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Editor {
    pub preview: bool,
}

/// A singleton content file made of fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub name: String,
    pub file: String,
    pub label: String,
    pub fields: Vec<Field>,
    /// Set when the i18n setting is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n: Option<I18n>,
    /// Set (to `false`) when i18n is disabled, keeping the key out of the
    /// CMS's sight.
    #[serde(rename = "_i18n", default, skip_serializing_if = "Option::is_none")]
    pub disabled_i18n: Option<I18n>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Page {
    pub const RESERVED_KEYS: [&'static str; 6] = ["name", "file", "label", "fields", "i18n", "_i18n"];

    /// Finds a top-level field by name.
    pub fn find_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A folder collection: many content files sharing one field layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostType {
    pub name: String,
    pub folder: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<PostFormat>,
    pub fields: Vec<Field>,
    pub editor: Editor,
    pub label_singular: String,
    pub create: bool,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n: Option<I18n>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl PostType {
    pub const RESERVED_KEYS: [&'static str; 11] = [
        "name",
        "folder",
        "label",
        "format",
        "fields",
        "editor",
        "label_singular",
        "create",
        "slug",
        "i18n",
        "_i18n",
    ];

    /// Finds a top-level field by name.
    pub fn find_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}
