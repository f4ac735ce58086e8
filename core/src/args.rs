//! Option bags accepted by the builders.
//!
//! Every option is optional. Unset options are filled in by the builder;
//! set options win over the builder's defaults.

use serde_json::Value;

use crate::types::{Extra, Field, I18n, PageExtension, PostFormat, Widget};

/// Options of the field builders.
///
/// # Examples
///
/// ```
/// use cms_fields_core::{FieldArgs, Widget};
///
/// let args = FieldArgs::new()
///     .widget(Widget::Text)
///     .label("Summary")
///     .hint("Shown on cards")
///     .set("max", 280);
/// assert_eq!(args.widget, Some(Widget::Text));
/// assert_eq!(args.extra.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldArgs {
    pub widget: Option<Widget>,
    pub label: Option<String>,
    pub required: Option<bool>,
    pub collapsed: Option<bool>,
    pub fields: Vec<Field>,
    pub label_singular: Option<String>,
    pub field: Option<Box<Field>>,
    /// Emitted under the `default` key.
    pub default_value: Option<Value>,
    pub allow_add: Option<bool>,
    pub i18n: Option<I18n>,
    /// Passed through verbatim, merged last.
    pub extra: Extra,
}

impl FieldArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn widget(mut self, widget: Widget) -> Self {
        self.widget = Some(widget);
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = Some(collapsed);
        self
    }

    pub fn fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    pub fn label_singular(mut self, label: &str) -> Self {
        self.label_singular = Some(label.to_string());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.field = Some(Box::new(field));
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn allow_add(mut self, allow: bool) -> Self {
        self.allow_add = Some(allow);
        self
    }

    pub fn i18n(mut self, i18n: impl Into<I18n>) -> Self {
        self.i18n = Some(i18n.into());
        self
    }

    /// Sets the editor hint shown under the field.
    pub fn hint(self, hint: &str) -> Self {
        self.set("hint", hint)
    }

    /// Sets a widget-specific key in the extension map.
    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }
}

/// Options of [`page`](crate::Builder::page) and
/// [`settings_page`](crate::Builder::settings_page).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageArgs {
    pub label: Option<String>,
    /// File stem; defaults to the page name.
    pub filename: Option<String>,
    pub path: Option<String>,
    pub folder: Option<String>,
    pub extension: Option<PageExtension>,
    pub i18n: Option<I18n>,
    pub extra: Extra,
}

impl PageArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn filename(mut self, filename: &str) -> Self {
        self.filename = Some(filename.to_string());
        self
    }

    pub fn path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    pub fn folder(mut self, folder: &str) -> Self {
        self.folder = Some(folder.to_string());
        self
    }

    pub fn extension(mut self, extension: PageExtension) -> Self {
        self.extension = Some(extension);
        self
    }

    pub fn i18n(mut self, i18n: impl Into<I18n>) -> Self {
        self.i18n = Some(i18n.into());
        self
    }

    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }
}

/// Options of [`post_type`](crate::Builder::post_type).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostTypeArgs {
    pub label: Option<String>,
    pub format: Option<PostFormat>,
    pub path: Option<String>,
    /// Inserted verbatim between the path and the name, e.g. `/blog`.
    pub subfolder: Option<String>,
    pub slug: Option<String>,
    pub label_singular: Option<String>,
    pub i18n: Option<I18n>,
    pub extra: Extra,
}

impl PostTypeArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn format(mut self, format: PostFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    pub fn subfolder(mut self, subfolder: &str) -> Self {
        self.subfolder = Some(subfolder.to_string());
        self
    }

    pub fn slug(mut self, slug: &str) -> Self {
        self.slug = Some(slug.to_string());
        self
    }

    pub fn label_singular(mut self, label: &str) -> Self {
        self.label_singular = Some(label.to_string());
        self
    }

    pub fn i18n(mut self, i18n: impl Into<I18n>) -> Self {
        self.i18n = Some(i18n.into());
        self
    }

    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }
}

/// `min`/`max`/`step` of a `range` field.
///
/// # Examples
///
/// ```
/// use cms_fields_core::NumberRange;
/// use serde_json::json;
///
/// let r = NumberRange::default();
/// assert_eq!((r.min, r.max, r.step), (json!(0.0), json!(1.0), json!(0.1)));
///
/// let p = NumberRange::percentage();
/// assert_eq!(p.max, json!(100));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NumberRange {
    pub min: Value,
    pub max: Value,
    pub step: Value,
}

impl NumberRange {
    pub fn new(min: impl Into<Value>, max: impl Into<Value>, step: impl Into<Value>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
            step: step.into(),
        }
    }

    /// Whole percents from 1 to 100.
    pub fn percentage() -> Self {
        Self::new(1, 100, 1)
    }
}

impl Default for NumberRange {
    fn default() -> Self {
        use crate::defaults::{RANGE_MAX, RANGE_MIN, RANGE_STEP};
        Self::new(RANGE_MIN, RANGE_MAX, RANGE_STEP)
    }
}
