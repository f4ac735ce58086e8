//! Field builders.
//!
//! [`Builder::field`] holds all the defaulting rules; every other builder in
//! this module fixes a few options and delegates to it.

use serde_json::Value;

use crate::args::{FieldArgs, NumberRange};
use crate::builder::Builder;
use crate::merge::{merge_extra, without_reserved};
use crate::text::{singularize, titleize};
use crate::types::{Extra, Field, ListItems, SelectOption, Widget};

fn extra_of<const N: usize>(pairs: [(&str, Value); N]) -> Extra {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Seeds the extension map with builder defaults the caller may override.
fn seeded(mut args: FieldArgs, base: Extra) -> FieldArgs {
    args.extra = merge_extra(base, args.extra);
    args
}

fn strings(values: &[&str]) -> Value {
    Value::Array(values.iter().map(|v| Value::String(v.to_string())).collect())
}

impl Builder {
    /// Builds a generic field.
    ///
    /// The widget defaults to `string`, the label to the title-cased name,
    /// and `required` to true only for `object` and `list` widgets.
    ///
    /// # Examples
    ///
    /// ```
    /// use cms_fields_core::{Builder, FieldArgs, Widget};
    ///
    /// let b = Builder::default();
    /// let f = b.field("metaTitle", FieldArgs::new());
    /// assert_eq!(f.widget, Widget::String);
    /// assert_eq!(f.label, "Meta Title");
    /// assert!(!f.required);
    ///
    /// let group = b.field("seo", FieldArgs::new().widget(Widget::Object));
    /// assert!(group.required);
    ///
    /// let optional = b.field("seo", FieldArgs::new().widget(Widget::Object).required(false));
    /// assert!(!optional.required);
    /// ```
    pub fn field(&self, name: &str, args: FieldArgs) -> Field {
        let widget = args.widget.unwrap_or_default();
        let mut extra = args.extra;
        // A `default` in the extension map outranks the typed value.
        let default_value = extra.remove("default").or(args.default_value);
        let label = args
            .label
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| titleize(name));

        Field {
            widget,
            name: name.to_string(),
            label,
            required: args.required.unwrap_or_else(|| widget.is_container()),
            collapsed: args.collapsed.unwrap_or(false),
            default_value,
            i18n: args.i18n.or_else(|| self.defaults().i18n.clone()),
            extra: without_reserved(extra, &Field::RESERVED_KEYS),
            fields: (!args.fields.is_empty()).then_some(args.fields),
            field: args.field,
            label_singular: args.label_singular,
            allow_add: args.allow_add,
        }
    }

    /// Same as [`field`](Self::field).
    pub fn string(&self, name: &str, args: FieldArgs) -> Field {
        self.field(name, args)
    }

    /// A field that must be filled in.
    pub fn required(&self, name: &str, mut args: FieldArgs) -> Field {
        args.required = Some(true);
        self.field(name, args)
    }

    /// A required string field, named `title` unless told otherwise.
    pub fn title(&self, name: Option<&str>, args: FieldArgs) -> Field {
        self.required(name.unwrap_or("title"), args)
    }

    /// A required group of nested fields.
    pub fn object(&self, name: &str, fields: Vec<Field>, mut args: FieldArgs) -> Field {
        args.widget = Some(Widget::Object);
        args.fields = fields;
        self.required(name, args)
    }

    /// Same as [`object`](Self::object).
    pub fn group(&self, name: &str, fields: Vec<Field>, args: FieldArgs) -> Field {
        self.object(name, fields, args)
    }

    /// A required, collapsed list.
    ///
    /// The singular label is the explicit one, else the label minus its last
    /// character, else the name minus its last character. Several sub-fields
    /// go under `fields`; a single item type goes under `field`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cms_fields_core::{Builder, FieldArgs, ListItems};
    ///
    /// let b = Builder::default();
    /// let posts = b.list("posts", None, FieldArgs::new());
    /// assert_eq!(posts.label_singular.as_deref(), Some("post"));
    /// assert!(posts.collapsed && posts.required);
    ///
    /// let item = b.field("tag", FieldArgs::new());
    /// let tags = b.list("tags", Some(ListItems::from(item)), FieldArgs::new());
    /// assert!(tags.field.is_some() && tags.fields.is_none());
    /// ```
    pub fn list(&self, name: &str, items: Option<ListItems>, mut args: FieldArgs) -> Field {
        let label_singular = args
            .label_singular
            .take()
            .or_else(|| {
                args.label
                    .as_deref()
                    .filter(|label| !label.is_empty())
                    .map(singularize)
            })
            .unwrap_or_else(|| singularize(name));

        args.widget = Some(Widget::List);
        args.collapsed = args.collapsed.or(Some(true));
        args.label_singular = Some(label_singular);

        match items {
            Some(ListItems::Fields(fields)) => args.fields = fields,
            Some(ListItems::Field(field)) => args.field = Some(field),
            None => {}
        }

        if !args.extra.contains_key("minimize_collapsed") {
            args.extra
                .insert("minimize_collapsed".to_string(), Value::Bool(true));
        }

        self.required(name, args)
    }

    /// A list of plain strings typed as comma-separated text.
    pub fn tags(&self, name: &str, args: FieldArgs) -> Field {
        let hint = Value::String(self.defaults().tags_hint.clone());
        self.list(name, None, seeded(args, extra_of([("hint", hint)])))
    }

    /// An image upload, named `image` unless told otherwise.
    pub fn image(&self, name: Option<&str>, mut args: FieldArgs) -> Field {
        args.widget = Some(Widget::Image);
        self.field(name.unwrap_or("image"), args)
    }

    /// A multi-line plain text field, named `text` unless told otherwise.
    pub fn text(&self, name: Option<&str>, mut args: FieldArgs) -> Field {
        args.widget = Some(Widget::Text);
        self.field(name.unwrap_or("text"), args)
    }

    /// A minimal markdown editor, named `text` unless told otherwise.
    ///
    /// `minimal`, `buttons` and `editor_components` are defaults the caller
    /// can override through the extension map.
    pub fn markdown(&self, name: Option<&str>, mut args: FieldArgs) -> Field {
        args.widget = args.widget.or(Some(Widget::Markdown));
        let base = extra_of([
            ("minimal", Value::Bool(true)),
            ("buttons", self.defaults().buttons_value()),
            ("editor_components", Value::Array(Vec::new())),
        ]);
        self.field(name.unwrap_or("text"), seeded(args, base))
    }

    /// Same as [`markdown`](Self::markdown).
    pub fn md(&self, name: Option<&str>, args: FieldArgs) -> Field {
        self.markdown(name, args)
    }

    /// The markdown `body` of an entry.
    pub fn body(&self, args: FieldArgs) -> Field {
        self.markdown(Some("body"), args)
    }

    /// A date picker without time, named `date` unless told otherwise.
    pub fn date(&self, name: Option<&str>, mut args: FieldArgs) -> Field {
        args.widget = args.widget.or(Some(Widget::Datetime));
        let defaults = self.defaults();
        let base = extra_of([
            ("date_format", Value::String(defaults.date_format.clone())),
            ("time_format", defaults.time_format.clone()),
            ("format", Value::String(defaults.datetime_format.clone())),
        ]);
        self.field(name.unwrap_or("date"), seeded(args, base))
    }

    /// A toggle that defaults to `false`.
    pub fn boolean(&self, name: &str, mut args: FieldArgs) -> Field {
        args.widget = args.widget.or(Some(Widget::Boolean));
        args.default_value = args.default_value.or(Some(Value::Bool(false)));
        self.field(name, args)
    }

    /// A dropdown over the given options.
    ///
    /// # Examples
    ///
    /// ```
    /// use cms_fields_core::{Builder, FieldArgs, SelectOption};
    /// use serde_json::json;
    ///
    /// let b = Builder::default();
    /// let f = b.select("layout", vec![SelectOption::new("two-columns")], FieldArgs::new());
    /// assert_eq!(
    ///     f.get("options"),
    ///     Some(&json!([{"value": "two-columns", "label": "Two columns"}]))
    /// );
    /// ```
    pub fn select(&self, name: &str, options: Vec<SelectOption>, mut args: FieldArgs) -> Field {
        args.widget = args.widget.or(Some(Widget::Select));
        let options = Value::Array(options.into_iter().map(Value::from).collect());
        self.field(name, seeded(args, extra_of([("options", options)])))
    }

    /// A string validated as a URL, named `url` unless told otherwise.
    pub fn url(&self, name: Option<&str>, args: FieldArgs) -> Field {
        let defaults = self.defaults();
        let pattern = strings(&[defaults.url_pattern.as_str(), defaults.url_message.as_str()]);
        self.field(name.unwrap_or("url"), seeded(args, extra_of([("pattern", pattern)])))
    }

    /// A reference to entries of another collection.
    pub fn relation(
        &self,
        name: &str,
        collection: &str,
        value_field: &str,
        search_fields: &[&str],
        mut args: FieldArgs,
    ) -> Field {
        args.widget = args.widget.or(Some(Widget::Relation));
        let base = extra_of([
            ("collection", Value::String(collection.to_string())),
            ("value_field", Value::String(value_field.to_string())),
            ("search_fields", strings(search_fields)),
        ]);
        self.field(name, seeded(args, base))
    }

    pub fn number(&self, name: &str, mut args: FieldArgs) -> Field {
        args.widget = args.widget.or(Some(Widget::Number));
        self.field(name, args)
    }

    pub fn int(&self, name: &str, args: FieldArgs) -> Field {
        let base = extra_of([("value_type", Value::String("int".into()))]);
        self.number(name, seeded(args, base))
    }

    pub fn float(&self, name: &str, args: FieldArgs) -> Field {
        let base = extra_of([("value_type", Value::String("float".into()))]);
        self.number(name, seeded(args, base))
    }

    /// A bounded number; see [`NumberRange::default`] for the usual bounds.
    pub fn range(&self, name: &str, bounds: NumberRange, args: FieldArgs) -> Field {
        let base = extra_of([("min", bounds.min), ("max", bounds.max), ("step", bounds.step)]);
        self.number(name, seeded(args, base))
    }

    /// Whole percents, named `percentage` unless told otherwise.
    pub fn percentage(&self, name: Option<&str>, args: FieldArgs) -> Field {
        self.range(name.unwrap_or("percentage"), NumberRange::percentage(), args)
    }

    /// A single file upload.
    pub fn file(&self, name: &str, mut args: FieldArgs) -> Field {
        args.widget = Some(Widget::File);
        let base = extra_of([("allow_multiple", Value::Bool(false))]);
        self.field(name, seeded(args, base))
    }

    /// An entry of a `select` field.
    pub fn option(&self, value: &str, label: Option<&str>) -> SelectOption {
        let option = SelectOption::new(value);
        match label {
            Some(label) => option.with_label(label),
            None => option,
        }
    }
}
