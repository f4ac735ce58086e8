//! Free-function builders over the standard [`Defaults`](crate::Defaults).
//!
//! ```
//! use cms_fields_core::prelude::*;
//!
//! let articles = post_type(
//!     "articles",
//!     vec![
//!         title(None, FieldArgs::new()),
//!         date(None, FieldArgs::new()),
//!         list("authors", None, FieldArgs::new()),
//!         body(FieldArgs::new()),
//!     ],
//!     PostTypeArgs::new(),
//! );
//! assert_eq!(articles.fields.len(), 4);
//! ```

use std::sync::LazyLock;

pub use crate::args::{FieldArgs, NumberRange, PageArgs, PostTypeArgs};
pub use crate::builder::Builder;
pub use crate::text::titleize;
pub use crate::types::{
    Button, Field, I18n, ListItems, Page, PageExtension, PostFormat, PostType, SelectOption,
    Widget,
};

static STANDARD: LazyLock<Builder> = LazyLock::new(Builder::default);

pub fn field(name: &str, args: FieldArgs) -> Field {
    STANDARD.field(name, args)
}

pub fn string(name: &str, args: FieldArgs) -> Field {
    STANDARD.string(name, args)
}

pub fn required(name: &str, args: FieldArgs) -> Field {
    STANDARD.required(name, args)
}

pub fn title(name: Option<&str>, args: FieldArgs) -> Field {
    STANDARD.title(name, args)
}

pub fn object(name: &str, fields: Vec<Field>, args: FieldArgs) -> Field {
    STANDARD.object(name, fields, args)
}

pub fn group(name: &str, fields: Vec<Field>, args: FieldArgs) -> Field {
    STANDARD.group(name, fields, args)
}

pub fn list(name: &str, items: Option<ListItems>, args: FieldArgs) -> Field {
    STANDARD.list(name, items, args)
}

pub fn tags(name: &str, args: FieldArgs) -> Field {
    STANDARD.tags(name, args)
}

pub fn image(name: Option<&str>, args: FieldArgs) -> Field {
    STANDARD.image(name, args)
}

pub fn text(name: Option<&str>, args: FieldArgs) -> Field {
    STANDARD.text(name, args)
}

pub fn markdown(name: Option<&str>, args: FieldArgs) -> Field {
    STANDARD.markdown(name, args)
}

pub fn md(name: Option<&str>, args: FieldArgs) -> Field {
    STANDARD.md(name, args)
}

pub fn body(args: FieldArgs) -> Field {
    STANDARD.body(args)
}

pub fn date(name: Option<&str>, args: FieldArgs) -> Field {
    STANDARD.date(name, args)
}

pub fn boolean(name: &str, args: FieldArgs) -> Field {
    STANDARD.boolean(name, args)
}

pub fn option(value: &str, label: Option<&str>) -> SelectOption {
    STANDARD.option(value, label)
}

pub fn select(name: &str, options: Vec<SelectOption>, args: FieldArgs) -> Field {
    STANDARD.select(name, options, args)
}

pub fn url(name: Option<&str>, args: FieldArgs) -> Field {
    STANDARD.url(name, args)
}

pub fn relation(
    name: &str,
    collection: &str,
    value_field: &str,
    search_fields: &[&str],
    args: FieldArgs,
) -> Field {
    STANDARD.relation(name, collection, value_field, search_fields, args)
}

pub fn number(name: &str, args: FieldArgs) -> Field {
    STANDARD.number(name, args)
}

pub fn int(name: &str, args: FieldArgs) -> Field {
    STANDARD.int(name, args)
}

pub fn float(name: &str, args: FieldArgs) -> Field {
    STANDARD.float(name, args)
}

pub fn range(name: &str, bounds: NumberRange, args: FieldArgs) -> Field {
    STANDARD.range(name, bounds, args)
}

pub fn percentage(name: Option<&str>, args: FieldArgs) -> Field {
    STANDARD.percentage(name, args)
}

pub fn file(name: &str, args: FieldArgs) -> Field {
    STANDARD.file(name, args)
}

pub fn page(name: &str, fields: Vec<Field>, args: PageArgs) -> Page {
    STANDARD.page(name, fields, args)
}

pub fn settings_page(name: &str, fields: Vec<Field>, args: PageArgs) -> Page {
    STANDARD.settings_page(name, fields, args)
}

pub fn post_type(name: &str, fields: Vec<Field>, args: PostTypeArgs) -> PostType {
    STANDARD.post_type(name, fields, args)
}
