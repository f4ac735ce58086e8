use crate::defaults::Defaults;

/// Builds fields, pages and collections from a set of [`Defaults`].
///
/// The builder methods live in the `fields` and `collections` modules. For
/// the standard defaults the [`prelude`](crate::prelude) offers the same
/// builders as free functions.
///
/// # Examples
///
/// ```
/// use cms_fields_core::{Builder, FieldArgs};
///
/// let legacy = Builder::legacy();
/// let f = legacy.field("caption", FieldArgs::new());
/// assert!(f.i18n.is_none());
///
/// let current = Builder::default();
/// assert!(current.field("caption", FieldArgs::new()).i18n.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Builder {
    defaults: Defaults,
}

impl Builder {
    pub fn new(defaults: Defaults) -> Self {
        Self { defaults }
    }

    /// Builder producing the earlier revision of the format.
    pub fn legacy() -> Self {
        Self::new(Defaults::legacy())
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }
}
