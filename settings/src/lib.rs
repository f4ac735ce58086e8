//! Generator configuration and field-file loading for `cms-fields`.
//!
//! This crate sits next to the pure builders of `cms-fields-core` and holds
//! everything that touches the filesystem:
//!
//! - [`GeneratorConfig`]: YAML settings choosing the output [`Revision`]
//!   and overriding individual builder defaults.
//! - [`load_fields`] / [`load_field`]: hand-written field definitions in
//!   JSON or YAML.
//!
//! # Quick start
//!
//! ```no_run
//! use cms_fields_core::PostTypeArgs;
//! use cms_fields_settings::{GeneratorConfig, load_fields};
//!
//! let config = GeneratorConfig::load(".cms-fields.yml").unwrap();
//! let builder = config.builder();
//! let fields = load_fields(&builder, "cms/article-fields.yml").unwrap();
//! let articles = builder.post_type("articles", fields, PostTypeArgs::new());
//! println!("{}", articles.folder);
//! ```

mod config;
mod error;
mod loader;

pub use config::{DefaultsOverrides, GeneratorConfig, Revision};
pub use error::{Result, SettingsError};
pub use loader::{DataFormat, load_field, load_fields};
