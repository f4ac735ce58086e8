//! Builders for content-management configuration.
//!
//! This crate assembles the nested mappings a Netlify/Decap-style CMS reads
//! from its YAML configuration file:
//!
//! - [`Field`]: one editable property, built by [`Builder::field`] and the
//!   specialized builders (`list`, `markdown`, `relation`, ...).
//! - [`Page`]: a singleton content file made of fields.
//! - [`PostType`]: a folder collection of many content files.
//!
//! Every builder is a pure function: omitted options are filled in from a
//! [`Defaults`] value and nothing is validated, read or written. The
//! [`prelude`] exposes the builders as free functions over the standard
//! defaults, and [`format_value`] renders any result as YAML or JSON.
//!
//! # Example
//!
//! ```
//! use cms_fields_core::prelude::*;
//!
//! let home = page(
//!     "home",
//!     vec![
//!         title(None, FieldArgs::new()),
//!         image(Some("heroImage"), FieldArgs::new()),
//!         list(
//!             "features",
//!             Some(vec![string("heading", FieldArgs::new()), text(None, FieldArgs::new())].into()),
//!             FieldArgs::new(),
//!         ),
//!     ],
//!     PageArgs::new(),
//! );
//!
//! assert_eq!(home.file, "src/content/pages/home.yml");
//! assert_eq!(home.find_field("heroImage").unwrap().label, "Hero Image");
//! assert_eq!(
//!     home.find_field("features").unwrap().label_singular.as_deref(),
//!     Some("feature")
//! );
//! ```

mod args;
mod builder;
mod collections;
mod defaults;
mod fields;
mod merge;
mod output;
pub mod prelude;
mod text;
mod types;

pub use args::{FieldArgs, NumberRange, PageArgs, PostTypeArgs};
pub use builder::Builder;
pub use defaults::*;
pub use merge::{merge_extra, without_reserved};
pub use output::{OutputError, OutputFormat, format_value};
pub use text::titleize;
pub use types::*;
