//! Default values filled in by the builders.
//!
//! Each literal lives in a named constant, and [`Defaults`] groups them so a
//! [`Builder`](crate::Builder) can be configured as a whole. Two published
//! revisions of the generated format disagree on a few of these values;
//! [`Defaults::default`] follows the current one and [`Defaults::legacy`]
//! the earlier one.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{Button, I18n, PageExtension, PostFormat};

/// URL validation pattern of the current revision.
pub const URL_PATTERN: &str = r"https?:\/\/(www\.)?[-a-zA-Z0-9@:%._\+~#=]{1,256}\.[a-zA-Z0-9()]{1,24}\b([-a-zA-Z0-9()@:%_\+.~#?&//=]*)";

/// URL validation pattern of the legacy revision (short TLD bound, trailing newline).
pub const LEGACY_URL_PATTERN: &str = "https?:\\/\\/(www\\.)?[-a-zA-Z0-9@:%._\\+~#=]{1,256}\\.[a-zA-Z0-9()]{1,6}\\b([-a-zA-Z0-9()@:%_\\+.~#?&//=]*)\n";

/// Message shown when the URL pattern does not match.
pub const URL_MESSAGE: &str = "Must be a valid URL";

/// Toolbar of the minimal markdown editor.
pub const MARKDOWN_BUTTONS: [Button; 9] = [
    Button::Bold,
    Button::Italic,
    Button::Link,
    Button::HeadingThree,
    Button::HeadingFour,
    Button::HeadingFive,
    Button::HeadingSix,
    Button::BulletedList,
    Button::NumberedList,
];

pub const DATE_FORMAT: &str = "DD/MM/YYYY";

/// Storage format of datetime values.
pub const DATETIME_FORMAT: &str = "LLL";

pub const TAGS_HINT: &str = "Comma separated. Make sure there is no comma at the end.";

/// Prefix of page file paths (note the trailing slash).
pub const PAGE_PATH: &str = "src/content/";

/// Prefix of collection folders.
pub const COLLECTION_PATH: &str = "src/content";

pub const PAGES_FOLDER: &str = "pages";

/// Folder used by [`settings_page`](crate::Builder::settings_page).
pub const DATA_FOLDER: &str = "_data";

pub const SLUG_TEMPLATE: &str = "{{slug}}";

/// Default bounds of a `range` field.
pub const RANGE_MIN: f64 = 0.0;
pub const RANGE_MAX: f64 = 1.0;
pub const RANGE_STEP: f64 = 0.1;

/// Configurable defaults used by a [`Builder`](crate::Builder).
///
/// # Examples
///
/// ```
/// use cms_fields_core::{Defaults, I18n};
///
/// let current = Defaults::default();
/// assert_eq!(current.i18n, Some(I18n::Flag(true)));
///
/// let legacy = Defaults::legacy();
/// assert_eq!(legacy.i18n, None);
/// assert!(legacy.url_pattern.ends_with('\n'));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// i18n setting emitted when a builder call does not give one.
    /// `None` omits the key.
    pub i18n: Option<I18n>,
    pub url_pattern: String,
    pub url_message: String,
    pub markdown_buttons: Vec<Button>,
    pub date_format: String,
    /// `false` disables the time picker; a string sets its format.
    pub time_format: Value,
    pub datetime_format: String,
    pub tags_hint: String,
    pub page_path: String,
    pub pages_folder: String,
    pub data_folder: String,
    pub page_extension: PageExtension,
    pub collection_path: String,
    /// Collection `format`. `None` omits the key.
    pub post_format: Option<PostFormat>,
    pub slug: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            i18n: Some(I18n::Flag(true)),
            url_pattern: URL_PATTERN.to_string(),
            url_message: URL_MESSAGE.to_string(),
            markdown_buttons: MARKDOWN_BUTTONS.to_vec(),
            date_format: DATE_FORMAT.to_string(),
            time_format: Value::Bool(false),
            datetime_format: DATETIME_FORMAT.to_string(),
            tags_hint: TAGS_HINT.to_string(),
            page_path: PAGE_PATH.to_string(),
            pages_folder: PAGES_FOLDER.to_string(),
            data_folder: DATA_FOLDER.to_string(),
            page_extension: PageExtension::Yml,
            collection_path: COLLECTION_PATH.to_string(),
            post_format: Some(PostFormat::Frontmatter),
            slug: SLUG_TEMPLATE.to_string(),
        }
    }
}

impl Defaults {
    /// Defaults of the earlier revision: no i18n keys, no collection format,
    /// and the short-TLD URL pattern.
    pub fn legacy() -> Self {
        Self {
            i18n: None,
            url_pattern: LEGACY_URL_PATTERN.to_string(),
            post_format: None,
            ..Self::default()
        }
    }

    /// The markdown toolbar as a JSON array.
    pub(crate) fn buttons_value(&self) -> Value {
        Value::Array(
            self.markdown_buttons
                .iter()
                .map(|b| Value::String(b.as_str().to_string()))
                .collect(),
        )
    }
}
