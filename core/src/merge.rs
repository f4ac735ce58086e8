//! Extension-map merging.
//!
//! Builders seed an [`Extra`] map with their own defaults and then lay the
//! caller's map over it, so the caller always has the last word on
//! widget-specific keys.
//!
//! # Example
//!
//! ```
//! use cms_fields_core::{Extra, merge_extra};
//! use serde_json::json;
//!
//! let mut base = Extra::new();
//! base.insert("minimal".into(), json!(true));
//! base.insert("hint".into(), json!("builder"));
//!
//! let mut overlay = Extra::new();
//! overlay.insert("hint".into(), json!("caller"));
//!
//! let merged = merge_extra(base, overlay);
//! assert_eq!(merged["hint"], json!("caller"));
//! assert_eq!(merged.keys().next().map(String::as_str), Some("minimal"));
//! ```

use tracing::debug;

use crate::types::Extra;

/// Lays `overlay` over `base`.
///
/// Overlay values replace base values in place, so a key keeps the position
/// it had in `base`; new keys are appended in overlay order.
pub fn merge_extra(mut base: Extra, overlay: Extra) -> Extra {
    for (key, value) in overlay {
        base.insert(key, value);
    }
    base
}

/// Removes keys owned by typed attributes of the target mapping.
///
/// Serializing such a key from the extension map would duplicate it next to
/// the typed value.
pub fn without_reserved(mut extra: Extra, reserved: &[&str]) -> Extra {
    for key in reserved {
        if extra.remove(*key).is_some() {
            debug!(key, "dropping reserved key from extension map");
        }
    }
    extra
}
