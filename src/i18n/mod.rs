//! Internationalization: static site copy used around CMS content.
//!
//! `t(key, lang)` returns the fixed strings (section headings, labels,
//! fallback cards) and `format_*()`-style helpers in [`format`] cover the
//! strings with interpolation. CMS fields never go through here; they are
//! resolved with `vitrine_core::i18n::resolve`.

mod format;
mod labels;


pub use format::*;

use vitrine_core::i18n::Language;

/// Return the static string for `key` in `lang`.
/// Unknown keys render as `???` so a missing entry is visible on the page.
pub fn t(key: &str, lang: Language) -> &'static str {
    labels::lookup(key, lang).unwrap_or("???")
}
