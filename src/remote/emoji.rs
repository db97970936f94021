//! Emoji shortcode normalization.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Regex for `:shortcode:` tokens.
static SHORTCODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":([A-Za-z0-9_+\-]+):").expect("SHORTCODE_REGEX must compile")
});

/// Replace every known `:shortcode:` in `input` with its emoji.
///
/// Unknown shortcodes and literal emoji are left untouched.
///
/// # Example
///
/// ```
/// use auto_push::remote::emoji::normalize_emoji;
///
/// assert_eq!(normalize_emoji(":rocket:"), "🚀");
/// assert_eq!(normalize_emoji("🚀"), "🚀");
/// assert_eq!(normalize_emoji(":not_an_emoji:"), ":not_an_emoji:");
/// ```
pub fn normalize_emoji(input: &str) -> String {
    SHORTCODE_REGEX
        .replace_all(input.trim(), |caps: &Captures| {
            emojis::get_by_shortcode(&caps[1])
                .map(|e| e.as_str().to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
