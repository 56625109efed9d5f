// src/v_format.rs

use regex::Regex;
use std::sync::LazyLock;

static BRACKET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[.*?\]").unwrap());
static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.*?)_").unwrap());

/// Byte length of the `[Bv21:` prefix on bracketed specification references.
const BRACKET_PREFIX_LEN: usize = "[Bv21:".len();

/// Turns a code's raw description into a DocBook-safe fragment.
///
/// Three rewrites, in order:
/// 1. `[Bv21:7.1]`-style references become `(Bv2.1 7.1)`;
/// 2. `<` and `>` are escaped (before markup is inserted, so the inserted
///    tags survive);
/// 3. `_word_` spans become `<code>word</code>`.
///
/// Text which matches none of the patterns passes through unchanged; this
/// step never fails.
///
/// # Example
/// ```
/// use verifier_doc::v_format::format_description;
///
/// assert_eq!(
///     format_description("uses _foo_ bar [Bv21:7.1]"),
///     "uses <code>foo</code> bar (Bv2.1 7.1)"
/// );
/// ```
pub fn format_description(description: &str) -> String {
    let text = BRACKET.replace_all(description, |caps: &regex::Captures| {
        let bracket = &caps[0];
        // Too-short brackets cannot carry the reference prefix; leave them.
        match bracket.get(BRACKET_PREFIX_LEN..bracket.len() - 1) {
            Some(reference) => format!("(Bv2.1 {reference})"),
            None => bracket.to_string(),
        }
    });
    let text = text.replace('<', "&lt;").replace('>', "&gt;");
    EMPHASIS.replace_all(&text, "<code>$1</code>").into_owned()
}

/// Formats a description and wraps it in a period-suffixed `<listitem>`.
pub fn format_list_item(description: &str) -> String {
    format!("<listitem>{}.</listitem>", format_description(description))
}
