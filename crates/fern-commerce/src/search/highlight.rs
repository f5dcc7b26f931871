//! HTML-safe highlighting of search matches.

use regex::Regex;

const MARK_OPEN: &str = "<mark class=\"search-highlight\">";
const MARK_CLOSE: &str = "</mark>";

/// Escape HTML-significant characters.
fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Wrap matches of `query` inside `text` with `<mark>` tags.
///
/// Both inputs are HTML-escaped before matching, so the result is safe
/// to inject as markup without further processing. Matching is
/// case-insensitive and the matched text keeps its original casing.
/// A blank query returns the escaped text untouched.
pub fn highlight_match(text: &str, query: &str) -> String {
    let safe_text = html_escape(text);

    let trimmed = query.trim();
    if trimmed.is_empty() {
        return safe_text;
    }

    // The query goes through the same escaping as the text so the
    // pattern matches what the text has become, then through
    // regex::escape so it matches literally.
    let safe_query = html_escape(trimmed);
    let pattern = format!("(?i){}", regex::escape(&safe_query));
    match Regex::new(&pattern) {
        Ok(re) => re
            .replace_all(&safe_text, format!("{MARK_OPEN}$0{MARK_CLOSE}").as_str())
            .into_owned(),
        // regex::escape produces valid patterns; fall back to the plain
        // escaped text rather than failing the render.
        Err(_) => safe_text,
    }
}
