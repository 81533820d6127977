//! Inner HTML to plain text.

use crate::patterns::{ANY_TAG, BLANK_LINES, LINE_BREAK_TAG};

/// Converts extracted inner HTML into text.
///
/// Steps, in order:
/// 1. every `<br>`, `<br/>` or `<br />` becomes a newline
/// 2. all other tags are removed (see [`ANY_TAG`] for the `>`-in-attribute limitation)
/// 3. tab characters are removed
/// 4. blank lines collapse, so line breaks survive but empty lines do not
/// 5. leading and trailing whitespace is trimmed
///
/// Entities are left as written.
#[must_use]
pub fn clean(inner_html: &str) -> String {
    let text = LINE_BREAK_TAG.replace_all(inner_html, "\n");
    let text = ANY_TAG.replace_all(&text, "");
    let text = text.replace('\t', "");
    let text = BLANK_LINES.replace_all(&text, "\n");
    text.trim().to_string()
}
