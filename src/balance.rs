//! Balanced-tag scanning.
//!
//! Regular expressions cannot match arbitrarily nested elements, so the end of
//! an element is found by walking forward from its opening tag and counting
//! same-named opening and closing tags until the depth returns to zero.
//!
//! ```html
//! <div class="post">       <- located opening tag, depth 1
//!   A
//!   <div class="quote">    <- depth 2
//!     B
//!   </div>                 <- depth 1
//!   C
//! </div>                   <- depth 0: balancing close
//! ```
//!
//! The scan position strictly increases on every step, so it always
//! terminates. Running out of input with depth above zero is reported as
//! [`Error::UnbalancedMarkup`]. So is a nested `<tag ` with no `>` anywhere
//! after it: no `</tag>` can follow, and stopping there keeps a run of
//! unclosed tags linear.

use crate::error::{Error, Result};
use crate::locator::validate_tag_name;

/// Inner content of an element as a half-open byte range into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractedSpan {
    /// First byte after the opening tag.
    pub inner_start: usize,
    /// Byte offset of the balancing `</tag>`.
    pub inner_end: usize,
}

impl ExtractedSpan {
    /// Slices the inner content out of the document the span was resolved in.
    #[must_use]
    pub fn slice<'a>(&self, html: &'a str) -> &'a str {
        &html[self.inner_start..self.inner_end]
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.inner_end - self.inner_start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.inner_start == self.inner_end
    }
}

/// What starts at the current scan position.
enum Token {
    Open { end: usize },
    Close { end: usize },
    /// `<tag` with no `>` left in the document.
    Unterminated,
    Other,
}

/// ASCII case-insensitive prefix test on raw bytes.
fn starts_with_ci(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.len() >= needle.len() && haystack[..needle.len()].eq_ignore_ascii_case(needle)
}

/// Classifies the bytes at `pos`, which must hold a `<`.
///
/// An opening tag is `<tag` followed by whitespace, `/` or `>` and then
/// anything up to the next `>`. A closing tag is exactly `</tag>`.
fn classify(bytes: &[u8], pos: usize, tag: &[u8]) -> Token {
    let rest = &bytes[pos + 1..];

    if starts_with_ci(rest, tag) {
        let after_name = pos + 1 + tag.len();
        match bytes.get(after_name) {
            Some(b) if b.is_ascii_whitespace() || *b == b'/' || *b == b'>' => {
                return match bytes[after_name..].iter().position(|&b| b == b'>') {
                    Some(gt) => Token::Open { end: after_name + gt + 1 },
                    None => Token::Unterminated,
                };
            }
            _ => {}
        }
        return Token::Other;
    }

    if rest.first() == Some(&b'/')
        && starts_with_ci(&rest[1..], tag)
        && rest.get(1 + tag.len()) == Some(&b'>')
    {
        // `</` + name + `>`
        return Token::Close { end: pos + tag.len() + 3 };
    }

    Token::Other
}

/// Finds the inner span of the element whose opening `<tag ...>` ends at
/// `open_end`.
///
/// Scanning starts at depth 1. Each nested `<tag ...>` adds one level and each
/// `</tag>` removes one; the `</tag>` that brings the depth to zero closes the
/// element. The span excludes that closing tag.
///
/// # Errors
///
/// Returns [`Error::UnbalancedMarkup`] when the document ends before the depth
/// reaches zero, and [`Error::InvalidArgument`] for an unusable tag name or an
/// `open_end` past the end of the document or inside a UTF-8 character.
pub fn resolve(html: &str, tag: &str, open_end: usize) -> Result<ExtractedSpan> {
    validate_tag_name(tag)?;
    let bytes = html.as_bytes();
    if open_end > bytes.len() {
        return Err(Error::InvalidArgument(format!(
            "offset {open_end} is past the end of a {}-byte document",
            bytes.len()
        )));
    }
    if !html.is_char_boundary(open_end) {
        return Err(Error::InvalidArgument(format!(
            "offset {open_end} is not on a character boundary"
        )));
    }
    let needle = tag.as_bytes();

    let mut depth: usize = 1;
    let mut pos = open_end;

    while pos < bytes.len() {
        // Only a `<` can start a tag; jump straight to the next one.
        let Some(lt) = bytes[pos..].iter().position(|&b| b == b'<') else {
            break;
        };
        pos += lt;

        match classify(bytes, pos, needle) {
            Token::Open { end } => {
                depth += 1;
                pos = end;
            }
            Token::Close { end } => {
                depth -= 1;
                if depth == 0 {
                    return Ok(ExtractedSpan {
                        inner_start: open_end,
                        inner_end: pos,
                    });
                }
                pos = end;
            }
            Token::Unterminated => break,
            Token::Other => pos += 1,
        }
    }

    Err(Error::UnbalancedMarkup {
        tag: tag.to_string(),
        offset: open_end,
        depth,
    })
}
