//! Reading saved pages into UTF-8.
//!
//! Older forum installs often serve ISO-8859-1 or windows-1252. The charset is
//! taken from the page's own meta tags and the bytes are decoded to UTF-8
//! before any tag scanning happens.

use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

use crate::error::Result;

/// How many leading bytes are searched for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Detects the page encoding from its charset declaration, defaulting to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    [&*CONTENT_TYPE_CHARSET_RE, &*CHARSET_META_RE]
        .into_iter()
        .find_map(|re| {
            re.captures(&head)
                .and_then(|c| c.get(1))
                .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        })
        .unwrap_or(UTF_8)
}

/// Decodes page bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD rather than failing.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

/// Reads a saved page from disk and decodes it.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read.
pub fn read_html_file(path: impl AsRef<Path>) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(transcode_to_utf8(&bytes))
}

/// Reads a whole page from `reader` and decodes it.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if reading fails.
pub fn read_html<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(transcode_to_utf8(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_meta_charset() {
        let html = br#"<html><head><meta charset="utf-8"></head><body>Test</body></html>"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn phpbb_style_content_type_header() {
        let html = br#"<meta http-equiv="content-type" content="text/html; charset=ISO-8859-1" />"#;
        // encoding_rs maps ISO-8859-1 to windows-1252 per WHATWG
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn self_closing_meta_charset() {
        let html = b"<meta charset=windows-1252/>";
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn unknown_label_falls_back_to_utf8() {
        let html = br#"<meta charset="no-such-charset">"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn no_declaration_defaults_to_utf8() {
        assert_eq!(detect_encoding(b"<div>x</div>"), UTF_8);
    }

    #[test]
    fn latin1_post_body_is_decoded() {
        let html = b"<meta charset=\"ISO-8859-1\"><div class=\"content\">Caf\xE9</div>";
        assert!(transcode_to_utf8(html).contains("Café"));
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let result = transcode_to_utf8(b"<div>ok \xFF\xFE ok</div>");
        assert!(result.starts_with("<div>ok "));
        assert!(result.contains('\u{FFFD}'));
    }

    #[test]
    fn read_html_from_reader() {
        match read_html(&b"<div id=\"x\">y</div>"[..]) {
            Ok(page) => assert_eq!(page, "<div id=\"x\">y</div>"),
            other => panic!("expected Ok(_), got {other:?}"),
        }
    }
}
