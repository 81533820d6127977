//! Compiled regex patterns for text cleaning and post field parsing.
//!
//! All patterns are compiled once at first use with `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Content Cleaning Patterns
// =============================================================================

/// Matches line-break tags: `<br>`, `<br/>`, `<br />`, any case.
pub static LINE_BREAK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("LINE_BREAK_TAG regex"));

/// Matches any remaining tag.
///
/// Known limitation: a `>` inside a quoted attribute value ends the match
/// early, leaving the rest of that tag in the text.
pub static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("ANY_TAG regex"));

/// Matches a newline, optional whitespace, and another newline.
pub static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("BLANK_LINES regex"));

// =============================================================================
// Platform Field Patterns
// =============================================================================

/// Captures the author in a phpBB "by NAME » DATE" container.
pub static PHPBB_AUTHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"by(.*?) » ").expect("PHPBB_AUTHOR regex"));
