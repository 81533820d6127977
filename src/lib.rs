//! # forum-extract
//!
//! Post extraction for saved phpBB and vBulletin topic pages.
//!
//! Elements are found by an exact class or id value and their inner content is
//! recovered by counting nested same-named tags, so a `<div>` holding other
//! `<div>`s comes back whole. No DOM is built.
//!
//! ## Quick Start
//!
//! ```rust
//! use forum_extract::{extract_by_tag, ExtractOptions};
//!
//! let html = r#"<div class="post">A<div class="quote">B</div>C</div>"#;
//!
//! let raw = extract_by_tag(html, &ExtractOptions::by_class("post").keep_html())?;
//! assert_eq!(raw, vec![r#"A<div class="quote">B</div>C"#]);
//!
//! let text = extract_by_tag(html, &ExtractOptions::by_class("post"))?;
//! assert_eq!(text, vec!["ABC"]);
//! # Ok::<(), forum_extract::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - [`locator`]: finds opening tags carrying the selector
//! - [`balance`]: walks to the matching closing tag
//! - [`clean`]: turns inner HTML into text
//! - [`platform`]: assembles posts from per-field lists

mod error;
mod extract;
mod options;
mod patterns;

/// Opening-tag location by exact class or id.
pub mod locator;

/// Depth-counting scan for the balancing closing tag.
pub mod balance;

/// Inner HTML to text conversion.
pub mod clean;

/// Character encoding detection for saved pages.
pub mod encoding;

/// Platform date formats and normalization.
pub mod datetime;

/// Post records.
pub mod post;

/// Per-platform post assembly.
pub mod platform;

/// JSON output.
pub mod output;

pub use balance::ExtractedSpan;
pub use error::{Error, Result};
pub use extract::extract_by_tag;
pub use locator::{AttributeKind, Selector, TagMatch};
pub use options::ExtractOptions;
pub use platform::Platform;
pub use post::{assemble_posts, Post};
