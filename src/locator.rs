//! Opening-tag location by class or id.
//!
//! Attribute values are matched literally: the value must appear verbatim,
//! in the same case, between the quotes of the attribute. A class attribute
//! `"author h-text-size--14"` is only found by that exact string, never by
//! `"author"` alone or by `"h-text-size--14 author"`. Tag name and attribute
//! name are case-insensitive.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::{Error, Result};

/// Which attribute a [`Selector`] tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Class,
    Id,
}

impl AttributeKind {
    /// Attribute name as written in markup.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Id => "id",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("class") {
            Ok(Self::Class)
        } else if s.eq_ignore_ascii_case("id") {
            Ok(Self::Id)
        } else {
            Err(Error::UnsupportedAttribute(format!(
                "{s:?} (only class and id are supported)"
            )))
        }
    }
}

/// Attribute predicate used to find a target element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    Class(String),
    Id(String),
}

impl Selector {
    /// Builds a selector from an attribute name (`class` or `id`) and value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedAttribute`] for any other attribute name.
    pub fn new(attribute: &str, value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        Ok(match attribute.parse::<AttributeKind>()? {
            AttributeKind::Class => Self::Class(value),
            AttributeKind::Id => Self::Id(value),
        })
    }

    #[must_use]
    pub const fn kind(&self) -> AttributeKind {
        match self {
            Self::Class(_) => AttributeKind::Class,
            Self::Id(_) => AttributeKind::Id,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Class(v) | Self::Id(v) => v,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?}", self.kind(), self.value())
    }
}

/// One opening tag found by [`locate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    pub tag: String,
    pub kind: AttributeKind,
    pub value: String,
    /// Byte offset of the `<` that starts the opening tag.
    pub start: usize,
    /// Byte offset just past the opening tag's `>`.
    pub open_end: usize,
}

/// Checks that `tag` can be spliced into a tag pattern.
pub(crate) fn validate_tag_name(tag: &str) -> Result<()> {
    if tag.is_empty() {
        return Err(Error::InvalidArgument("tag name must not be empty".to_string()));
    }
    if let Some(bad) = tag
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':')))
    {
        return Err(Error::InvalidArgument(format!(
            "tag name {tag:?} contains unsupported character {bad:?}"
        )));
    }
    Ok(())
}

/// Builds the opening-tag pattern for `tag` carrying `selector`.
///
/// The tag and attribute names are case-insensitive; the value is escaped and
/// matched case-sensitively. Either quote character may delimit the value.
fn opening_tag_pattern(tag: &str, selector: &Selector) -> Result<Regex> {
    let pattern = format!(
        r#"(?i:<{tag})\s[^>]*(?i:{attr})=["']{value}["'][^>]*>"#,
        tag = regex::escape(tag),
        attr = selector.kind().as_str(),
        value = regex::escape(selector.value()),
    );
    Regex::new(&pattern).map_err(|e| Error::InvalidArgument(format!("selector {selector}: {e}")))
}

/// Finds every opening `<tag ...>` whose class or id equals the selector value.
///
/// Matches are returned in document order and never overlap.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `tag` is not a plain tag name.
pub fn locate(html: &str, tag: &str, selector: &Selector) -> Result<Vec<TagMatch>> {
    validate_tag_name(tag)?;
    let re = opening_tag_pattern(tag, selector)?;

    Ok(re
        .find_iter(html)
        .map(|m| TagMatch {
            tag: tag.to_string(),
            kind: selector.kind(),
            value: selector.value().to_string(),
            start: m.start(),
            open_end: m.end(),
        })
        .collect())
}
