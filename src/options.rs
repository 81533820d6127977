//! Configuration options for tag extraction.
//!
//! `ExtractOptions` says which element to pull out of a page and whether the
//! result is cleaned to text.

use crate::error::{Error, Result};
use crate::locator::Selector;

/// Configuration options for [`extract_by_tag`](crate::extract_by_tag).
///
/// Exactly one of `class_name` and `id_name` must be set.
///
/// # Example
///
/// ```rust
/// use forum_extract::ExtractOptions;
///
/// // Every <p class="author">, cleaned to text
/// let options = ExtractOptions::by_class("author").with_tag("p");
///
/// // Raw inner HTML of the element with id "post-1"
/// let options = ExtractOptions {
///     id_name: Some("post-1".to_string()),
///     remove_html: false,
///     ..ExtractOptions::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Tag name of the element to extract.
    ///
    /// Default: `"div"`
    pub tag: String,

    /// Exact class attribute value to match.
    ///
    /// Default: `None`
    pub class_name: Option<String>,

    /// Exact id attribute value to match.
    ///
    /// Default: `None`
    pub id_name: Option<String>,

    /// Clean the inner HTML to text instead of returning it raw.
    ///
    /// Default: `true`
    pub remove_html: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            tag: "div".to_string(),
            class_name: None,
            id_name: None,
            remove_html: true,
        }
    }
}

impl ExtractOptions {
    #[must_use]
    pub fn by_class(class_name: impl Into<String>) -> Self {
        Self {
            class_name: Some(class_name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn by_id(id_name: impl Into<String>) -> Self {
        Self {
            id_name: Some(id_name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Return raw inner HTML rather than cleaned text.
    #[must_use]
    pub fn keep_html(mut self) -> Self {
        self.remove_html = false;
        self
    }

    /// Resolves the class/id fields into a single [`Selector`].
    ///
    /// An empty string counts as unset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] unless exactly one of `class_name`
    /// and `id_name` is set.
    pub fn selector(&self) -> Result<Selector> {
        let class_name = self.class_name.as_deref().filter(|s| !s.is_empty());
        let id_name = self.id_name.as_deref().filter(|s| !s.is_empty());

        match (class_name, id_name) {
            (Some(class), None) => Ok(Selector::Class(class.to_string())),
            (None, Some(id)) => Ok(Selector::Id(id.to_string())),
            (None, None) => Err(Error::InvalidArgument(
                "either class_name or id_name must be provided".to_string(),
            )),
            (Some(_), Some(_)) => Err(Error::InvalidArgument(
                "class_name and id_name are mutually exclusive".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = ExtractOptions::default();
        assert_eq!(options.tag, "div");
        assert!(options.class_name.is_none());
        assert!(options.id_name.is_none());
        assert!(options.remove_html);
    }

    #[test]
    fn builders_set_selected_fields_only() {
        let options = ExtractOptions::by_id("main").with_tag("section").keep_html();
        assert_eq!(options.tag, "section");
        assert_eq!(options.id_name.as_deref(), Some("main"));
        assert!(options.class_name.is_none());
        assert!(!options.remove_html);
    }

    #[test]
    fn selector_requires_exactly_one_kind() {
        assert_eq!(
            ExtractOptions::by_class("c").selector().ok(),
            Some(Selector::Class("c".into()))
        );
        assert_eq!(
            ExtractOptions::by_id("i").selector().ok(),
            Some(Selector::Id("i".into()))
        );
        assert!(matches!(
            ExtractOptions::default().selector(),
            Err(Error::InvalidArgument(_))
        ));

        let both = ExtractOptions {
            id_name: Some("i".into()),
            ..ExtractOptions::by_class("c")
        };
        assert!(matches!(both.selector(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn empty_selector_counts_as_unset() {
        let options = ExtractOptions {
            class_name: Some(String::new()),
            ..ExtractOptions::by_id("i")
        };
        assert_eq!(options.selector().ok(), Some(Selector::Id("i".into())));
    }
}
