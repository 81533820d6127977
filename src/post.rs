//! Post records and assembly from parallel field lists.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One forum post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub author: String,
    /// Publish time as `YYYY/MM/DD HH:MM`.
    pub published: String,
    pub text: String,
}

/// Zips per-field lists into posts by position.
///
/// Every list comes from one pass over the same page, so they must line up
/// one-to-one.
///
/// # Errors
///
/// Returns [`Error::DataMismatch`] if the four lists differ in length.
pub fn assemble_posts(
    titles: Vec<String>,
    authors: Vec<String>,
    published: Vec<String>,
    contents: Vec<String>,
) -> Result<Vec<Post>> {
    let n = titles.len();
    if authors.len() != n || published.len() != n || contents.len() != n {
        return Err(Error::DataMismatch {
            titles: n,
            authors: authors.len(),
            published: published.len(),
            contents: contents.len(),
        });
    }

    Ok(titles
        .into_iter()
        .zip(authors)
        .zip(published)
        .zip(contents)
        .map(|(((title, author), published), text)| Post {
            title,
            author,
            published,
            text,
        })
        .collect())
}
