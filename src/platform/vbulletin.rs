//! vBulletin 5 topic pages.
//!
//! Title and date share one `b-media__body` block: the first line is the
//! title, the second the date. Posts without a title only carry the date.

use tracing::{debug, warn};

use crate::datetime::{normalize_datetime, SourceFormat};
use crate::error::{Error, Result};
use crate::extract::extract_by_tag;
use crate::options::ExtractOptions;
use crate::post::{assemble_posts, Post};

const PLATFORM: &str = "vbulletin";

const AUTHOR_CLASS: &str = "author h-text-size--14";
const CONTENT_CLASS: &str = "OLD__post-content h-padding-vert-xl";
const TITLE_DATE_CLASS: &str = "b-media__body";

/// Placeholder title for posts that have none.
pub const UNTITLED: &str = "No Title";

/// Splits a cleaned `b-media__body` block into `(title, normalized date)`.
///
/// # Errors
///
/// Returns [`Error::MissingField`] for an empty block and
/// [`Error::InvalidDate`] if the date line does not parse.
pub fn split_title_and_date(block: &str) -> Result<(String, String)> {
    let lines: Vec<&str> = block.lines().collect();
    match lines.as_slice() {
        [] => Err(Error::MissingField {
            field: "date",
            platform: PLATFORM,
        }),
        [date] => {
            warn!(date = %date, "vbulletin post has no title");
            Ok((
                UNTITLED.to_string(),
                normalize_datetime(date, SourceFormat::VBulletin)?,
            ))
        }
        [title, date, ..] => Ok((
            (*title).to_string(),
            normalize_datetime(date, SourceFormat::VBulletin)?,
        )),
    }
}

/// Extracts every post on a vBulletin topic page.
///
/// # Errors
///
/// See [`Platform::extract_posts`](super::Platform::extract_posts).
pub fn extract_posts(html: &str) -> Result<Vec<Post>> {
    let authors = extract_by_tag(html, &ExtractOptions::by_class(AUTHOR_CLASS))?;
    let contents = extract_by_tag(html, &ExtractOptions::by_class(CONTENT_CLASS))?;
    let blocks = extract_by_tag(html, &ExtractOptions::by_class(TITLE_DATE_CLASS))?;

    let mut titles = Vec::with_capacity(blocks.len());
    let mut published = Vec::with_capacity(blocks.len());
    for block in &blocks {
        let (title, date) = split_title_and_date(block)?;
        titles.push(title);
        published.push(date);
    }

    debug!(
        titles = titles.len(),
        authors = authors.len(),
        contents = contents.len(),
        "vbulletin fields extracted"
    );
    assemble_posts(titles, authors, published, contents)
}
