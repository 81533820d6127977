//! phpBB topic pages.
//!
//! Layout of one post (prosilver):
//!
//! ```html
//! <div class="postbody">
//!   <h3><a href="#p1">Post title</a></h3>
//!   <ul class="post-buttons"><li><a href="..."><span>Quote</span></a></li></ul>
//!   <p class="author">by <strong>name</strong> » <time>Mon Jan 15, 2024 3:45 pm</time></p>
//!   <div class="content">Body</div>
//! </div>
//! ```

use tracing::debug;

use crate::datetime::{normalize_datetime, SourceFormat};
use crate::error::{Error, Result};
use crate::extract::extract_by_tag;
use crate::options::ExtractOptions;
use crate::patterns::PHPBB_AUTHOR;
use crate::post::{assemble_posts, Post};

const PLATFORM: &str = "phpbb";

/// Separator between author and date in the author container.
const AUTHOR_DATE_SEPARATOR: &str = " » ";

/// Marks the end of the title in a cleaned post body.
const TITLE_TERMINATOR: &str = "\nQuote";

/// Splits a cleaned `p.author` container into `(author, normalized date)`.
///
/// # Errors
///
/// Returns [`Error::MissingField`] if the container has no `by NAME » `
/// part or no date after the separator, and [`Error::InvalidDate`] if the
/// date does not parse.
pub fn split_author_container(container: &str) -> Result<(String, String)> {
    let date = container
        .split(AUTHOR_DATE_SEPARATOR)
        .nth(1)
        .ok_or(Error::MissingField {
            field: "date",
            platform: PLATFORM,
        })?;
    let published = normalize_datetime(date, SourceFormat::PhpBb)?;

    let author = PHPBB_AUTHOR
        .captures(container)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .ok_or(Error::MissingField {
            field: "author",
            platform: PLATFORM,
        })?;

    Ok((author, published))
}

/// Title is everything in the cleaned post body before the Quote button.
#[must_use]
pub fn title_from_postbody(postbody: &str) -> String {
    postbody
        .split_once(TITLE_TERMINATOR)
        .map_or(postbody, |(title, _)| title)
        .to_string()
}

/// Extracts every post on a phpBB topic page.
///
/// # Errors
///
/// See [`Platform::extract_posts`](super::Platform::extract_posts).
pub fn extract_posts(html: &str) -> Result<Vec<Post>> {
    let author_containers =
        extract_by_tag(html, &ExtractOptions::by_class("author").with_tag("p"))?;
    let contents = extract_by_tag(html, &ExtractOptions::by_class("content"))?;
    let postbodies = extract_by_tag(html, &ExtractOptions::by_class("postbody"))?;

    let mut authors = Vec::with_capacity(author_containers.len());
    let mut published = Vec::with_capacity(author_containers.len());
    for container in &author_containers {
        let (author, date) = split_author_container(container)?;
        authors.push(author);
        published.push(date);
    }

    let titles: Vec<String> = postbodies.iter().map(|p| title_from_postbody(p)).collect();

    debug!(
        titles = titles.len(),
        authors = authors.len(),
        contents = contents.len(),
        "phpbb fields extracted"
    );
    assemble_posts(titles, authors, published, contents)
}
