//! JSON output for extracted posts.
//!
//! Posts are written as one JSON array with four-space indentation.
//! Non-ASCII text is written as-is, not escaped.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;
use crate::post::Post;

/// Serializes any value with the post-file layout.
fn write_json<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    value.serialize(&mut ser)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Writes `posts` as a JSON array to `writer`.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) or [`Error::Json`](crate::Error::Json)
/// if writing fails.
pub fn write_posts<W: Write>(writer: W, posts: &[Post]) -> Result<()> {
    write_json(writer, posts)
}

/// Writes extracted strings as a JSON array to `writer`.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) or [`Error::Json`](crate::Error::Json)
/// if writing fails.
pub fn write_strings<W: Write>(writer: W, items: &[String]) -> Result<()> {
    write_json(writer, items)
}

/// Creates (or truncates) `path` and writes `posts` to it.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be created or
/// written.
pub fn write_posts_to_file(path: impl AsRef<Path>, posts: &[Post]) -> Result<()> {
    let file = File::create(path)?;
    write_posts(BufWriter::new(file), posts)
}
