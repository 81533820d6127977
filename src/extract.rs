//! Extraction entry point: locate, balance, clean.

use tracing::debug;

use crate::balance;
use crate::clean::clean;
use crate::error::Result;
use crate::locator;
use crate::options::ExtractOptions;

/// Returns the inner content of every element matching `options`, in
/// document order.
///
/// Each located opening tag is balanced against its closing tag, so elements
/// containing same-named children come back whole. With `remove_html` set the
/// content is passed through [`clean`]. No matches is an empty list.
///
/// One unbalanced element fails the whole call; nothing partial is returned.
///
/// # Errors
///
/// - [`Error::InvalidArgument`](crate::Error::InvalidArgument) when the
///   options do not name exactly one of class/id, or the tag name is unusable.
/// - [`Error::UnbalancedMarkup`](crate::Error::UnbalancedMarkup) when a
///   matched element is never closed.
pub fn extract_by_tag(html: &str, options: &ExtractOptions) -> Result<Vec<String>> {
    let selector = options.selector()?;
    let matches = locator::locate(html, &options.tag, &selector)?;

    let mut results = Vec::with_capacity(matches.len());
    for m in &matches {
        let span = balance::resolve(html, &m.tag, m.open_end)?;
        let inner = span.slice(html);
        results.push(if options.remove_html {
            clean(inner)
        } else {
            inner.to_string()
        });
    }

    debug!(
        tag = %options.tag,
        %selector,
        matches = results.len(),
        "extracted elements"
    );
    Ok(results)
}
