//! Per-platform post assembly.
//!
//! Each forum lays out a post differently, so each platform knows which
//! elements hold which fields and how to split combined fields apart.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::post::Post;

pub mod phpbb;
pub mod vbulletin;

/// Supported forum platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    PhpBb,
    VBulletin,
}

impl Platform {
    pub const ALL: [Self; 2] = [Self::PhpBb, Self::VBulletin];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PhpBb => "phpbb",
            Self::VBulletin => "vbulletin",
        }
    }

    /// Extracts every post on a topic page from this platform.
    ///
    /// # Errors
    ///
    /// Propagates extraction errors, [`Error::InvalidDate`] for dates in an
    /// unexpected layout, [`Error::MissingField`] for containers without an
    /// expected part, and [`Error::DataMismatch`] when the field lists do not
    /// line up.
    pub fn extract_posts(self, html: &str) -> Result<Vec<Post>> {
        match self {
            Self::PhpBb => phpbb::extract_posts(html),
            Self::VBulletin => vbulletin::extract_posts(html),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "unknown platform {s:?} (expected one of: phpbb, vbulletin)"
                ))
            })
    }
}
