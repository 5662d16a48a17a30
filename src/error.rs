// src/error.rs
use std::error::Error;
use std::fmt;

/// Parse/persistence failures the boundary layer needs to tell apart.
/// Everything else travels as plain string errors in `Box<dyn Error>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeError {
    /// The projection fragment holds no roster table. Surfaced to the
    /// caller as "no data available"; match decoding is never attempted.
    NoRoster,
    /// A tournament identifier contained none of the known keywords.
    InvalidTitleFormat(String),
    /// The token cursor ran past the fragment end, or a required marker
    /// was missing. The whole decode fails; a partial bracket is worse
    /// than none.
    MarkupShape(String),
    /// No persisted bracket under that title.
    BracketNotFound(String),
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeError::NoRoster => write!(f, "no data available: roster table not found"),
            ScrapeError::InvalidTitleFormat(t) => {
                write!(f, "no recognized keyword in title: {t:?}")
            }
            ScrapeError::MarkupShape(what) => write!(f, "unexpected markup shape: {what}"),
            ScrapeError::BracketNotFound(title) => write!(f, "no stored bracket: {title:?}"),
        }
    }
}

impl Error for ScrapeError {}
