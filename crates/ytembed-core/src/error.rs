//! Error type for video id extraction and block rendering.

use thiserror::Error;

/// Failure while turning user input into an embed.
///
/// A URL that simply isn't a YouTube URL is not an error; extraction returns
/// `Ok(None)` for that. This type only covers structurally broken input.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// The URL looked like a `youtube.com/watch` link but could not be parsed
    /// as an absolute URL, so its query string is unreadable.
    #[error("malformed URL {url:?}: {source}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl EmbedError {
    pub(crate) fn malformed(url: &str, source: url::ParseError) -> Self {
        EmbedError::MalformedUrl {
            url: url.to_string(),
            source,
        }
    }
}
