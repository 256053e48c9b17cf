//! Video id extraction from YouTube URLs.
//!
//! Three URL shapes are recognized, in precedence order:
//! `youtube.com/watch?v=<id>`, `youtu.be/<id>` and `youtube.com/embed/<id>`.
//! Anything else yields no id. Only the watch shape needs a real URL parse,
//! so it is the only one that can fail.

mod shape;

pub use shape::UrlShape;

use serde::Serialize;
use std::fmt;

use crate::error::EmbedError;

/// A non-empty video identifier. Opaque beyond that: it is never checked
/// against YouTube's id alphabet or length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Wraps `raw`, or returns `None` when it is empty.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts the video id from `url`.
///
/// Returns `Ok(None)` when no URL is given, the URL is empty, no shape
/// matches, or the extracted token is empty. Returns
/// [`EmbedError::MalformedUrl`] only when the URL contains
/// `youtube.com/watch` but is not a parseable absolute URL.
///
/// # Examples
///
/// - `extract_video_id("https://www.youtube.com/watch?v=abc123")` → `Some("abc123")`
/// - `extract_video_id("https://youtu.be/abc123?t=5")` → `Some("abc123")`
/// - `extract_video_id(None)` → `None`
pub fn extract_video_id<'a>(url: impl Into<Option<&'a str>>) -> Result<Option<VideoId>, EmbedError> {
    let url = match url.into() {
        Some(u) if !u.is_empty() => u,
        _ => return Ok(None),
    };

    let Some(shape) = UrlShape::detect(url) else {
        tracing::debug!(url, "no known YouTube URL shape");
        return Ok(None);
    };
    tracing::debug!(url, ?shape, "matched YouTube URL shape");

    Ok(shape.raw_id(url)?.and_then(VideoId::new))
}
