//! Recognized URL shapes and per-shape id extraction.

use url::Url;

use crate::error::EmbedError;

/// A YouTube URL shape, recognized by substring containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlShape {
    /// `youtube.com/watch?v=<id>`
    Watch,
    /// `youtu.be/<id>`
    Short,
    /// `youtube.com/embed/<id>`
    Embed,
}

/// Shapes in the order they are tried; the first match wins.
const PRECEDENCE: [UrlShape; 3] = [UrlShape::Watch, UrlShape::Short, UrlShape::Embed];

impl UrlShape {
    /// Substring that identifies this shape.
    pub fn marker(self) -> &'static str {
        match self {
            UrlShape::Watch => "youtube.com/watch",
            UrlShape::Short => "youtu.be/",
            UrlShape::Embed => "youtube.com/embed/",
        }
    }

    /// First shape whose marker occurs in `url`.
    pub fn detect(url: &str) -> Option<UrlShape> {
        PRECEDENCE.into_iter().find(|shape| url.contains(shape.marker()))
    }

    /// Pulls the raw (possibly empty) id out of a URL already known to have
    /// this shape.
    pub(crate) fn raw_id(self, url: &str) -> Result<Option<String>, EmbedError> {
        match self {
            UrlShape::Watch => {
                let parsed = Url::parse(url).map_err(|e| EmbedError::malformed(url, e))?;
                Ok(parsed
                    .query_pairs()
                    .find(|(key, _)| key == "v")
                    .map(|(_, value)| value.into_owned()))
            }
            UrlShape::Short | UrlShape::Embed => {
                Ok(segment_after(url, self.marker()).map(str::to_string))
            }
        }
    }
}

/// The path segment following the first `marker`, cut at `?` and then at `/`.
fn segment_after<'a>(url: &'a str, marker: &str) -> Option<&'a str> {
    let rest = url.split(marker).nth(1)?;
    let rest = rest.split_once('?').map_or(rest, |(head, _)| head);
    Some(rest.split_once('/').map_or(rest, |(head, _)| head))
}
