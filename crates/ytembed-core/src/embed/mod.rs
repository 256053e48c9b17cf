//! Embed rendering: compose a video id and parameter set into an embed
//! reference, and run the whole block pipeline from author rows.

mod html;

pub use html::iframe_html;

use serde::Serialize;

use crate::config::EmbedConfig;
use crate::error::EmbedError;
use crate::params::{build_params, ParamSet};
use crate::video_id::{extract_video_id, VideoId};

/// Fallback text for a block without a URL.
pub const MISSING_URL_TEXT: &str = "No video URL provided";
/// Fallback text for a block whose URL has no recognizable video id.
pub const INVALID_URL_TEXT: &str = "Invalid YouTube URL";

/// `<base><id>` followed by `?<query>` when `params` is non-empty.
pub fn embed_url(base: &str, video_id: &VideoId, params: &ParamSet) -> String {
    let query = params.to_query_string();
    if query.is_empty() {
        format!("{base}{video_id}")
    } else {
        format!("{base}{video_id}?{query}")
    }
}

/// A resolved player: the id, its parameters, and the composed reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedPlayer {
    pub video_id: VideoId,
    pub params: ParamSet,
    pub embed_url: String,
}

/// What a block renders to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BlockOutcome {
    Embed(EmbedPlayer),
    /// The first row carried no URL.
    MissingUrl,
    /// A URL was given but no video id could be extracted from it.
    InvalidUrl,
}

impl BlockOutcome {
    /// User-visible fallback text, if this is not an embed.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            BlockOutcome::Embed(_) => None,
            BlockOutcome::MissingUrl => Some(MISSING_URL_TEXT),
            BlockOutcome::InvalidUrl => Some(INVALID_URL_TEXT),
        }
    }

    /// Iframe markup for an embed, or the fallback text otherwise.
    pub fn to_html(&self, config: &EmbedConfig) -> String {
        match self {
            BlockOutcome::Embed(player) => iframe_html(config, &player.embed_url),
            BlockOutcome::MissingUrl | BlockOutcome::InvalidUrl => {
                html::escape_html(self.message().unwrap_or_default())
            }
        }
    }
}

/// Renders a block of author rows.
///
/// The first non-blank cell of the first row is the video URL; every later
/// row is a parameter row for [`build_params`]. Only a malformed watch URL is
/// an error; missing and unrecognized URLs become fallback outcomes.
pub fn render_block<R, S>(rows: &[R], config: &EmbedConfig) -> Result<BlockOutcome, EmbedError>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let Some((url_row, param_rows)) = rows.split_first() else {
        return Ok(BlockOutcome::MissingUrl);
    };
    let cells: &[S] = url_row.as_ref();
    let url = cells
        .iter()
        .map(|cell| AsRef::<str>::as_ref(cell).trim())
        .find(|cell| !cell.is_empty());
    let Some(url) = url else {
        return Ok(BlockOutcome::MissingUrl);
    };

    let Some(video_id) = extract_video_id(url)? else {
        tracing::info!(url, "no video id in block URL");
        return Ok(BlockOutcome::InvalidUrl);
    };

    let params = build_params(param_rows, &video_id);
    let embed_url = embed_url(&config.embed_base, &video_id, &params);
    tracing::debug!(%video_id, params = params.len(), "rendered embed block");

    Ok(BlockOutcome::Embed(EmbedPlayer {
        video_id,
        params,
        embed_url,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamName;

    const BASE: &str = "https://www.youtube.com/embed/";

    #[test]
    fn embed_url_without_params() {
        let id = VideoId::new("abc123").unwrap();
        assert_eq!(
            embed_url(BASE, &id, &ParamSet::default()),
            "https://www.youtube.com/embed/abc123"
        );
    }

    #[test]
    fn embed_url_with_params_in_order() {
        let id = VideoId::new("abc123").unwrap();
        let params = build_params(&[["mute", "1"], ["autoplay", "1"], ["loop", "1"]], &id);
        assert_eq!(
            embed_url(BASE, &id, &params),
            "https://www.youtube.com/embed/abc123?mute=1&autoplay=1&loop=1&playlist=abc123"
        );
    }

    #[test]
    fn block_renders_embed() {
        let rows = vec![
            vec!["https://youtu.be/abc123?t=5"],
            vec!["Autoplay", "1"],
            vec!["rel", "0"],
        ];
        let outcome = render_block(&rows, &EmbedConfig::default()).unwrap();
        let BlockOutcome::Embed(player) = outcome else {
            panic!("expected embed");
        };
        assert_eq!(player.video_id.as_str(), "abc123");
        assert_eq!(player.params.get(ParamName::Rel), Some("0"));
        assert_eq!(
            player.embed_url,
            "https://www.youtube.com/embed/abc123?autoplay=1&rel=0"
        );
    }

    #[test]
    fn block_url_may_follow_blank_cells() {
        let rows = vec![vec!["  ", " https://www.youtube.com/embed/xyz "]];
        let outcome = render_block(&rows, &EmbedConfig::default()).unwrap();
        assert!(matches!(outcome, BlockOutcome::Embed(ref p) if p.video_id.as_str() == "xyz"));
    }

    #[test]
    fn block_without_url() {
        let empty: Vec<Vec<&str>> = vec![];
        let config = EmbedConfig::default();
        assert_eq!(render_block(&empty, &config).unwrap(), BlockOutcome::MissingUrl);
        let blank = vec![vec!["   "], vec!["autoplay", "1"]];
        assert_eq!(render_block(&blank, &config).unwrap(), BlockOutcome::MissingUrl);
        assert_eq!(
            BlockOutcome::MissingUrl.to_html(&config),
            "No video URL provided"
        );
    }

    #[test]
    fn block_with_unknown_url() {
        let rows = vec![vec!["https://example.com/foo"]];
        let outcome = render_block(&rows, &EmbedConfig::default()).unwrap();
        assert_eq!(outcome, BlockOutcome::InvalidUrl);
        assert_eq!(outcome.message(), Some("Invalid YouTube URL"));
    }

    #[test]
    fn block_with_malformed_watch_url_errors() {
        let rows = vec![vec!["www.youtube.com/watch?v=abc"]];
        assert!(render_block(&rows, &EmbedConfig::default()).is_err());
    }

    #[test]
    fn outcome_serializes_tagged() {
        let json = serde_json::to_string(&BlockOutcome::InvalidUrl).unwrap();
        assert_eq!(json, r#"{"outcome":"invalid_url"}"#);
    }
}
