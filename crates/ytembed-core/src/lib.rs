pub mod config;
pub mod logging;

pub mod embed;
pub mod error;
pub mod params;
pub mod rows;
pub mod video_id;

pub use embed::{embed_url, iframe_html, render_block, BlockOutcome, EmbedPlayer};
pub use error::EmbedError;
pub use params::{build_params, ParamName, ParamSet};
pub use video_id::{extract_video_id, UrlShape, VideoId};
