//! CLI command handlers, one file per command.

mod block;
mod completions;
mod id;
mod player;

pub use block::run_block;
pub use completions::run_completions;
pub use id::run_id;
pub use player::{run_html, run_params, run_url};
