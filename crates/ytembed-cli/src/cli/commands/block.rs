//! `ytembed block <path>` – render a whole block from a rows file.

use anyhow::Result;
use std::path::Path;
use ytembed_core::config::EmbedConfig;
use ytembed_core::{render_block, rows};

pub fn run_block(config: &EmbedConfig, path: &Path, json: bool) -> Result<()> {
    let rows = rows::load_rows(path)?;
    let outcome = render_block(&rows, config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        let html = outcome.to_html(config);
        if html.ends_with('\n') {
            print!("{html}");
        } else {
            println!("{html}");
        }
    }
    Ok(())
}
