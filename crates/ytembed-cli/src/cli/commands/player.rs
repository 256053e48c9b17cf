//! `ytembed url|html|params <url>` – build a player from a URL plus parameter rows.

use anyhow::{anyhow, Result};
use ytembed_core::config::EmbedConfig;
use ytembed_core::rows::{self, Row};
use ytembed_core::{build_params, embed_url, extract_video_id, iframe_html, EmbedPlayer};

use crate::cli::ParamArgs;

/// Rows from `--rows` first, then one row per `--param`, so flags win on conflict.
fn collect_rows(args: &ParamArgs) -> Result<Vec<Row>> {
    let mut collected = match &args.rows {
        Some(path) => rows::load_rows(path)?,
        None => Vec::new(),
    };
    collected.extend(args.params.iter().map(|p| rows::row_from_assignment(p)));
    Ok(collected)
}

fn resolve_player(config: &EmbedConfig, url: &str, args: &ParamArgs) -> Result<EmbedPlayer> {
    let video_id =
        extract_video_id(url)?.ok_or_else(|| anyhow!("no video id found in {url:?}"))?;
    let params = build_params(&collect_rows(args)?, &video_id);
    let embed_url = embed_url(&config.embed_base, &video_id, &params);
    Ok(EmbedPlayer {
        video_id,
        params,
        embed_url,
    })
}

pub fn run_url(config: &EmbedConfig, url: &str, args: &ParamArgs) -> Result<()> {
    let player = resolve_player(config, url, args)?;
    println!("{}", player.embed_url);
    Ok(())
}

pub fn run_html(config: &EmbedConfig, url: &str, args: &ParamArgs) -> Result<()> {
    let player = resolve_player(config, url, args)?;
    print!("{}", iframe_html(config, &player.embed_url));
    Ok(())
}

pub fn run_params(config: &EmbedConfig, url: &str, args: &ParamArgs) -> Result<()> {
    let player = resolve_player(config, url, args)?;
    println!("{}", serde_json::to_string_pretty(&player.params)?);
    Ok(())
}
