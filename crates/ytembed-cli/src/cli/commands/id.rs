//! `ytembed id <url>` – print the extracted video id.

use anyhow::{bail, Result};
use ytembed_core::extract_video_id;

pub fn run_id(url: &str) -> Result<()> {
    match extract_video_id(url)? {
        Some(id) => println!("{id}"),
        None => bail!("no video id found in {url:?}"),
    }
    Ok(())
}
