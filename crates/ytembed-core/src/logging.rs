//! Logging init: append to a file under the XDG state dir, or log to stderr.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,ytembed=debug,ytembed_core=debug";
const LOG_FILE_NAME: &str = "ytembed.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Opens `dir/ytembed.log` for appending, creating `dir` first.
fn open_log_file(dir: &Path) -> Result<(File, PathBuf)> {
    fs::create_dir_all(dir).with_context(|| format!("create log dir: {}", dir.display()))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file: {}", path.display()))?;
    Ok((file, path))
}

/// Initialize structured logging to `~/.local/state/ytembed/ytembed.log`.
///
/// Returns Err when the state dir is unusable or a subscriber is already set;
/// the caller then falls back to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ytembed")?;
    let (file, path) = open_log_file(&xdg_dirs.get_state_home().join("ytembed"))?;

    // Every event writes through `&File`, so one shared handle is enough.
    let writer = BoxMakeWriter::new(Arc::new(file));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;

    tracing::info!(path = %path.display(), "ytembed logging initialized");
    Ok(())
}

/// Initialize logging to stderr only. A no-op if a subscriber is already set.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn open_log_file_creates_dir_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("state").join("ytembed");

        let (mut file, path) = open_log_file(&log_dir).unwrap();
        assert_eq!(path, log_dir.join("ytembed.log"));
        file.write_all(b"first\n").unwrap();
        drop(file);

        let (mut file, _) = open_log_file(&log_dir).unwrap();
        file.write_all(b"second\n").unwrap();
        drop(file);

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn open_log_file_fails_when_dir_is_a_file() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let err = open_log_file(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("create log dir"));
    }
}
