use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Embed rendering settings loaded from `~/.config/ytembed/config.toml`.
///
/// Every field is optional in the file; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    /// Prefix the video id is appended to.
    pub embed_base: String,
    /// Iframe `title` attribute.
    pub iframe_title: String,
    /// Iframe `allow` attribute (permissions policy).
    pub allow: String,
    /// Iframe `referrerpolicy` attribute.
    pub referrer_policy: String,
    /// Class of the div wrapping the iframe.
    pub wrapper_class: String,
    /// Iframe `frameborder` attribute.
    pub frameborder: u32,
    /// Emit the `allowfullscreen` attribute.
    pub allow_fullscreen: bool,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            embed_base: "https://www.youtube.com/embed/".to_string(),
            iframe_title: "YouTube video player".to_string(),
            allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share".to_string(),
            referrer_policy: "strict-origin-when-cross-origin".to_string(),
            wrapper_class: "youtube-wrapper".to_string(),
            frameborder: 0,
            allow_fullscreen: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ytembed")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<EmbedConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = EmbedConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file. The file must exist.
pub fn load_from_path(path: &Path) -> Result<EmbedConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: EmbedConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = EmbedConfig::default();
        assert_eq!(cfg.embed_base, "https://www.youtube.com/embed/");
        assert_eq!(cfg.wrapper_class, "youtube-wrapper");
        assert_eq!(cfg.frameborder, 0);
        assert!(cfg.allow_fullscreen);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = EmbedConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: EmbedConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let toml = r#"
            embed_base = "https://www.youtube-nocookie.com/embed/"
            allow_fullscreen = false
        "#;
        let cfg: EmbedConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.embed_base, "https://www.youtube-nocookie.com/embed/");
        assert!(!cfg.allow_fullscreen);
        assert_eq!(cfg.iframe_title, "YouTube video player");
        assert_eq!(cfg.referrer_policy, "strict-origin-when-cross-origin");
    }

    #[test]
    fn load_from_path_reads_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"wrapper_class = \"video\"\nframeborder = 1\n").unwrap();
        f.flush().unwrap();
        let cfg = load_from_path(f.path()).unwrap();
        assert_eq!(cfg.wrapper_class, "video");
        assert_eq!(cfg.frameborder, 1);
    }

    #[test]
    fn load_from_path_missing_file_errs() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_path(&dir.path().join("nope.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("read config"));
    }

    #[test]
    fn load_from_path_invalid_toml_errs() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"frameborder = \"wide\"\n").unwrap();
        f.flush().unwrap();
        let err = load_from_path(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parse config"));
    }
}
