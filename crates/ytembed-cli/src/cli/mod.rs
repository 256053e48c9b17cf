//! CLI for ytembed.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};
use ytembed_core::config::{self, EmbedConfig};

use commands::{run_block, run_completions, run_html, run_id, run_params, run_url};

/// Top-level CLI for ytembed.
#[derive(Debug, Parser)]
#[command(name = "ytembed")]
#[command(about = "ytembed: YouTube embed references from video URLs", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/ytembed/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Embed parameter sources shared by the commands that build a player.
#[derive(Debug, Clone, Default, Args)]
pub struct ParamArgs {
    /// Embed parameter as NAME=VALUE (repeatable; unknown names are ignored).
    #[arg(short = 'p', long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,

    /// File of parameter rows (JSON or TSV), applied before any --param.
    #[arg(long, value_name = "FILE")]
    pub rows: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the video id found in a YouTube URL.
    Id {
        /// watch, youtu.be or embed URL.
        url: String,
    },

    /// Print the embed reference for a YouTube URL.
    Url {
        /// watch, youtu.be or embed URL.
        url: String,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// Print iframe markup for a YouTube URL.
    Html {
        /// watch, youtu.be or embed URL.
        url: String,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// Print the validated embed parameters as JSON.
    Params {
        /// watch, youtu.be or embed URL.
        url: String,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// Render a whole block from a rows file: URL row first, then parameter rows.
    Block {
        /// Path to the rows file (JSON or TSV).
        path: PathBuf,

        /// Print the outcome as JSON instead of markup.
        #[arg(long)]
        json: bool,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

/// Explicit `--config` file if given, otherwise the XDG config (created on first use).
fn load_config(path: Option<&Path>) -> Result<EmbedConfig> {
    let cfg = match path {
        Some(p) => config::load_from_path(p)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let config_path = cli.config.as_deref();

        match cli.command {
            CliCommand::Id { url } => run_id(&url)?,
            CliCommand::Url { url, params } => run_url(&load_config(config_path)?, &url, &params)?,
            CliCommand::Html { url, params } => {
                run_html(&load_config(config_path)?, &url, &params)?
            }
            CliCommand::Params { url, params } => {
                run_params(&load_config(config_path)?, &url, &params)?
            }
            CliCommand::Block { path, json } => {
                run_block(&load_config(config_path)?, &path, json)?
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}
