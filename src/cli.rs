use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config;
use crate::console::Console;
use crate::downloader::Downloader;
use crate::flow::{self, Flow};

/// Download images into a local folder.
#[derive(Debug, Parser)]
#[command(name = "image-fetcher", version)]
#[command(about = "Download images into a local folder", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/image-fetcher/config.toml, if present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory to save images into (default: Fetched_Images).
    #[arg(short, long, global = true, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch one image (the default). Prompts for the URL if not given.
    Fetch { url: Option<String> },

    /// Fetch several images. Each argument may hold comma-separated URLs;
    /// with no arguments, URLs are read until an empty line.
    Batch { urls: Vec<String> },

    /// Check scheme, content type and size before downloading.
    Safe { url: Option<String> },

    /// Skip the download if an identical file is already saved.
    Dedup { url: Option<String> },

    /// Show response headers and ask before downloading.
    Inspect { url: Option<String> },
}

impl Command {
    fn into_flow(self) -> (Flow, Vec<String>) {
        match self {
            Command::Fetch { url } => (Flow::Basic, url.into_iter().collect()),
            Command::Batch { urls } => (Flow::Batch, urls),
            Command::Safe { url } => (Flow::Safe, url.into_iter().collect()),
            Command::Dedup { url } => (Flow::Dedup, url.into_iter().collect()),
            Command::Inspect { url } => (Flow::Inspect, url.into_iter().collect()),
        }
    }
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let mut cfg = config::load(self.config.as_deref())?;
        if let Some(output_dir) = self.output_dir {
            cfg.output_dir = output_dir;
        }
        tracing::debug!(?cfg, "effective config");

        let (flow, urls) = self
            .command
            .unwrap_or(Command::Fetch { url: None })
            .into_flow();

        let downloader = Downloader::new(&cfg);
        let mut console = Console::stdio();

        flow::run(flow, &downloader, &mut console, urls, &cfg)?;

        Ok(())
    }
}
