use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:4221";

/// Command-line flags. Long options take either `--flag value` or `--flag=value`.
#[derive(Debug, Default, Parser)]
#[command(name = "plainhttp", about = "Minimal HTTP/1.1 server")]
pub struct Cli {
    /// Root directory for /files/... requests
    #[arg(long)]
    pub directory: Option<PathBuf>,

    /// Address to listen on (overrides LISTEN and the config file)
    #[arg(long)]
    pub listen: Option<String>,

    /// YAML file with `listen_addr` and `directory`
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub directory: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            directory: None,
        }
    }
}

/// Keys accepted in the YAML config file; absent keys leave the base untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub listen_addr: Option<String>,
    pub directory: Option<PathBuf>,
}

impl FileConfig {
    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(text).context("invalid YAML config")
    }
}

impl Config {
    /// Defaults, with the listen address taken from `LISTEN` when set.
    pub fn load() -> Self {
        let mut cfg = Self::default();
        if let Ok(listen_addr) = std::env::var("LISTEN") {
            cfg.listen_addr = listen_addr;
        }
        cfg
    }

    /// `LISTEN`, then the optional config file, then the flags, in
    /// increasing precedence.
    pub fn resolve(cli: Cli) -> anyhow::Result<Self> {
        Self::load().layer(cli)
    }

    /// Applies the config file named by `cli` and then the flags on top of `self`.
    pub fn layer(mut self, cli: Cli) -> anyhow::Result<Self> {
        if let Some(path) = &cli.config {
            self.merge_file(path)?;
        }
        if let Some(listen) = cli.listen {
            self.listen_addr = listen;
        }
        if let Some(directory) = cli.directory {
            self.directory = Some(directory);
        }

        Ok(self)
    }

    fn merge_file(&mut self, path: &Path) -> anyhow::Result<()> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let file = FileConfig::from_yaml(&text)
            .with_context(|| format!("in config file {}", path.display()))?;

        if let Some(listen_addr) = file.listen_addr {
            self.listen_addr = listen_addr;
        }
        if file.directory.is_some() {
            self.directory = file.directory;
        }
        Ok(())
    }
}
