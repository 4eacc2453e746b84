use crate::paths;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DISPLAY_NAME: &str = "UnicodEmoticon";
pub const PROJECT_URL: &str = "https://github.com/juancarlospaco/unicodemoticon";
pub const DEFAULT_SOURCE_URL: &str =
    "https://github.com/juancarlospaco/unicodemoticon/releases/latest/download/unicodemoticon";

/// Optional overrides read from `config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    source_url: Option<String>,
    pad_glyphs: Option<bool>,
    install_autostart: Option<bool>,
    lower_priority: Option<bool>,
}

/// Settings fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub app_name: String,
    pub display_name: String,
    pub version: String,
    pub project_url: String,
    pub source_url: String,
    /// File replaced by the self-updater.
    pub destination: PathBuf,
    pub autostart_dir: Option<PathBuf>,
    pub pad_glyphs: bool,
    pub install_autostart: bool,
    pub lower_priority: bool,
}

impl AppConfig {
    pub fn with_defaults(destination: PathBuf, autostart_dir: Option<PathBuf>) -> Self {
        Self {
            app_name: paths::APP_NAME.to_string(),
            display_name: DISPLAY_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            project_url: PROJECT_URL.to_string(),
            source_url: DEFAULT_SOURCE_URL.to_string(),
            destination,
            autostart_dir,
            pad_glyphs: false,
            install_autostart: true,
            lower_priority: true,
        }
    }

    pub fn load() -> Result<Self> {
        let destination = std::env::current_exe().context("Could not locate the running executable")?;
        let autostart_dir = match paths::autostart_dir() {
            Ok(dir) => Some(dir),
            Err(e) => {
                log::debug!("No autostart directory: {}", e);
                None
            }
        };
        let config_path = paths::config_path()?;
        Self::from_file(&config_path, destination, autostart_dir)
    }

    pub fn from_file(path: &Path, destination: PathBuf, autostart_dir: Option<PathBuf>) -> Result<Self> {
        let config = Self::with_defaults(destination, autostart_dir);
        if !path.exists() {
            return Ok(config);
        }

        log::info!("Loading config from {:?}", path);
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {:?}", path))?;
        let file: FileConfig = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {:?}", path))?;
        Ok(config.apply(file))
    }

    fn apply(mut self, file: FileConfig) -> Self {
        if let Some(url) = file.source_url {
            self.source_url = url;
        }
        if let Some(pad) = file.pad_glyphs {
            self.pad_glyphs = pad;
        }
        if let Some(install) = file.install_autostart {
            self.install_autostart = install;
        }
        if let Some(lower) = file.lower_priority {
            self.lower_priority = lower;
        }
        self
    }

    pub fn issues_url(&self) -> String {
        format!("{}/issues?state=open", self.project_url)
    }

    pub fn tooltip(&self) -> String {
        format!("{}\nPick 1 Emoticon, use CTRL+V to Paste it!", self.display_name)
    }
}
