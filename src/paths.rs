use anyhow::{Context, Result};
use std::path::PathBuf;

pub const APP_NAME: &str = "unicodemoticon";

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .context("Could not determine config directory")
        .map(|p| p.join(APP_NAME))
}

pub fn config_path() -> Result<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

pub fn autostart_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .context("Could not determine config directory")
        .map(|p| p.join("autostart"))
}

pub fn open_url(url: &str) -> Result<()> {
    open::that(url).with_context(|| format!("Failed to open {}", url))?;
    Ok(())
}
