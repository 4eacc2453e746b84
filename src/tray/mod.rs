pub mod icon;
pub mod platform;
#[cfg(target_os = "linux")]
pub mod progress;

use crate::config::AppConfig;
use anyhow::Result;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::broadcast;

pub struct TrayManager {
    _tray: platform::PlatformTray,
}

impl TrayManager {
    pub fn new(config: Arc<AppConfig>, runtime: Handle, shutdown_tx: broadcast::Sender<()>) -> Result<Self> {
        let icon = icon::create_icon()?;
        let tray = platform::create_tray(config, runtime, shutdown_tx, icon)?;
        Ok(Self { _tray: tray })
    }
}
