#[cfg(target_os = "linux")]
mod linux;

use crate::config::AppConfig;
use crate::controller::TriggerKind;
use anyhow::Result;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::broadcast;
use tray_icon::{Icon, MouseButton, MouseButtonState, TrayIconEvent};

pub enum PlatformTray {
    #[cfg(target_os = "linux")]
    Linux,
}

#[cfg(target_os = "linux")]
pub fn create_tray(
    config: Arc<AppConfig>,
    runtime: Handle,
    shutdown_tx: broadcast::Sender<()>,
    icon: Icon,
) -> Result<PlatformTray> {
    linux::create_tray(config, runtime, shutdown_tx, icon)?;
    Ok(PlatformTray::Linux)
}

#[cfg(not(target_os = "linux"))]
pub fn create_tray(
    _config: Arc<AppConfig>,
    _runtime: Handle,
    _shutdown_tx: broadcast::Sender<()>,
    _icon: Icon,
) -> Result<PlatformTray> {
    anyhow::bail!("The tray is only supported on Linux desktops")
}

pub fn trigger_kind(event: &TrayIconEvent) -> Option<TriggerKind> {
    match event {
        TrayIconEvent::Click { button, button_state, .. } => click_kind(*button, *button_state),
        TrayIconEvent::DoubleClick { .. } => Some(TriggerKind::DoubleClick),
        _ => None,
    }
}

/// Activations count on release.
fn click_kind(button: MouseButton, state: MouseButtonState) -> Option<TriggerKind> {
    if !matches!(state, MouseButtonState::Up) {
        return None;
    }
    match button {
        MouseButton::Left => Some(TriggerKind::Primary),
        MouseButton::Right => Some(TriggerKind::Secondary),
        MouseButton::Middle => Some(TriggerKind::Middle),
    }
}
