use crate::config::AppConfig;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

pub const ENTRY_FILE_NAME: &str = "unicodemoticon.desktop";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutostartOutcome {
    Installed(PathBuf),
    AlreadyPresent(PathBuf),
    NoAutostartDir,
}

pub fn desktop_entry(config: &AppConfig) -> String {
    format!(
        "[Desktop Entry]\n\
         Comment=Trayicon with Unicode Emoticons.\n\
         Exec={app}\n\
         GenericName=Trayicon with Unicode Emoticons.\n\
         Icon=system-run\n\
         Name={name}\n\
         StartupNotify=false\n\
         Terminal=false\n\
         Type=Application\n\
         X-DBUS-ServiceName={app}\n\
         X-DBUS-StartupType=none\n\
         X-KDE-StartupNotify=false\n\
         X-KDE-SubstituteUID=false\n",
        app = config.app_name,
        name = config.display_name,
    )
}

/// Writes the autostart entry into `dir` unless one is already there.
/// A missing `dir` means the desktop has no autostart support.
pub fn install(dir: &Path, entry: &str) -> Result<AutostartOutcome> {
    if !dir.is_dir() {
        log::debug!("No autostart directory at {:?}", dir);
        return Ok(AutostartOutcome::NoAutostartDir);
    }

    let path = dir.join(ENTRY_FILE_NAME);
    let file = OpenOptions::new().write(true).create_new(true).open(&path);
    let mut file = match file {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Ok(AutostartOutcome::AlreadyPresent(path));
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to create {:?}", path));
        }
    };

    log::info!("Writing autostart file: {:?}", path);
    file.write_all(entry.as_bytes())
        .with_context(|| format!("Failed to write {:?}", path))?;
    Ok(AutostartOutcome::Installed(path))
}
