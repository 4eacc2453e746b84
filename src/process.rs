//! Process identity: scheduling priority and OS-level process name.

use crate::config::AppConfig;
use anyhow::{Context, Result};
use tokio::runtime::Runtime;

#[cfg(unix)]
const NICENESS: libc::c_int = 19;

pub fn apply_identity(config: &AppConfig) {
    if config.lower_priority {
        if let Err(e) = lower_priority() {
            log::warn!("Could not lower process priority: {}", e);
        }
    }
    if let Err(e) = set_process_name(&config.app_name) {
        log::warn!("Could not set process name: {}", e);
    }
}

/// Applies the identity, then starts the runtime so its worker threads
/// inherit the lowered priority.
pub fn build_runtime(config: &AppConfig) -> Result<Runtime> {
    apply_identity(config);
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")
}

/// Applies to the calling thread on Linux and to threads it spawns afterwards.
#[cfg(unix)]
pub fn lower_priority() -> Result<()> {
    let rc = unsafe { libc::setpriority(libc::PRIO_PROCESS, 0, NICENESS) };
    if rc != 0 {
        return Err(std::io::Error::last_os_error().into());
    }
    log::debug!("Process priority lowered to nice {}", NICENESS);
    Ok(())
}

#[cfg(not(unix))]
pub fn lower_priority() -> Result<()> {
    log::debug!("Lowering process priority is not supported on this platform");
    Ok(())
}

#[cfg(target_os = "linux")]
pub fn set_process_name(name: &str) -> Result<()> {
    let c_name = std::ffi::CString::new(name)?;
    let rc = unsafe { libc::prctl(libc::PR_SET_NAME, c_name.as_ptr() as libc::c_ulong, 0, 0, 0) };
    if rc != 0 {
        return Err(std::io::Error::last_os_error().into());
    }
    Ok(())
}

#[cfg(not(target_os = "linux"))]
pub fn set_process_name(_name: &str) -> Result<()> {
    log::debug!("Renaming the process is not supported on this platform");
    Ok(())
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn current_nice() -> libc::c_int {
        unsafe { libc::getpriority(libc::PRIO_PROCESS, 0) }
    }

    #[test]
    fn runtime_workers_inherit_lowered_priority() {
        // Arrange
        let config = AppConfig::with_defaults(PathBuf::from("/nonexistent"), None);

        // Act
        let worker_nice = std::thread::spawn(move || {
            let runtime = build_runtime(&config).unwrap();
            runtime.block_on(async { tokio::spawn(async { current_nice() }).await.unwrap() })
        })
        .join()
        .unwrap();

        // Assert
        assert_eq!(worker_nice, NICENESS);
    }

    #[test]
    fn set_process_name_rejects_interior_nul() {
        assert!(set_process_name("bad\0name").is_err());
    }

    #[test]
    fn set_process_name_renames_current_thread() {
        set_process_name("emoticon-test").unwrap();

        let comm = std::fs::read_to_string("/proc/thread-self/comm").unwrap();
        assert_eq!(comm.trim(), "emoticon-test");
    }
}
