//! Self-update: download the latest build and replace the running program file.
//!
//! The transfer itself runs elsewhere (see [`download`]); everything here is
//! driven by [`UpdateEvent`]s delivered on the UI thread, so the whole state
//! machine can be exercised without a network or a display.

pub mod download;
pub mod progress;

use chrono::{DateTime, Local};
use progress::{ProgressReport, TransferRate};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tokio::sync::mpsc;

pub type SessionId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateEvent {
    Progress { session: SessionId, received: u64, total: u64 },
    Finished { session: SessionId, result: Result<Vec<u8>, String> },
}

impl UpdateEvent {
    pub fn session(&self) -> SessionId {
        match self {
            UpdateEvent::Progress { session, .. } | UpdateEvent::Finished { session, .. } => *session,
        }
    }
}

pub type UpdateSender = mpsc::UnboundedSender<UpdateEvent>;
pub type UpdateReceiver = mpsc::UnboundedReceiver<UpdateEvent>;

pub fn channel() -> (UpdateSender, UpdateReceiver) {
    mpsc::unbounded_channel()
}

/// Starts a transfer that reports through `events`.
pub trait Transport {
    fn fetch(&self, session: SessionId, url: &str, events: UpdateSender) -> DownloadHandle;
}

/// Handle to an in-flight transfer.
pub struct DownloadHandle {
    abort: Option<tokio::task::AbortHandle>,
}

impl DownloadHandle {
    pub fn new(abort: tokio::task::AbortHandle) -> Self {
        Self { abort: Some(abort) }
    }

    /// A handle with nothing to abort.
    pub fn detached() -> Self {
        Self { abort: None }
    }

    pub fn abort(self) {
        if let Some(abort) = self.abort {
            abort.abort();
        }
    }
}

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Destination file not found: {}", .0.display())]
    DestinationMissing(PathBuf),
    #[error(
        "Destination file permission denied (not writable): {}. \
         Try again to update as root or administrator.",
        .0.display()
    )]
    DestinationNotWritable(PathBuf),
    #[error("An update is already in progress")]
    AlreadyRunning,
    #[error("{0}")]
    Transport(String),
    #[error("The downloaded file is empty, keeping the current version")]
    EmptyBody,
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateState {
    Idle,
    PreflightChecked,
    Downloading,
    Completed,
    Failed,
}

#[derive(Debug, Clone)]
pub struct DownloadSession {
    pub id: SessionId,
    pub url: String,
    pub destination: PathBuf,
    pub started_at: DateTime<Local>,
    started: Instant,
    pub received: u64,
    pub total: u64,
    pub rate_kb_per_sec: f64,
}

impl DownloadSession {
    fn new(id: SessionId, url: &str, destination: &Path) -> Self {
        Self {
            id,
            url: url.to_string(),
            destination: destination.to_path_buf(),
            started_at: Local::now(),
            started: Instant::now(),
            received: 0,
            total: 0,
            rate_kb_per_sec: 0.0,
        }
    }

    fn record(&mut self, received: u64, total: u64, now: Instant, wall: DateTime<Local>) -> ProgressReport {
        self.received = received;
        self.total = total;

        let elapsed = now.saturating_duration_since(self.started);
        self.rate_kb_per_sec = progress::rate_kb_per_sec(received, elapsed);

        ProgressReport {
            url: self.url.to_lowercase(),
            destination: self.destination.display().to_string(),
            started: self.started_at,
            now: wall,
            elapsed_secs: elapsed.as_secs(),
            remaining_secs: progress::remaining_secs(received, total, self.rate_kb_per_sec),
            received_mb: progress::megabytes(received),
            total_mb: progress::megabytes(total),
            rate: TransferRate::from_kb_per_sec(self.rate_kb_per_sec),
            percent: progress::percent(received, total),
        }
    }
}

pub struct SelfUpdater {
    source_url: String,
    destination: PathBuf,
    state: UpdateState,
    session: Option<DownloadSession>,
    handle: Option<DownloadHandle>,
    next_session: SessionId,
}

impl SelfUpdater {
    pub fn new(source_url: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source_url: source_url.into(),
            destination: destination.into(),
            state: UpdateState::Idle,
            session: None,
            handle: None,
            next_session: 1,
        }
    }

    pub fn state(&self) -> UpdateState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == UpdateState::Downloading
    }

    pub fn session(&self) -> Option<&DownloadSession> {
        self.session.as_ref()
    }

    pub fn preflight(&mut self) -> Result<(), UpdateError> {
        if let Err(e) = check_destination(&self.destination) {
            log::error!("Update preflight failed: {}", e);
            self.state = UpdateState::Failed;
            return Err(e);
        }

        if !is_secure_url(&self.source_url) {
            log::warn!("Insecure download over plain text without TLS: {}", self.source_url);
        }

        self.state = UpdateState::PreflightChecked;
        Ok(())
    }

    pub fn start(&mut self, transport: &dyn Transport, events: UpdateSender) -> Result<SessionId, UpdateError> {
        if self.is_running() {
            return Err(UpdateError::AlreadyRunning);
        }
        self.preflight()?;

        let id = self.next_session;
        self.next_session += 1;

        log::info!("Downloading update from {} to {:?}", self.source_url, self.destination);
        self.session = Some(DownloadSession::new(id, &self.source_url, &self.destination));
        self.handle = Some(transport.fetch(id, &self.source_url, events));
        self.state = UpdateState::Downloading;
        Ok(id)
    }

    pub fn on_progress(&mut self, session: SessionId, received: u64, total: u64) -> Option<ProgressReport> {
        self.on_progress_at(session, received, total, Instant::now(), Local::now())
    }

    pub fn on_progress_at(
        &mut self,
        session: SessionId,
        received: u64,
        total: u64,
        now: Instant,
        wall: DateTime<Local>,
    ) -> Option<ProgressReport> {
        let current = self.active_session(session)?;
        Some(current.record(received, total, now, wall))
    }

    /// Returns `None` for events of a session that is no longer active.
    pub fn on_finished(&mut self, session: SessionId, result: Result<Vec<u8>, String>) -> Option<Result<(), UpdateError>> {
        self.active_session(session)?;
        self.session = None;
        self.handle = None;

        let outcome = match result {
            Ok(body) if body.is_empty() => Err(UpdateError::EmptyBody),
            Ok(body) => replace_file(&self.destination, &body).map_err(|source| UpdateError::Write {
                path: self.destination.clone(),
                source,
            }),
            Err(message) => Err(UpdateError::Transport(message)),
        };

        match &outcome {
            Ok(()) => {
                log::info!("Update written to {:?}", self.destination);
                self.state = UpdateState::Completed;
            }
            Err(e) => {
                log::error!("Update failed: {}", e);
                self.state = UpdateState::Failed;
            }
        }
        Some(outcome)
    }

    pub fn on_event(&mut self, event: UpdateEvent) -> Option<UpdateOutcome> {
        match event {
            UpdateEvent::Progress { session, received, total } => {
                self.on_progress(session, received, total).map(UpdateOutcome::Progress)
            }
            UpdateEvent::Finished { session, result } => {
                self.on_finished(session, result).map(UpdateOutcome::Finished)
            }
        }
    }

    /// Aborts the running transfer and drops everything received so far.
    pub fn cancel(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        self.session = None;
        self.state = UpdateState::Idle;
        log::info!("Update cancelled");
        true
    }

    fn active_session(&mut self, session: SessionId) -> Option<&mut DownloadSession> {
        if !self.is_running() {
            log::debug!("Ignoring event for inactive update session {}", session);
            return None;
        }
        match self.session.as_mut() {
            Some(current) if current.id == session => Some(current),
            _ => {
                log::debug!("Ignoring event for stale update session {}", session);
                None
            }
        }
    }
}

#[derive(Debug)]
pub enum UpdateOutcome {
    Progress(ProgressReport),
    Finished(Result<(), UpdateError>),
}

pub fn is_secure_url(url: &str) -> bool {
    url.to_lowercase().starts_with("https:")
}

fn check_destination(path: &Path) -> Result<(), UpdateError> {
    let metadata = fs::metadata(path).map_err(|_| UpdateError::DestinationMissing(path.to_path_buf()))?;
    if !metadata.is_file() {
        return Err(UpdateError::DestinationMissing(path.to_path_buf()));
    }

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if metadata.permissions().readonly() || !is_dir_writable(dir) {
        return Err(UpdateError::DestinationNotWritable(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(unix)]
fn is_dir_writable(dir: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(dir.as_os_str().as_bytes()) else {
        return false;
    };
    unsafe { libc::access(c_path.as_ptr(), libc::W_OK) == 0 }
}

#[cfg(not(unix))]
fn is_dir_writable(dir: &Path) -> bool {
    fs::metadata(dir)
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".update");
    path.with_file_name(name)
}

/// Replaces `path` with `body` through a sibling file and a rename, so a
/// running executable is swapped instead of truncated.
fn replace_file(path: &Path, body: &[u8]) -> io::Result<()> {
    let staging = staging_path(path);
    let result = (|| {
        fs::write(&staging, body)?;
        if let Ok(metadata) = fs::metadata(path) {
            fs::set_permissions(&staging, metadata.permissions())?;
        }
        fs::rename(&staging, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&staging);
    }
    result
}
