use crate::autostart::{self, AutostartOutcome};
use crate::clipboard::ClipboardSink;
use crate::config::AppConfig;
use crate::dialogs::Notifier;
use crate::menu::{EventRouter, LeafAction};
use crate::paths;
use crate::updates::progress::ProgressReport;
use crate::updates::{SelfUpdater, Transport, UpdateEvent, UpdateOutcome, UpdateSender};
use std::sync::Arc;

const UPDATE_DONE_MESSAGE: &str = "You got the latest version of this App!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    Primary,
    Secondary,
    Middle,
    DoubleClick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Where the update flow shows its state.
pub trait UpdateView {
    fn set_running(&mut self, running: bool);
    fn show_progress(&mut self, report: &ProgressReport);

    /// True once after the user dismissed the progress display.
    fn take_cancel_request(&mut self) -> bool {
        false
    }
}

pub struct Collaborators {
    pub clipboard: Box<dyn ClipboardSink>,
    pub notifier: Box<dyn Notifier>,
    pub transport: Box<dyn Transport>,
    pub view: Box<dyn UpdateView>,
}

/// Reacts to tray and menu events. Lives on the UI thread.
pub struct TrayMenuController {
    config: Arc<AppConfig>,
    router: EventRouter,
    clipboard: Box<dyn ClipboardSink>,
    notifier: Box<dyn Notifier>,
    transport: Box<dyn Transport>,
    view: Box<dyn UpdateView>,
    updater: SelfUpdater,
    events: UpdateSender,
}

impl TrayMenuController {
    pub fn new(config: Arc<AppConfig>, router: EventRouter, parts: Collaborators, events: UpdateSender) -> Self {
        let updater = SelfUpdater::new(config.source_url.clone(), config.destination.clone());
        Self {
            config,
            router,
            clipboard: parts.clipboard,
            notifier: parts.notifier,
            transport: parts.transport,
            view: parts.view,
            updater,
            events,
        }
    }

    pub fn updater(&self) -> &SelfUpdater {
        &self.updater
    }

    pub fn handle_menu_event(&mut self, event_id: &str) -> Flow {
        log::debug!("Menu event: {}", event_id);
        match self.router.route(event_id).cloned() {
            Some(action) => self.dispatch(action),
            None => Flow::Continue,
        }
    }

    pub fn dispatch(&mut self, action: LeafAction) -> Flow {
        match action {
            LeafAction::Copy(glyph) => self.on_leaf_selected(&glyph),
            LeafAction::OpenUrl(url) => {
                if let Err(e) = paths::open_url(&url) {
                    log::error!("{:#}", e);
                }
            }
            LeafAction::CheckForUpdates => self.check_for_updates(),
            LeafAction::CancelUpdate => self.cancel_update(),
            LeafAction::Quit => return self.quit(),
        }
        Flow::Continue
    }

    pub fn on_leaf_selected(&mut self, glyph: &str) {
        let text = if self.config.pad_glyphs {
            format!(" {} ", glyph)
        } else {
            glyph.to_string()
        };

        match self.clipboard.set_text(&text) {
            Ok(()) => log::debug!("Copied {:?} to clipboard", text),
            Err(e) => log::warn!("{:#}", e),
        }
    }

    /// Whether the activation should open the menu.
    pub fn on_trigger(&self, kind: TriggerKind) -> bool {
        let opens = kind == TriggerKind::Primary;
        log::debug!("Tray activated: {:?} (opens menu: {})", kind, opens);
        opens
    }

    pub fn install_autostart(&self) -> Option<AutostartOutcome> {
        if !self.config.install_autostart {
            return None;
        }
        let dir = self.config.autostart_dir.as_ref()?;
        let entry = autostart::desktop_entry(&self.config);

        match autostart::install(dir, &entry) {
            Ok(outcome) => {
                log::debug!("Autostart: {:?}", outcome);
                Some(outcome)
            }
            Err(e) => {
                log::warn!("Could not install autostart entry: {:#}", e);
                None
            }
        }
    }

    pub fn check_for_updates(&mut self) {
        match self.updater.start(self.transport.as_ref(), self.events.clone()) {
            Ok(session) => {
                log::info!("Update session {} started", session);
                self.view.set_running(true);
            }
            Err(e) => self.notifier.warning(&e.to_string()),
        }
    }

    pub fn cancel_update(&mut self) {
        if self.updater.cancel() {
            self.view.set_running(false);
        }
    }

    /// Closing the progress display cancels the running update.
    pub fn poll_view(&mut self) {
        if self.view.take_cancel_request() {
            log::debug!("Progress display closed");
            self.cancel_update();
        }
    }

    pub fn on_update_event(&mut self, event: UpdateEvent) {
        match self.updater.on_event(event) {
            Some(UpdateOutcome::Progress(report)) => self.view.show_progress(&report),
            Some(UpdateOutcome::Finished(result)) => {
                self.view.set_running(false);
                match result {
                    Ok(()) => self.notifier.info(UPDATE_DONE_MESSAGE),
                    Err(e) => self.notifier.warning(&e.to_string()),
                }
            }
            None => {}
        }
    }

    pub fn quit(&mut self) -> Flow {
        log::info!("Quit requested");
        self.updater.cancel();
        Flow::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Category;
    use crate::menu::build_menu;
    use crate::updates::{self, DownloadHandle, SessionId, UpdateReceiver, UpdateState};
    use std::path::PathBuf;
    use std::sync::Mutex;
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct Recorder {
        clipboard: Arc<Mutex<Vec<String>>>,
        dialogs: Arc<Mutex<Vec<(String, String)>>>,
        fetches: Arc<Mutex<Vec<(SessionId, String)>>>,
        running: Arc<Mutex<Vec<bool>>>,
        progress: Arc<Mutex<Vec<u8>>>,
        close_requested: Arc<Mutex<bool>>,
    }

    struct FakeClipboard(Recorder, bool);

    impl ClipboardSink for FakeClipboard {
        fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
            if self.1 {
                anyhow::bail!("no display");
            }
            self.0.clipboard.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct FakeNotifier(Recorder);

    impl Notifier for FakeNotifier {
        fn info(&self, message: &str) {
            self.0.dialogs.lock().unwrap().push(("info".into(), message.into()));
        }

        fn warning(&self, message: &str) {
            self.0.dialogs.lock().unwrap().push(("warning".into(), message.into()));
        }
    }

    struct FakeTransport(Recorder);

    impl Transport for FakeTransport {
        fn fetch(&self, session: SessionId, url: &str, _events: UpdateSender) -> DownloadHandle {
            self.0.fetches.lock().unwrap().push((session, url.to_string()));
            DownloadHandle::detached()
        }
    }

    struct FakeView(Recorder);

    impl UpdateView for FakeView {
        fn set_running(&mut self, running: bool) {
            self.0.running.lock().unwrap().push(running);
        }

        fn show_progress(&mut self, report: &ProgressReport) {
            self.0.progress.lock().unwrap().push(report.percent);
        }

        fn take_cancel_request(&mut self) -> bool {
            std::mem::take(&mut *self.0.close_requested.lock().unwrap())
        }
    }

    struct Harness {
        controller: TrayMenuController,
        recorder: Recorder,
        _rx: UpdateReceiver,
    }

    fn harness(config: AppConfig, clipboard_fails: bool) -> Harness {
        let recorder = Recorder::default();
        let categories = vec![Category::new("cats", ["😺", "😸"], true)];
        let root = build_menu(&categories, &[], &config);
        let (tx, rx) = updates::channel();
        let parts = Collaborators {
            clipboard: Box::new(FakeClipboard(recorder.clone(), clipboard_fails)),
            notifier: Box::new(FakeNotifier(recorder.clone())),
            transport: Box::new(FakeTransport(recorder.clone())),
            view: Box::new(FakeView(recorder.clone())),
        };
        let controller = TrayMenuController::new(Arc::new(config), EventRouter::from_menu(&root), parts, tx);
        Harness { controller, recorder, _rx: rx }
    }

    fn config_for(destination: PathBuf) -> AppConfig {
        AppConfig::with_defaults(destination, None)
    }

    fn installed(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("unicodemoticon");
        std::fs::write(&path, b"old").unwrap();
        path
    }

    #[test]
    fn leaf_selection_copies_glyph_last_write_wins() {
        // Arrange
        let mut h = harness(config_for(PathBuf::from("/nonexistent")), false);

        // Act
        h.controller.on_leaf_selected("😺");
        h.controller.on_leaf_selected("😺");

        // Assert
        let clipboard = h.recorder.clipboard.lock().unwrap();
        assert_eq!(clipboard.last().unwrap(), "😺");
        assert!(clipboard.iter().all(|t| t == "😺"));
    }

    #[test]
    fn leaf_selection_pads_when_configured() {
        let mut config = config_for(PathBuf::from("/nonexistent"));
        config.pad_glyphs = true;
        let mut h = harness(config, false);

        h.controller.on_leaf_selected("ಠ_ಠ");

        assert_eq!(h.recorder.clipboard.lock().unwrap().as_slice(), [" ಠ_ಠ ".to_string()]);
    }

    #[test]
    fn clipboard_failure_is_swallowed() {
        let mut h = harness(config_for(PathBuf::from("/nonexistent")), true);

        let flow = h.controller.handle_menu_event("glyph::cats::0");

        assert_eq!(flow, Flow::Continue);
        assert!(h.recorder.dialogs.lock().unwrap().is_empty());
    }

    #[test]
    fn menu_events_route_to_copy_actions() {
        let cases = [("glyph::cats::0", "😸"), ("glyph::cats::1", "😺"), ("glyph::cats::all", "😸😺")];

        for (event_id, expected) in cases {
            let mut h = harness(config_for(PathBuf::from("/nonexistent")), false);
            h.controller.handle_menu_event(event_id);
            assert_eq!(h.recorder.clipboard.lock().unwrap().as_slice(), [expected.to_string()], "event: {}", event_id);
        }
    }

    #[test]
    fn unknown_menu_event_is_ignored() {
        let mut h = harness(config_for(PathBuf::from("/nonexistent")), false);

        assert_eq!(h.controller.handle_menu_event("nope"), Flow::Continue);
        assert!(h.recorder.clipboard.lock().unwrap().is_empty());
    }

    #[test]
    fn quit_event_ends_the_loop() {
        let mut h = harness(config_for(PathBuf::from("/nonexistent")), false);

        assert_eq!(h.controller.handle_menu_event(crate::menu::tree::QUIT_ID), Flow::Quit);
    }

    #[test]
    fn only_primary_trigger_opens_menu() {
        let h = harness(config_for(PathBuf::from("/nonexistent")), false);
        let cases = [
            (TriggerKind::Primary, true),
            (TriggerKind::Secondary, false),
            (TriggerKind::Middle, false),
            (TriggerKind::DoubleClick, false),
        ];

        for (kind, expected) in cases {
            assert_eq!(h.controller.on_trigger(kind), expected, "{:?}", kind);
        }
    }

    #[test]
    fn update_with_missing_destination_warns_without_fetching() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let mut h = harness(config_for(dir.path().join("missing")), false);

        // Act
        h.controller.handle_menu_event(crate::menu::tree::CHECK_UPDATES_ID);

        // Assert
        assert!(h.recorder.fetches.lock().unwrap().is_empty());
        let dialogs = h.recorder.dialogs.lock().unwrap();
        assert_eq!(dialogs.len(), 1);
        assert_eq!(dialogs[0].0, "warning");
        assert_eq!(h.controller.updater().state(), UpdateState::Failed);
    }

    #[test]
    fn update_flow_reports_progress_and_confirms() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let path = installed(&dir);
        let mut h = harness(config_for(path.clone()), false);

        // Act
        h.controller.check_for_updates();
        let (session, url) = h.recorder.fetches.lock().unwrap()[0].clone();
        h.controller.on_update_event(UpdateEvent::Progress { session, received: 50, total: 100 });
        h.controller.on_update_event(UpdateEvent::Progress { session, received: 100, total: 100 });
        h.controller.on_update_event(UpdateEvent::Finished { session, result: Ok(b"new".to_vec()) });

        // Assert
        assert_eq!(url, crate::config::DEFAULT_SOURCE_URL);
        assert_eq!(h.recorder.progress.lock().unwrap().as_slice(), [50, 100]);
        assert_eq!(h.recorder.running.lock().unwrap().as_slice(), [true, false]);
        assert_eq!(
            h.recorder.dialogs.lock().unwrap().as_slice(),
            [("info".to_string(), UPDATE_DONE_MESSAGE.to_string())]
        );
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn transport_error_surfaces_in_dialog() {
        let dir = TempDir::new().unwrap();
        let path = installed(&dir);
        let mut h = harness(config_for(path.clone()), false);

        h.controller.check_for_updates();
        let session = h.recorder.fetches.lock().unwrap()[0].0;
        h.controller.on_update_event(UpdateEvent::Finished {
            session,
            result: Err("invalid peer certificate".into()),
        });

        let dialogs = h.recorder.dialogs.lock().unwrap();
        assert_eq!(dialogs.as_slice(), [("warning".to_string(), "invalid peer certificate".to_string())]);
        assert_eq!(std::fs::read(&path).unwrap(), b"old");
    }

    #[test]
    fn cancel_stops_session_and_ignores_late_completion() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let path = installed(&dir);
        let mut h = harness(config_for(path.clone()), false);
        h.controller.check_for_updates();
        let session = h.recorder.fetches.lock().unwrap()[0].0;

        // Act
        h.controller.handle_menu_event(crate::menu::tree::CANCEL_UPDATE_ID);
        h.controller.on_update_event(UpdateEvent::Finished { session, result: Ok(b"new".to_vec()) });

        // Assert
        assert_eq!(h.recorder.running.lock().unwrap().as_slice(), [true, false]);
        assert!(h.recorder.dialogs.lock().unwrap().is_empty());
        assert_eq!(std::fs::read(&path).unwrap(), b"old");
        assert_eq!(h.controller.updater().state(), UpdateState::Idle);
    }

    #[test]
    fn second_update_request_while_running_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = installed(&dir);
        let mut h = harness(config_for(path), false);

        h.controller.check_for_updates();
        h.controller.check_for_updates();

        assert_eq!(h.recorder.fetches.lock().unwrap().len(), 1);
        assert_eq!(h.recorder.dialogs.lock().unwrap().len(), 1);
    }

    #[test]
    fn install_autostart_respects_config() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::with_defaults(PathBuf::from("/nonexistent"), Some(dir.path().to_path_buf()));
        let enabled = harness(config.clone(), false);
        config.install_autostart = false;
        let disabled = harness(config, false);

        // Act
        let skipped = disabled.controller.install_autostart();
        let first = enabled.controller.install_autostart();
        let second = enabled.controller.install_autostart();

        // Assert
        let path = dir.path().join(autostart::ENTRY_FILE_NAME);
        assert_eq!(skipped, None);
        assert_eq!(first, Some(AutostartOutcome::Installed(path.clone())));
        assert_eq!(second, Some(AutostartOutcome::AlreadyPresent(path)));
    }

    #[test]
    fn closing_progress_display_cancels_update() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let path = installed(&dir);
        let mut h = harness(config_for(path.clone()), false);
        h.controller.check_for_updates();
        let session = h.recorder.fetches.lock().unwrap()[0].0;
        h.controller.on_update_event(UpdateEvent::Progress { session, received: 10, total: 100 });

        // Act
        *h.recorder.close_requested.lock().unwrap() = true;
        h.controller.poll_view();
        h.controller.poll_view();
        h.controller.on_update_event(UpdateEvent::Finished { session, result: Ok(b"new".to_vec()) });

        // Assert
        assert_eq!(h.recorder.running.lock().unwrap().as_slice(), [true, false]);
        assert_eq!(h.controller.updater().state(), UpdateState::Idle);
        assert!(h.recorder.dialogs.lock().unwrap().is_empty());
        assert_eq!(std::fs::read(&path).unwrap(), b"old");
    }

    #[test]
    fn poll_view_without_request_keeps_update_running() {
        let dir = TempDir::new().unwrap();
        let path = installed(&dir);
        let mut h = harness(config_for(path), false);
        h.controller.check_for_updates();

        h.controller.poll_view();

        assert_eq!(h.controller.updater().state(), UpdateState::Downloading);
        assert_eq!(h.recorder.running.lock().unwrap().as_slice(), [true]);
    }
}
