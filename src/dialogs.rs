use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Blocking, modal messages for the user.
pub trait Notifier {
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
}

pub struct DialogNotifier {
    title: String,
}

impl DialogNotifier {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }

    fn show(&self, level: MessageLevel, message: &str) {
        let _ = MessageDialog::new()
            .set_level(level)
            .set_title(self.title.as_str())
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

impl Notifier for DialogNotifier {
    fn info(&self, message: &str) {
        log::info!("{}", message);
        self.show(MessageLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        log::warn!("{}", message);
        self.show(MessageLevel::Warning, message);
    }
}
