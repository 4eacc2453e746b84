use crate::controller::UpdateView;
use crate::menu::builder::UpdateItems;
use crate::updates::progress::ProgressReport;
use gtk::prelude::*;
use gtk::{glib, Align, Orientation, WindowPosition};
use std::cell::Cell;
use std::rc::Rc;
use tray_icon::TrayIcon;

const IDLE_TEXT: &str = "Connecting...";

/// Download progress window. Closing it or pressing Cancel raises the
/// cancel request polled by the controller.
struct ProgressWindow {
    window: gtk::Window,
    details: gtk::Label,
    bar: gtk::ProgressBar,
    cancel_requested: Rc<Cell<bool>>,
}

impl ProgressWindow {
    fn new(title: &str) -> Self {
        let window = gtk::Window::new(gtk::WindowType::Toplevel);
        window.set_title(title);
        window.set_resizable(false);
        window.set_position(WindowPosition::Center);
        window.set_default_size(420, -1);

        let details = gtk::Label::new(Some(IDLE_TEXT));
        details.set_xalign(0.0);
        details.set_selectable(true);

        let bar = gtk::ProgressBar::new();
        bar.set_show_text(true);

        let cancel = gtk::Button::with_label("Cancel");
        cancel.set_halign(Align::End);

        let layout = gtk::Box::new(Orientation::Vertical, 8);
        layout.set_border_width(12);
        layout.pack_start(&details, true, true, 0);
        layout.pack_start(&bar, false, false, 0);
        layout.pack_start(&cancel, false, false, 0);
        window.add(&layout);

        let cancel_requested = Rc::new(Cell::new(false));

        let requested = cancel_requested.clone();
        window.connect_delete_event(move |window, _| {
            requested.set(true);
            window.hide();
            glib::Propagation::Stop
        });

        let requested = cancel_requested.clone();
        let parent = window.clone();
        cancel.connect_clicked(move |_| {
            requested.set(true);
            parent.hide();
        });

        Self {
            window,
            details,
            bar,
            cancel_requested,
        }
    }

    fn open(&self) {
        self.cancel_requested.set(false);
        self.details.set_text(IDLE_TEXT);
        self.bar.set_fraction(0.0);
        self.bar.set_text(Some("0%"));
        self.window.show_all();
        self.window.present();
    }

    fn close(&self) {
        self.window.hide();
    }

    fn show(&self, report: &ProgressReport) {
        self.details.set_text(&report.to_string());
        self.bar.set_fraction(report.fraction());
        self.bar.set_text(Some(&format!("{}%", report.percent)));
    }
}

/// Shows the update flow: a progress window while a download runs, plus the
/// status line and the enabled state of the Help entries.
pub struct TrayUpdateView {
    items: UpdateItems,
    window: ProgressWindow,
    idle_status: String,
    _tray: TrayIcon,
}

impl TrayUpdateView {
    pub fn new(items: UpdateItems, tray: TrayIcon, title: &str) -> Self {
        let idle_status = items.status.text();
        Self {
            items,
            window: ProgressWindow::new(title),
            idle_status,
            _tray: tray,
        }
    }
}

impl UpdateView for TrayUpdateView {
    fn set_running(&mut self, running: bool) {
        self.items.check.set_enabled(!running);
        self.items.cancel.set_enabled(running);

        if running {
            self.items.status.set_text("Update: connecting...");
            self.window.open();
        } else {
            self.items.status.set_text(&self.idle_status);
            self.window.close();
        }
    }

    fn show_progress(&mut self, report: &ProgressReport) {
        self.items.status.set_text(report.summary());
        self.window.show(report);
    }

    fn take_cancel_request(&mut self) -> bool {
        self.window.cancel_requested.take()
    }
}
