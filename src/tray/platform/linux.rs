use crate::catalogue;
use crate::clipboard::SystemClipboard;
use crate::config::AppConfig;
use crate::controller::{Collaborators, Flow, TrayMenuController};
use crate::dialogs::DialogNotifier;
use crate::menu::{build_menu, builder, EventRouter};
use crate::tray::progress::TrayUpdateView;
use crate::updates::{self, download::ReqwestTransport, UpdateReceiver};
use anyhow::Result;
use gtk::{self, glib};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::broadcast;
use tray_icon::menu::{MenuEvent, MenuEventReceiver};
use tray_icon::{Icon, TrayIconBuilder, TrayIconEvent, TrayIconEventReceiver};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn create_tray(
    config: Arc<AppConfig>,
    runtime: Handle,
    shutdown_tx: broadcast::Sender<()>,
    icon: Icon,
) -> Result<()> {
    std::thread::spawn(move || {
        if gtk::init().is_err() {
            log::error!("Failed to initialize GTK");
            let _ = shutdown_tx.send(());
            return;
        }

        glib::set_prgname(Some(config.app_name.as_str()));
        glib::set_application_name(&config.display_name);

        let (controller, updates) = match build_controller(config, runtime, icon) {
            Ok(result) => result,
            Err(e) => {
                log::error!("Failed to create tray icon: {:#}", e);
                let _ = shutdown_tx.send(());
                return;
            }
        };

        controller.install_autostart();
        setup_event_loop(controller, updates, shutdown_tx);
        gtk::main();
    });

    Ok(())
}

fn build_controller(
    config: Arc<AppConfig>,
    runtime: Handle,
    icon: Icon,
) -> Result<(TrayMenuController, UpdateReceiver)> {
    let root = build_menu(&catalogue::categories(), &catalogue::html_entities(), &config);
    let router = EventRouter::from_menu(&root);
    let tray_menu = builder::build_tray_menu(&root)?;
    log::debug!("Menu built with {} actions", router.len());

    let tray_icon = TrayIconBuilder::new()
        .with_id(config.app_name.as_str())
        .with_menu(Box::new(tray_menu.menu))
        .with_tooltip(config.tooltip())
        .with_icon(icon)
        .with_menu_on_left_click(true)
        .build()?;

    let user_agent = format!("{}/{}", config.app_name, config.version);
    let transport = ReqwestTransport::new(runtime, &user_agent)?;
    let (events_tx, events_rx) = updates::channel();

    let parts = Collaborators {
        clipboard: Box::new(SystemClipboard::new()),
        notifier: Box::new(DialogNotifier::new(config.display_name.clone())),
        transport: Box::new(transport),
        view: Box::new(TrayUpdateView::new(tray_menu.update_items, tray_icon, &config.display_name)),
    };

    Ok((TrayMenuController::new(config, router, parts, events_tx), events_rx))
}

struct EventLoop {
    controller: TrayMenuController,
    updates: UpdateReceiver,
    menu_events: &'static MenuEventReceiver,
    tray_events: &'static TrayIconEventReceiver,
    shutdown_tx: broadcast::Sender<()>,
}

fn setup_event_loop(controller: TrayMenuController, updates: UpdateReceiver, shutdown_tx: broadcast::Sender<()>) {
    let mut state = EventLoop {
        controller,
        updates,
        menu_events: MenuEvent::receiver(),
        tray_events: TrayIconEvent::receiver(),
        shutdown_tx,
    };

    glib::timeout_add_local(POLL_INTERVAL, move || process_pending_events(&mut state));
}

fn process_pending_events(state: &mut EventLoop) -> glib::ControlFlow {
    // AppIndicator reports no icon clicks, so this queue stays empty on Linux.
    // tray-icon opens the menu itself via `with_menu_on_left_click`.
    while let Ok(event) = state.tray_events.try_recv() {
        if let Some(kind) = super::trigger_kind(&event) {
            state.controller.on_trigger(kind);
        }
    }

    state.controller.poll_view();
    while let Ok(event) = state.updates.try_recv() {
        state.controller.on_update_event(event);
    }

    while let Ok(event) = state.menu_events.try_recv() {
        if state.controller.handle_menu_event(&event.id.0) == Flow::Quit {
            log::info!("Quitting application");
            gtk::main_quit();
            let _ = state.shutdown_tx.send(());
            return glib::ControlFlow::Break;
        }
    }

    glib::ControlFlow::Continue
}
