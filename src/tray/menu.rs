//! Status-bar item and menu

use crate::core::events::{AppEvent, EventSender};
use anyhow::{Context, Result};
use tray_icon::{
    menu::{
        accelerator::{Accelerator, Code, Modifiers},
        Menu, MenuEvent, MenuId, MenuItem, PredefinedMenuItem,
    },
    TrayIcon as TrayIconHandle, TrayIconBuilder,
};
use tracing::{debug, error, info};

/// Status menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    /// Reveal and focus the main window
    ShowWindow,
    /// Quit application
    Quit,
}

/// Status-bar item showing the unread count
pub struct StatusItem {
    /// Tray icon handle
    tray: TrayIconHandle,
}

impl StatusItem {
    /// Create the status item. Must run on the event loop thread after the
    /// loop has started.
    pub fn new(event_tx: EventSender, title: &str, base_icon: &str) -> Result<Self> {
        let menu = Menu::new();

        let show_item = MenuItem::new(format!("Show {}", title), true, None);
        let show_id = show_item.id().clone();

        let quit_item = MenuItem::new(
            "Quit",
            true,
            Some(Accelerator::new(Some(Modifiers::SUPER), Code::KeyQ)),
        );
        let quit_id = quit_item.id().clone();

        menu.append(&show_item)?;
        menu.append(&PredefinedMenuItem::separator())?;
        menu.append(&quit_item)?;

        let builder = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_tooltip(title)
            .with_title(base_icon);

        #[cfg(not(target_os = "macos"))]
        let builder = builder.with_icon(super::status_icon()?);

        let tray = builder.build().context("Failed to create status item")?;

        info!("Status item created");

        Self::start_menu_handler(event_tx, show_id, quit_id);

        Ok(Self { tray })
    }

    /// Forward menu clicks to the event loop
    fn start_menu_handler(event_tx: EventSender, show_id: MenuId, quit_id: MenuId) {
        std::thread::spawn(move || {
            let receiver = MenuEvent::receiver();

            while let Ok(event) = receiver.recv() {
                debug!("Menu event: {:?}", event);

                let action = if event.id == show_id {
                    Some(StatusAction::ShowWindow)
                } else if event.id == quit_id {
                    Some(StatusAction::Quit)
                } else {
                    None
                };

                if let Some(action) = action {
                    if let Err(e) = event_tx.send(AppEvent::StatusAction(action)) {
                        error!("Failed to send status action: {}", e);
                        break;
                    }
                }
            }
        });
    }

    /// Set the text shown in the menu bar
    pub fn set_label(&self, label: &str) {
        self.tray.set_title(Some(label));

        // No title support off macOS; keep the count reachable via tooltip
        #[cfg(not(target_os = "macos"))]
        if let Err(e) = self.tray.set_tooltip(Some(label)) {
            error!("Failed to set status tooltip: {}", e);
        }
    }
}
