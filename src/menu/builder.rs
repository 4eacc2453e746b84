use super::tree::{MenuNode, MenuRoot, CANCEL_UPDATE_ID, CHECK_UPDATES_ID, UPDATE_STATUS_ID};
use anyhow::{Context, Result};
use tray_icon::menu::{IsMenuItem, Menu, MenuItem, PredefinedMenuItem, Submenu};

/// Menu entries the update flow changes while a download runs.
pub struct UpdateItems {
    pub check: MenuItem,
    pub cancel: MenuItem,
    pub status: MenuItem,
}

pub struct TrayMenu {
    pub menu: Menu,
    pub update_items: UpdateItems,
}

trait MenuParent {
    fn push(&self, item: &dyn IsMenuItem) -> Result<()>;
}

impl MenuParent for Menu {
    fn push(&self, item: &dyn IsMenuItem) -> Result<()> {
        self.append(item)?;
        Ok(())
    }
}

impl MenuParent for Submenu {
    fn push(&self, item: &dyn IsMenuItem) -> Result<()> {
        self.append(item)?;
        Ok(())
    }
}

#[derive(Default)]
struct Collected {
    check: Option<MenuItem>,
    cancel: Option<MenuItem>,
    status: Option<MenuItem>,
}

impl Collected {
    fn keep(&mut self, id: &str, item: &MenuItem) {
        match id {
            CHECK_UPDATES_ID => self.check = Some(item.clone()),
            CANCEL_UPDATE_ID => self.cancel = Some(item.clone()),
            UPDATE_STATUS_ID => self.status = Some(item.clone()),
            _ => {}
        }
    }
}

pub fn build_tray_menu(root: &MenuRoot) -> Result<TrayMenu> {
    let menu = Menu::new();
    let mut collected = Collected::default();

    for node in &root.nodes {
        add_node(&menu, node, &mut collected)?;
    }

    let update_items = UpdateItems {
        check: collected.check.context("Menu has no update entry")?,
        cancel: collected.cancel.context("Menu has no cancel entry")?,
        status: collected.status.context("Menu has no update status line")?,
    };
    Ok(TrayMenu { menu, update_items })
}

fn add_node(parent: &dyn MenuParent, node: &MenuNode, collected: &mut Collected) -> Result<()> {
    match node {
        MenuNode::Submenu { id, label, children } => {
            log::debug!("Creating submenu with ID: {}", id);
            let submenu = Submenu::with_id(id.as_str(), label, true);
            for child in children {
                add_node(&submenu, child, collected)?;
            }
            parent.push(&submenu)
        }
        MenuNode::Leaf { id, label, enabled, .. } => {
            let item = MenuItem::with_id(id.as_str(), label, *enabled, None);
            collected.keep(id, &item);
            parent.push(&item)
        }
        MenuNode::Label { id, text } => {
            let item = MenuItem::with_id(id.as_str(), text, false, None);
            collected.keep(id, &item);
            parent.push(&item)
        }
        MenuNode::Separator => parent.push(&PredefinedMenuItem::separator()),
    }
}
