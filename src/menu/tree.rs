use crate::catalogue::{Category, HtmlEntity};
use crate::config::AppConfig;

pub const TITLE_ID: &str = "__title__";
pub const ABOUT_ID: &str = "__about__";
pub const REPORT_BUGS_ID: &str = "__report_bugs__";
pub const CHECK_UPDATES_ID: &str = "__update__";
pub const CANCEL_UPDATE_ID: &str = "__cancel_update__";
pub const UPDATE_STATUS_ID: &str = "__update_status__";
pub const QUIT_ID: &str = "__quit__";

pub const ALL_LABEL: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafAction {
    Copy(String),
    OpenUrl(String),
    CheckForUpdates,
    CancelUpdate,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuNode {
    Submenu {
        id: String,
        label: String,
        children: Vec<MenuNode>,
    },
    Leaf {
        id: String,
        label: String,
        action: LeafAction,
        enabled: bool,
    },
    /// Disabled line of text.
    Label { id: String, text: String },
    Separator,
}

impl MenuNode {
    fn leaf(id: impl Into<String>, label: impl Into<String>, action: LeafAction) -> Self {
        MenuNode::Leaf {
            id: id.into(),
            label: label.into(),
            action,
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuRoot {
    pub nodes: Vec<MenuNode>,
}

impl MenuRoot {
    /// All actionable leaves in menu order, depth first.
    pub fn leaves(&self) -> Vec<(&str, &LeafAction)> {
        let mut out = Vec::new();
        collect_leaves(&self.nodes, &mut out);
        out
    }

    pub fn submenu(&self, label: &str) -> Option<&[MenuNode]> {
        self.nodes.iter().find_map(|node| match node {
            MenuNode::Submenu { label: l, children, .. } if l == label => Some(children.as_slice()),
            _ => None,
        })
    }
}

fn collect_leaves<'a>(nodes: &'a [MenuNode], out: &mut Vec<(&'a str, &'a LeafAction)>) {
    for node in nodes {
        match node {
            MenuNode::Leaf { id, action, .. } => out.push((id.as_str(), action)),
            MenuNode::Submenu { children, .. } => collect_leaves(children, out),
            MenuNode::Label { .. } | MenuNode::Separator => {}
        }
    }
}

/// Sorted, de-duplicated glyphs of one category.
pub fn menu_glyphs(category: &Category) -> Vec<&str> {
    let mut glyphs: Vec<&str> = category
        .glyphs
        .iter()
        .map(String::as_str)
        .filter(|g| !g.is_empty())
        .collect();
    glyphs.sort_unstable();
    glyphs.dedup();
    glyphs
}

pub fn category_submenu(category: &Category) -> MenuNode {
    let glyphs = menu_glyphs(category);
    let prefix = format!("glyph::{}", category.name);
    let mut children = Vec::with_capacity(glyphs.len() + 1);

    if category.copy_all {
        children.push(MenuNode::leaf(
            format!("{}::all", prefix),
            ALL_LABEL,
            LeafAction::Copy(glyphs.concat()),
        ));
    }

    for (idx, glyph) in glyphs.iter().enumerate() {
        children.push(MenuNode::leaf(
            format!("{}::{}", prefix, idx),
            glyph.trim(),
            LeafAction::Copy(glyph.to_string()),
        ));
    }

    MenuNode::Submenu {
        id: prefix,
        label: category.title(),
        children,
    }
}

fn html_submenu(entities: &[HtmlEntity]) -> MenuNode {
    let children = entities
        .iter()
        .enumerate()
        .map(|(idx, e)| {
            MenuNode::leaf(
                format!("html::{}", idx),
                e.character,
                LeafAction::Copy(e.entity.to_string()),
            )
        })
        .collect();

    MenuNode::Submenu {
        id: "html".to_string(),
        label: "HTML5 Code".to_string(),
        children,
    }
}

fn help_submenu(config: &AppConfig) -> MenuNode {
    MenuNode::Submenu {
        id: "help".to_string(),
        label: "Help...".to_string(),
        children: vec![
            MenuNode::leaf(
                ABOUT_ID,
                format!("About {}", config.display_name),
                LeafAction::OpenUrl(config.project_url.clone()),
            ),
            MenuNode::Separator,
            MenuNode::leaf(REPORT_BUGS_ID, "Report Bugs", LeafAction::OpenUrl(config.issues_url())),
            MenuNode::leaf(CHECK_UPDATES_ID, "Check for updates", LeafAction::CheckForUpdates),
            MenuNode::Leaf {
                id: CANCEL_UPDATE_ID.to_string(),
                label: "Cancel update".to_string(),
                action: LeafAction::CancelUpdate,
                enabled: false,
            },
            MenuNode::Label {
                id: UPDATE_STATUS_ID.to_string(),
                text: format!("Version {}", config.version),
            },
        ],
    }
}

pub fn build_menu(categories: &[Category], entities: &[HtmlEntity], config: &AppConfig) -> MenuRoot {
    let mut sorted: Vec<&Category> = categories.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut nodes = vec![
        MenuNode::Label {
            id: TITLE_ID.to_string(),
            text: "Emoticons".to_string(),
        },
        MenuNode::Separator,
    ];
    nodes.extend(sorted.into_iter().map(category_submenu));

    nodes.push(MenuNode::Separator);
    if !entities.is_empty() {
        nodes.push(html_submenu(entities));
        nodes.push(MenuNode::Separator);
    }

    nodes.push(help_submenu(config));
    nodes.push(MenuNode::Separator);
    nodes.push(MenuNode::leaf(QUIT_ID, "Quit", LeafAction::Quit));

    MenuRoot { nodes }
}
