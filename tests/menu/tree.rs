use std::collections::HashSet;
use std::path::PathBuf;
use unicodemoticon::catalogue::{self, Category, HtmlEntity};
use unicodemoticon::config::AppConfig;
use unicodemoticon::menu::tree::{menu_glyphs, ALL_LABEL, QUIT_ID, TITLE_ID};
use unicodemoticon::menu::{build_menu, LeafAction, MenuNode};

fn config() -> AppConfig {
    AppConfig::with_defaults(PathBuf::from("/usr/bin/unicodemoticon"), None)
}

fn submenu_labels(nodes: &[MenuNode]) -> Vec<&str> {
    nodes
        .iter()
        .filter_map(|n| match n {
            MenuNode::Submenu { label, .. } => Some(label.as_str()),
            _ => None,
        })
        .collect()
}

fn leaf_labels(nodes: &[MenuNode]) -> Vec<&str> {
    nodes
        .iter()
        .filter_map(|n| match n {
            MenuNode::Leaf { label, .. } => Some(label.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn categories_are_sorted_by_name_and_title_cased() {
    // Arrange
    let categories = vec![
        Category::new("zodiac", ["♈"], true),
        Category::new("animals faces", ["🐭"], true),
        Category::new("cats", ["😺"], true),
    ];

    // Act
    let root = build_menu(&categories, &[], &config());

    // Assert
    assert_eq!(
        submenu_labels(&root.nodes),
        ["Animals Faces", "Cats", "Zodiac", "Help..."]
    );
}

#[test]
fn glyphs_are_sorted_and_deduplicated_with_all_entry_first() {
    // Arrange
    let categories = vec![Category::new("sports", ["⚾", "⚽", "⚾", "🎾"], true)];

    // Act
    let root = build_menu(&categories, &[], &config());
    let sports = root.submenu("Sports").unwrap();

    // Assert
    assert_eq!(leaf_labels(sports), [ALL_LABEL, "⚽", "⚾", "🎾"]);
    match &sports[0] {
        MenuNode::Leaf { action, .. } => assert_eq!(action, &LeafAction::Copy("⚽⚾🎾".to_string())),
        other => panic!("Expected the all entry, got {:?}", other),
    }
}

#[test]
fn categories_without_copy_all_have_no_all_entry() {
    let categories = vec![Category::new("multi-character", ["ಠ_ಠ", "(⌐■_■)"], false)];

    let root = build_menu(&categories, &[], &config());
    let multi = root.submenu("Multi-Character").unwrap();

    assert!(!leaf_labels(multi).contains(&ALL_LABEL));
    assert_eq!(multi.len(), 2);
}

#[test]
fn labels_are_trimmed_but_copied_text_is_not() {
    let categories = vec![Category::new("faces", [" ツ "], false)];

    let root = build_menu(&categories, &[], &config());
    let faces = root.submenu("Faces").unwrap();

    match &faces[0] {
        MenuNode::Leaf { label, action, .. } => {
            assert_eq!(label, "ツ");
            assert_eq!(action, &LeafAction::Copy(" ツ ".to_string()));
        }
        other => panic!("Expected a leaf, got {:?}", other),
    }
}

#[test]
fn html_submenu_copies_entities() {
    let entities = vec![
        HtmlEntity { entity: "&copy;", character: "©" },
        HtmlEntity { entity: "&reg;", character: "®" },
    ];

    let root = build_menu(&[], &entities, &config());
    let html = root.submenu("HTML5 Code").unwrap();

    assert_eq!(leaf_labels(html), ["©", "®"]);
    match &html[0] {
        MenuNode::Leaf { action, .. } => assert_eq!(action, &LeafAction::Copy("&copy;".to_string())),
        other => panic!("Expected a leaf, got {:?}", other),
    }
}

#[test]
fn menu_starts_with_title_and_ends_with_quit() {
    let root = build_menu(&catalogue::categories(), &catalogue::html_entities(), &config());

    assert!(matches!(root.nodes.first(), Some(MenuNode::Label { id, .. }) if id == TITLE_ID));
    assert!(matches!(root.nodes.last(), Some(MenuNode::Leaf { id, action: LeafAction::Quit, .. }) if id == QUIT_ID));
}

#[test]
fn full_catalogue_has_unique_ids_and_non_empty_glyphs() {
    // Arrange
    let categories = catalogue::categories();

    // Act
    let root = build_menu(&categories, &catalogue::html_entities(), &config());
    let leaves = root.leaves();

    // Assert
    let ids: HashSet<_> = leaves.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids.len(), leaves.len(), "menu ids must be unique");

    for category in &categories {
        let glyphs = menu_glyphs(category);
        let unique: HashSet<_> = glyphs.iter().collect();
        assert_eq!(unique.len(), glyphs.len(), "duplicate glyph in {}", category.name);
        assert!(glyphs.iter().all(|g| !g.is_empty()));
    }

    for (_, action) in leaves {
        if let LeafAction::Copy(text) = action {
            assert!(!text.is_empty());
        }
    }
}

#[test]
fn update_controls_start_in_idle_state() {
    let root = build_menu(&[], &[], &config());
    let help = root.submenu("Help...").unwrap();

    let cancel_enabled = help.iter().find_map(|n| match n {
        MenuNode::Leaf { action: LeafAction::CancelUpdate, enabled, .. } => Some(*enabled),
        _ => None,
    });
    let check_enabled = help.iter().find_map(|n| match n {
        MenuNode::Leaf { action: LeafAction::CheckForUpdates, enabled, .. } => Some(*enabled),
        _ => None,
    });

    assert_eq!(cancel_enabled, Some(false));
    assert_eq!(check_enabled, Some(true));
}
