use unicodemoticon::catalogue::Category;
use unicodemoticon::config::AppConfig;
use unicodemoticon::menu::tree::{CANCEL_UPDATE_ID, CHECK_UPDATES_ID, QUIT_ID, REPORT_BUGS_ID};
use unicodemoticon::menu::{build_menu, EventRouter, LeafAction};
use std::path::PathBuf;

fn config() -> AppConfig {
    AppConfig::with_defaults(PathBuf::from("/usr/bin/unicodemoticon"), None)
}

#[test]
fn router_resolves_registered_ids_only() {
    // Arrange
    let router = EventRouter::new(vec![
        ("quit".to_string(), LeafAction::Quit),
        ("glyph::cats::0".to_string(), LeafAction::Copy("😸".to_string())),
    ]);

    // Act
    let quit = router.route("quit");
    let glyph = router.route("glyph::cats::0");
    let partial = router.route("glyph::cats");
    let unknown = router.route("reload");

    // Assert
    assert_eq!(quit, Some(&LeafAction::Quit));
    assert_eq!(glyph, Some(&LeafAction::Copy("😸".to_string())));
    assert_eq!(partial, None);
    assert_eq!(unknown, None);
}

#[test]
fn router_from_menu_covers_every_leaf() {
    // Arrange
    let categories = vec![
        Category::new("cats", ["😺", "😸"], true),
        Category::new("multi-character", ["ಠ_ಠ"], false),
    ];
    let root = build_menu(&categories, &[], &config());

    // Act
    let router = EventRouter::from_menu(&root);

    // Assert
    assert_eq!(router.len(), root.leaves().len());
    for (id, action) in root.leaves() {
        assert_eq!(router.route(id), Some(action), "id: {}", id);
    }
}

#[test]
fn router_maps_fixed_entries() {
    // Arrange
    let config = config();
    let root = build_menu(&[], &[], &config);
    let router = EventRouter::from_menu(&root);

    // Act & Assert
    let cases = [
        (QUIT_ID, LeafAction::Quit),
        (CHECK_UPDATES_ID, LeafAction::CheckForUpdates),
        (CANCEL_UPDATE_ID, LeafAction::CancelUpdate),
        (REPORT_BUGS_ID, LeafAction::OpenUrl(config.issues_url())),
    ];

    for (id, expected) in cases {
        assert_eq!(router.route(id), Some(&expected), "id: {}", id);
    }
}

#[test]
fn router_returns_none_for_labels() {
    let root = build_menu(&[], &[], &config());
    let router = EventRouter::from_menu(&root);

    assert_eq!(router.route(unicodemoticon::menu::tree::TITLE_ID), None);
    assert_eq!(router.route(unicodemoticon::menu::tree::UPDATE_STATUS_ID), None);
}
