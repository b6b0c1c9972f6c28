//! Catalog query and browse session behavior over a realistic catalog.

use pretty_assertions::assert_eq;
use styledeck::catalog::{BrowseSession, CatalogState};
use styledeck::models::StyleItem;
use styledeck::provider::{FailureKind, FetchError, MockConfigProvider};

mod fixtures;
use fixtures::*;

fn ids(items: &[&StyleItem]) -> Vec<String> {
    items.iter().map(|s| s.id.clone()).collect()
}

#[test]
fn test_default_category_is_first() {
    let index = sample_index();
    assert_eq!(index.default_category().unwrap().id, "classic");
}

#[test]
fn test_empty_search_returns_every_item_in_order() {
    let index = sample_index();
    assert_eq!(
        ids(&index.visible_items("classic", "")),
        vec!["s1", "s2", "s3", "s4"]
    );
}

#[test]
fn test_search_is_case_insensitive_and_keeps_order() {
    let index = sample_index();
    assert_eq!(ids(&index.visible_items("classic", "FILM")), vec!["s1", "s2"]);
    assert_eq!(ids(&index.visible_items("portrait", "film")), vec!["p2"]);
}

#[test]
fn test_search_result_is_subset_of_category() {
    let index = sample_index();
    let all = ids(&index.visible_items("classic", ""));
    for term in ["a", "film", "dream", "x"] {
        for id in ids(&index.visible_items("classic", term)) {
            assert!(all.contains(&id), "{id} not in category for '{term}'");
        }
    }
}

#[test]
fn test_unnamed_item_only_visible_without_search() {
    let index = sample_index();
    assert!(ids(&index.visible_items("classic", "")).contains(&"s3".to_string()));
    assert!(!ids(&index.visible_items("classic", "a")).contains(&"s3".to_string()));
}

#[test]
fn test_empty_and_unknown_categories() {
    let index = sample_index();
    assert!(index.select_category("empty").unwrap().lst_style.is_empty());
    assert!(index.visible_items("empty", "").is_empty());
    assert!(index.select_category("missing").is_none());
    assert!(index.visible_items("missing", "").is_empty());
}

#[test]
fn test_item_ids_are_scoped_to_category() {
    let index = sample_index();
    assert_eq!(
        index.find_item("classic", "s1").unwrap().display_name(),
        "Vintage Film"
    );
    assert_eq!(
        index.find_item("portrait", "s1").unwrap().display_name(),
        "Soft Light"
    );
}

#[test]
fn test_queries_do_not_mutate_catalog() {
    let index = sample_index();
    let before = index.catalog().as_ref().clone();
    let _ = index.visible_items("classic", "film");
    let _ = index.visible_items("portrait", "");
    assert_eq!(index.catalog().as_ref(), &before);
}

#[test]
fn test_mock_catalog_shape() {
    let catalog = MockConfigProvider::generate_catalog();
    let summary: Vec<(&str, usize)> = catalog
        .uistyle
        .iter()
        .map(|c| (c.id.as_str(), c.style_count()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("cat_trends", 6),
            ("cat_ar", 4),
            ("cat_gif", 5),
            ("cat_print", 8)
        ]
    );
    assert!(catalog.validate().is_ok());
}

#[test]
fn test_session_follows_category_and_search() {
    let mut session = BrowseSession::new();
    session.apply_result(Ok(sample_catalog()));
    assert_eq!(session.active_category_id(), Some("classic"));

    session.set_search("film");
    assert_eq!(ids(&session.visible_items()), vec!["s1", "s2"]);

    // The search term applies to whichever category is active
    assert!(session.select_category("portrait"));
    assert_eq!(ids(&session.visible_items()), vec!["p2"]);

    session.clear_search();
    assert_eq!(ids(&session.visible_items()), vec!["s1", "p2"]);
}

#[test]
fn test_session_unknown_category_clears_selection() {
    let mut session = BrowseSession::new();
    session.apply_result(Ok(sample_catalog()));
    assert!(!session.select_category("missing"));
    assert!(session.active_category_id().is_none());
    assert!(session.visible_items().is_empty());
}

#[test]
fn test_session_failure_clears_catalog() {
    let mut session = BrowseSession::new();
    session.apply_result(Ok(sample_catalog()));
    session.begin_loading();
    assert!(session.state().is_loading());

    session.apply_result(Err(FetchError::Transport("timed out".to_string())));
    assert!(matches!(session.state(), CatalogState::Failed(_)));
    assert_eq!(session.state().failure_kind(), Some(FailureKind::Transport));
    assert!(session.state().categories().is_empty());
    assert!(session.active_category_id().is_none());
    assert!(session.visible_items().is_empty());
}

#[test]
fn test_session_empty_catalog_is_loaded_not_failed() {
    let mut session = BrowseSession::new();
    session.apply_result(Ok(styledeck::models::DeviceConfigResponse::default()));
    assert!(session.state().index().is_some());
    assert_eq!(session.state().status_label(), "Connected (no styles)");
    assert!(session.active_category_id().is_none());
}
