//! Read-only query structure over a fetched catalog.

use std::sync::Arc;

use crate::models::{DeviceConfigResponse, StyleCategory, StyleItem};

/// Query view over one immutable catalog snapshot.
///
/// All queries are pure functions of the snapshot and their arguments; the
/// index never mutates the catalog and keeps no per-query state.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    catalog: Arc<DeviceConfigResponse>,
}

impl CatalogIndex {
    /// Builds an index over a fetched catalog.
    #[must_use]
    pub const fn new(catalog: Arc<DeviceConfigResponse>) -> Self {
        Self { catalog }
    }

    /// Underlying catalog snapshot.
    #[must_use]
    pub const fn catalog(&self) -> &Arc<DeviceConfigResponse> {
        &self.catalog
    }

    /// Categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[StyleCategory] {
        &self.catalog.uistyle
    }

    /// Returns true if the catalog has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Category selected on initial load: the first one, if any.
    #[must_use]
    pub fn default_category(&self) -> Option<&StyleCategory> {
        self.catalog.uistyle.first()
    }

    /// Looks up a category by ID. Unknown IDs return `None`.
    #[must_use]
    pub fn select_category(&self, category_id: &str) -> Option<&StyleCategory> {
        self.catalog.uistyle.iter().find(|c| c.id == category_id)
    }

    /// Position of a category in display order.
    #[must_use]
    pub fn category_position(&self, category_id: &str) -> Option<usize> {
        self.catalog.uistyle.iter().position(|c| c.id == category_id)
    }

    /// Items of a category whose display name contains `search_term`
    /// (case-insensitive), in original order.
    ///
    /// - Empty term: every item, including those without a name
    /// - Non-empty term: items without a name are excluded
    /// - Unknown category: empty
    #[must_use]
    pub fn visible_items(&self, category_id: &str, search_term: &str) -> Vec<&StyleItem> {
        self.select_category(category_id)
            .map(|category| {
                category
                    .lst_style
                    .iter()
                    .filter(|style| style.matches_search(search_term))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Looks up one item for the detail view.
    #[must_use]
    pub fn find_item(&self, category_id: &str, item_id: &str) -> Option<&StyleItem> {
        self.select_category(category_id)?.find_style(item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StyleItem;

    fn item(id: &str, name: Option<&str>) -> StyleItem {
        StyleItem {
            id: id.to_string(),
            style_name: name.map(str::to_string),
            ..StyleItem::default()
        }
    }

    fn index() -> CatalogIndex {
        CatalogIndex::new(Arc::new(DeviceConfigResponse::new(vec![
            StyleCategory {
                id: "cat_trends".to_string(),
                cat_name: "Trending".to_string(),
                lst_style: vec![
                    item("trend_0", Some("Trending 1")),
                    item("trend_1", Some("Trending 2")),
                    item("trend_2", None),
                ],
                ..StyleCategory::default()
            },
            StyleCategory {
                id: "cat_empty".to_string(),
                cat_name: "Empty".to_string(),
                ..StyleCategory::default()
            },
        ])))
    }

    fn ids(items: &[&StyleItem]) -> Vec<String> {
        items.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn test_default_category() {
        assert_eq!(index().default_category().unwrap().id, "cat_trends");

        let empty = CatalogIndex::new(Arc::new(DeviceConfigResponse::default()));
        assert!(empty.default_category().is_none());
        assert!(empty.visible_items("cat_trends", "").is_empty());
    }

    #[test]
    fn test_select_category() {
        let index = index();
        assert_eq!(index.select_category("cat_empty").unwrap().cat_name, "Empty");
        assert!(index.select_category("cat_missing").is_none());
        assert_eq!(index.category_position("cat_empty"), Some(1));
    }

    #[test]
    fn test_empty_search_is_identity() {
        let index = index();
        let visible = index.visible_items("cat_trends", "");
        assert_eq!(ids(&visible), vec!["trend_0", "trend_1", "trend_2"]);
    }

    #[test]
    fn test_search_excludes_unnamed() {
        let index = index();
        assert_eq!(ids(&index.visible_items("cat_trends", "2")), vec!["trend_1"]);
        assert_eq!(
            ids(&index.visible_items("cat_trends", "trending")),
            vec!["trend_0", "trend_1"]
        );
        assert!(index.visible_items("cat_trends", "zzz").is_empty());
    }

    #[test]
    fn test_search_is_idempotent() {
        let index = index();
        assert_eq!(
            index.visible_items("cat_trends", "TREND"),
            index.visible_items("cat_trends", "TREND")
        );
    }

    #[test]
    fn test_empty_category_and_unknown_category() {
        let index = index();
        assert!(index.visible_items("cat_empty", "").is_empty());
        assert!(index.visible_items("cat_missing", "").is_empty());
    }

    #[test]
    fn test_find_item() {
        let index = index();
        assert_eq!(index.find_item("cat_trends", "trend_1").unwrap().id, "trend_1");
        assert!(index.find_item("cat_empty", "trend_1").is_none());
    }
}
