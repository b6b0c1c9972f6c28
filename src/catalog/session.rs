//! Browse session: category selection, search term, highlighted row and
//! the opened detail item, independent of any rendering.

use tracing::debug;

use crate::models::{DeviceConfigResponse, StyleCategory, StyleItem};
use crate::provider::FetchError;

use super::CatalogState;

/// UI-independent state of one browsing session.
///
/// The visible item set is re-derived from (active category, search term) on
/// every query; nothing is cached between inputs.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    state: CatalogState,
    active_category: Option<String>,
    search: String,
    selected: usize,
    detail: Option<String>,
}

impl BrowseSession {
    /// Creates a session waiting for its first fetch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: CatalogState::Loading,
            active_category: None,
            search: String::new(),
            selected: 0,
            detail: None,
        }
    }

    /// Current catalog state.
    #[must_use]
    pub const fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Marks a new fetch as in flight and drops the previous selection.
    pub fn begin_loading(&mut self) {
        self.state = CatalogState::Loading;
        self.active_category = None;
        self.selected = 0;
        self.detail = None;
    }

    /// Applies a provider result.
    pub fn apply_result(&mut self, result: Result<DeviceConfigResponse, FetchError>) {
        match result {
            Ok(response) => self.on_loaded(response),
            Err(err) => self.on_failed(err),
        }
    }

    /// Installs a fetched catalog; the first category becomes active.
    pub fn on_loaded(&mut self, response: DeviceConfigResponse) {
        self.state = CatalogState::loaded(response);
        self.active_category = self
            .state
            .index()
            .and_then(|index| index.default_category())
            .map(|category| category.id.clone());
        self.selected = 0;
        self.detail = None;
        debug!(active = ?self.active_category, "Catalog installed in session");
    }

    /// Records a failed fetch; no category is active afterwards.
    pub fn on_failed(&mut self, err: FetchError) {
        self.state = CatalogState::Failed(err);
        self.active_category = None;
        self.selected = 0;
        self.detail = None;
    }

    /// Active category ID.
    #[must_use]
    pub fn active_category_id(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    /// Active category, if any.
    #[must_use]
    pub fn active_category(&self) -> Option<&StyleCategory> {
        let id = self.active_category.as_deref()?;
        self.state.index()?.select_category(id)
    }

    /// Selects a category by ID.
    ///
    /// Unknown IDs leave no category active. Returns whether the ID was found.
    pub fn select_category(&mut self, category_id: &str) -> bool {
        let found = self
            .state
            .index()
            .and_then(|index| index.select_category(category_id))
            .is_some();
        self.active_category = found.then(|| category_id.to_string());
        self.selected = 0;
        self.detail = None;
        found
    }

    /// Moves to the next category, wrapping around.
    pub fn next_category(&mut self) {
        self.step_category(true);
    }

    /// Moves to the previous category, wrapping around.
    pub fn previous_category(&mut self) {
        self.step_category(false);
    }

    fn step_category(&mut self, forward: bool) {
        let Some(index) = self.state.index() else {
            return;
        };
        let count = index.categories().len();
        if count == 0 {
            return;
        }

        let current = self
            .active_category
            .as_deref()
            .and_then(|id| index.category_position(id));
        let next = match (current, forward) {
            (None, _) => 0,
            (Some(pos), true) => (pos + 1) % count,
            (Some(pos), false) => (pos + count - 1) % count,
        };
        let id = index.categories()[next].id.clone();
        self.select_category(&id);
    }

    /// Current search term.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replaces the search term.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.selected = 0;
    }

    /// Appends a character to the search term.
    pub fn push_search(&mut self, ch: char) {
        self.search.push(ch);
        self.selected = 0;
    }

    /// Removes the last character of the search term.
    pub fn pop_search(&mut self) {
        self.search.pop();
        self.selected = 0;
    }

    /// Clears the search term.
    pub fn clear_search(&mut self) {
        self.search.clear();
        self.selected = 0;
    }

    /// Items of the active category matching the search term.
    #[must_use]
    pub fn visible_items(&self) -> Vec<&StyleItem> {
        match (self.state.index(), self.active_category.as_deref()) {
            (Some(index), Some(id)) => index.visible_items(id, &self.search),
            _ => Vec::new(),
        }
    }

    /// Highlighted row within the visible items.
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// Highlighted item, if the visible set is non-empty.
    #[must_use]
    pub fn selected_item(&self) -> Option<&StyleItem> {
        self.visible_items().get(self.selected).copied()
    }

    /// Moves the highlight down, stopping at the last row.
    pub fn select_next(&mut self) {
        let count = self.visible_items().len();
        if count > 0 && self.selected < count - 1 {
            self.selected += 1;
        }
    }

    /// Moves the highlight up, stopping at the first row.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Highlights the first row.
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Highlights the last row.
    pub fn select_last(&mut self) {
        self.selected = self.visible_items().len().saturating_sub(1);
    }

    /// Opens the detail view for the highlighted item.
    ///
    /// Returns false when nothing is highlighted.
    pub fn open_details(&mut self) -> bool {
        let id = self.selected_item().map(|item| item.id.clone());
        let opened = id.is_some();
        self.detail = id;
        opened
    }

    /// Closes the detail view.
    pub fn close_details(&mut self) {
        self.detail = None;
    }

    /// Item shown in the detail view.
    #[must_use]
    pub fn detail_item(&self) -> Option<&StyleItem> {
        let item_id = self.detail.as_deref()?;
        self.active_category()?.find_style(item_id)
    }
}

impl Default for BrowseSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{FailureKind, MockConfigProvider};

    fn loaded() -> BrowseSession {
        let mut session = BrowseSession::new();
        session.on_loaded(MockConfigProvider::generate_catalog());
        session
    }

    #[test]
    fn test_default_selection_after_load() {
        let session = loaded();
        assert_eq!(session.active_category_id(), Some("cat_trends"));
        assert_eq!(session.visible_items().len(), 6);
    }

    #[test]
    fn test_empty_catalog_has_no_active_category() {
        let mut session = BrowseSession::new();
        session.on_loaded(DeviceConfigResponse::default());
        assert!(session.active_category_id().is_none());
        assert!(session.visible_items().is_empty());
        assert!(session.state().failure().is_none());
    }

    #[test]
    fn test_failure_clears_selection() {
        let mut session = loaded();
        session.on_failed(FetchError::Transport("offline".to_string()));
        assert!(session.active_category_id().is_none());
        assert!(session.visible_items().is_empty());
        assert_eq!(session.state().failure_kind(), Some(FailureKind::Transport));
    }

    #[test]
    fn test_select_unknown_category() {
        let mut session = loaded();
        assert!(!session.select_category("cat_missing"));
        assert!(session.active_category_id().is_none());
        assert!(session.visible_items().is_empty());

        assert!(session.select_category("cat_ar"));
        assert_eq!(session.active_category().unwrap().cat_name, "AR Filters");
    }

    #[test]
    fn test_category_cycling_wraps() {
        let mut session = loaded();
        session.previous_category();
        assert_eq!(session.active_category_id(), Some("cat_print"));
        session.next_category();
        assert_eq!(session.active_category_id(), Some("cat_trends"));
        session.next_category();
        assert_eq!(session.active_category_id(), Some("cat_ar"));
    }

    #[test]
    fn test_search_resets_highlight() {
        let mut session = loaded();
        session.select_next();
        session.select_next();
        assert_eq!(session.selected_index(), 2);

        session.push_search('2');
        assert_eq!(session.selected_index(), 0);
        let visible = session.visible_items();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "trend_1");

        session.pop_search();
        assert_eq!(session.visible_items().len(), 6);
    }

    #[test]
    fn test_highlight_bounds() {
        let mut session = loaded();
        session.select_previous();
        assert_eq!(session.selected_index(), 0);
        for _ in 0..20 {
            session.select_next();
        }
        assert_eq!(session.selected_index(), 5);

        session.select_first();
        assert_eq!(session.selected_index(), 0);
        session.select_last();
        assert_eq!(session.selected_item().unwrap().id, "trend_5");
    }

    #[test]
    fn test_details_follow_highlight() {
        let mut session = loaded();
        session.select_next();
        assert!(session.open_details());
        assert_eq!(session.detail_item().unwrap().id, "trend_1");

        session.close_details();
        assert!(session.detail_item().is_none());

        session.set_search("nothing matches");
        assert!(!session.open_details());
    }

    #[test]
    fn test_switching_category_closes_details() {
        let mut session = loaded();
        session.open_details();
        session.next_category();
        assert!(session.detail_item().is_none());
    }
}
