//! Catalog envelope returned by a config fetch.

use crate::models::StyleCategory;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Full catalog returned by one fetch.
///
/// An empty `uistyle` is a valid "no styles configured" state. When non-empty,
/// the first category is the default selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeviceConfigResponse {
    /// Categories in display order (required on the wire)
    pub uistyle: Vec<StyleCategory>,
}

impl DeviceConfigResponse {
    /// Creates a response from categories.
    #[must_use]
    pub const fn new(uistyle: Vec<StyleCategory>) -> Self {
        Self { uistyle }
    }

    /// Returns true if the catalog has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.uistyle.is_empty()
    }

    /// Total number of styles across all categories.
    #[must_use]
    pub fn style_count(&self) -> usize {
        self.uistyle.iter().map(StyleCategory::style_count).sum()
    }

    /// Checks catalog-level invariants.
    ///
    /// Category IDs must be unique, and every category must pass
    /// [`StyleCategory::validate`].
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for category in &self.uistyle {
            category.validate()?;
            if !seen.insert(category.id.as_str()) {
                anyhow::bail!("Duplicate category ID '{}'", category.id);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog_is_valid() {
        let response: DeviceConfigResponse = serde_json::from_str(r#"{"uistyle": []}"#).unwrap();
        assert!(response.is_empty());
        assert!(response.validate().is_ok());
    }

    #[test]
    fn test_missing_uistyle_rejected() {
        assert!(serde_json::from_str::<DeviceConfigResponse>("{}").is_err());
        assert!(serde_json::from_str::<DeviceConfigResponse>(r#"{"unexpected": true}"#).is_err());
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let json = r#"{"uistyle": [
            {"id": "cat_a", "cat_name": "A", "lst_style": []},
            {"id": "cat_a", "cat_name": "A again", "lst_style": []}
        ]}"#;
        let response: DeviceConfigResponse = serde_json::from_str(json).unwrap();
        assert!(response.validate().is_err());
    }

    #[test]
    fn test_same_style_id_across_categories_allowed() {
        let json = r#"{"uistyle": [
            {"id": "cat_a", "cat_name": "A", "lst_style": [{"id": "s1"}]},
            {"id": "cat_b", "cat_name": "B", "lst_style": [{"id": "s1"}, {"id": "s2"}]}
        ]}"#;
        let response: DeviceConfigResponse = serde_json::from_str(json).unwrap();
        assert!(response.validate().is_ok());
        assert_eq!(response.style_count(), 3);
    }
}
