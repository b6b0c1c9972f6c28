//! Style categories shown as sidebar entries.

use crate::models::StyleItem;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Named grouping of style presets.
///
/// # Validation
///
/// - ID must be non-empty and unique within a catalog
/// - Style IDs must be non-empty and unique within the category
/// - `lst_style` order is display order and is never re-sorted
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleCategory {
    /// Category identifier (e.g., "cat_trends")
    pub id: String,
    /// Display name (e.g., "Trending")
    pub cat_name: String,
    /// Styles in display order
    pub lst_style: Vec<StyleItem>,
    /// Optional numeric type tag
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<i32>,
    /// Optional button icon URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub btnimg: Option<String>,
}

impl StyleCategory {
    /// Number of styles in the category.
    #[must_use]
    pub fn style_count(&self) -> usize {
        self.lst_style.len()
    }

    /// Looks up a style by ID within this category.
    #[must_use]
    pub fn find_style(&self, style_id: &str) -> Option<&StyleItem> {
        self.lst_style.iter().find(|style| style.id == style_id)
    }

    /// Validates category ID and the uniqueness of its style IDs.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            anyhow::bail!("Category ID cannot be empty");
        }

        let mut seen = HashSet::new();
        for style in &self.lst_style {
            if style.id.is_empty() {
                anyhow::bail!("Category '{}' contains a style with an empty ID", self.id);
            }
            if !seen.insert(style.id.as_str()) {
                anyhow::bail!(
                    "Category '{}' contains duplicate style ID '{}'",
                    self.id,
                    style.id
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(id: &str) -> StyleItem {
        StyleItem {
            id: id.to_string(),
            ..StyleItem::default()
        }
    }

    fn category(id: &str, styles: &[&str]) -> StyleCategory {
        StyleCategory {
            id: id.to_string(),
            cat_name: "Test".to_string(),
            lst_style: styles.iter().map(|s| style(s)).collect(),
            kind: None,
            btnimg: None,
        }
    }

    #[test]
    fn test_deserialize_type_tag() {
        let json = r#"{"id": "cat_ar", "cat_name": "AR Filters", "type": 2, "lst_style": []}"#;
        let cat: StyleCategory = serde_json::from_str(json).unwrap();
        assert_eq!(cat.kind, Some(2));
        assert_eq!(cat.btnimg, None);
        assert_eq!(cat.style_count(), 0);
    }

    #[test]
    fn test_find_style() {
        let cat = category("cat_gif", &["gif_0", "gif_1"]);
        assert_eq!(cat.find_style("gif_1").map(|s| s.id.as_str()), Some("gif_1"));
        assert!(cat.find_style("gif_9").is_none());
    }

    #[test]
    fn test_validate_valid() {
        assert!(category("cat_print", &["print_0", "print_1"]).validate().is_ok());
        assert!(category("empty", &[]).validate().is_ok());
    }

    #[test]
    fn test_validate_invalid() {
        assert!(category("", &[]).validate().is_err());
        assert!(category("cat", &["a", "a"]).validate().is_err());
        assert!(category("cat", &[""]).validate().is_err());
    }
}
