//! Headless catalog commands: `categories`, `styles`, `show`.
//!
//! Each command receives the already-fetched catalog; fetching and its
//! failure handling happen once in `main`.

use clap::Args;
use serde::Serialize;

use crate::catalog::CatalogIndex;
use crate::cli::common::{print_json, CliError, CliResult};
use crate::format::{
    badges, configuration_rows, detail_title, layer_counts, price_label, resolution_label,
};
use crate::models::{StyleCategory, StyleItem};

/// List categories in display order
#[derive(Debug, Clone, Args)]
pub struct CategoriesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// List styles of a category
#[derive(Debug, Clone, Args)]
pub struct StylesArgs {
    /// Category ID (defaults to the first category)
    #[arg(short, long, value_name = "ID")]
    pub category: Option<String>,

    /// Case-insensitive substring filter on style names
    #[arg(short, long, value_name = "TERM")]
    pub search: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Show details of one style
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Style ID
    #[arg(value_name = "STYLE_ID")]
    pub style_id: String,

    /// Category to look in (defaults to the first category containing the ID)
    #[arg(short, long, value_name = "ID")]
    pub category: Option<String>,

    /// Output the raw style record as JSON
    #[arg(long)]
    pub json: bool,
}

/// One category row.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategorySummary {
    /// Category ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Category type code
    #[serde(rename = "type")]
    pub kind: Option<i32>,
    /// Number of styles
    pub styles: usize,
}

/// `categories` response.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryListResponse {
    /// Categories in display order
    pub categories: Vec<CategorySummary>,
    /// Total number of categories
    pub count: usize,
}

/// One style row.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StyleSummary {
    /// Style ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Price in cents
    pub price: Option<u32>,
    /// Formatted price
    pub price_label: String,
    /// Formatted resolution
    pub resolution: String,
    /// Badge labels
    pub badges: Vec<&'static str>,
}

/// `styles` response.
#[derive(Debug, Clone, Serialize)]
pub struct StyleListResponse {
    /// Category the styles belong to; `None` when the catalog is empty
    pub category: Option<String>,
    /// Search term applied
    pub search: String,
    /// Matching styles in catalog order
    pub styles: Vec<StyleSummary>,
    /// Number of matching styles
    pub count: usize,
}

/// `show --json` response.
#[derive(Debug, Clone, Serialize)]
pub struct StyleDetailResponse<'a> {
    /// Category the style was found in
    pub category: &'a str,
    /// Raw style record
    pub style: &'a StyleItem,
}

impl From<&StyleCategory> for CategorySummary {
    fn from(category: &StyleCategory) -> Self {
        Self {
            id: category.id.clone(),
            name: category.cat_name.clone(),
            kind: category.kind,
            styles: category.style_count(),
        }
    }
}

impl From<&StyleItem> for StyleSummary {
    fn from(style: &StyleItem) -> Self {
        Self {
            id: style.id.clone(),
            name: style.display_name().to_string(),
            price: style.price,
            price_label: price_label(style.price),
            resolution: resolution_label(style.resolution.as_deref()),
            badges: badges(style),
        }
    }
}

/// Builds the `categories` response.
#[must_use]
pub fn list_categories(index: &CatalogIndex) -> CategoryListResponse {
    let categories: Vec<CategorySummary> =
        index.categories().iter().map(CategorySummary::from).collect();
    let count = categories.len();
    CategoryListResponse { categories, count }
}

/// Builds the `styles` response.
pub fn list_styles(
    index: &CatalogIndex,
    category_id: Option<&str>,
    search: &str,
) -> CliResult<StyleListResponse> {
    let category = match category_id {
        Some(id) => Some(resolve_category(index, id)?),
        None => index.default_category(),
    };
    let styles: Vec<StyleSummary> = category
        .map(|category| index.visible_items(&category.id, search))
        .unwrap_or_default()
        .into_iter()
        .map(StyleSummary::from)
        .collect();
    let count = styles.len();

    Ok(StyleListResponse {
        category: category.map(|category| category.id.clone()),
        search: search.to_string(),
        styles,
        count,
    })
}

/// Finds a style by ID, optionally restricted to one category.
pub fn find_style<'a>(
    index: &'a CatalogIndex,
    style_id: &str,
    category_id: Option<&str>,
) -> CliResult<(&'a StyleCategory, &'a StyleItem)> {
    if let Some(category_id) = category_id {
        let category = resolve_category(index, category_id)?;
        let style = category.find_style(style_id).ok_or_else(|| {
            CliError::validation(format!(
                "Style '{style_id}' not found in category '{category_id}'"
            ))
        })?;
        return Ok((category, style));
    }

    index
        .categories()
        .iter()
        .find_map(|category| category.find_style(style_id).map(|style| (category, style)))
        .ok_or_else(|| CliError::validation(format!("Style '{style_id}' not found")))
}

fn resolve_category<'a>(index: &'a CatalogIndex, id: &str) -> CliResult<&'a StyleCategory> {
    index
        .select_category(id)
        .ok_or_else(|| CliError::validation(format!("Category '{id}' not found")))
}

impl CategoriesArgs {
    /// Execute the categories command
    pub fn execute(&self, index: &CatalogIndex) -> CliResult<()> {
        let response = list_categories(index);

        if self.json {
            return print_json(&response);
        }

        if response.categories.is_empty() {
            println!("No categories available.");
            return Ok(());
        }

        for category in &response.categories {
            println!(
                "{:<16} {:<24} {:>3} styles",
                category.id, category.name, category.styles
            );
        }
        Ok(())
    }
}

impl StylesArgs {
    /// Execute the styles command
    pub fn execute(&self, index: &CatalogIndex) -> CliResult<()> {
        let search = self.search.as_deref().unwrap_or_default();
        let response = list_styles(index, self.category.as_deref(), search)?;

        if self.json {
            return print_json(&response);
        }

        let Some(category) = response.category.as_deref() else {
            println!("No categories available.");
            return Ok(());
        };

        if response.styles.is_empty() {
            if search.is_empty() {
                println!("No styles in category '{category}'.");
            } else {
                println!("No styles matching '{search}' in category '{category}'.");
            }
            return Ok(());
        }

        for style in &response.styles {
            let badges = if style.badges.is_empty() {
                String::new()
            } else {
                format!(" [{}]", style.badges.join(", "))
            };
            println!(
                "{:<16} {:<24} {:>8} {:>6}{badges}",
                style.id, style.name, style.price_label, style.resolution
            );
        }
        Ok(())
    }
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self, index: &CatalogIndex) -> CliResult<()> {
        let (category, style) = find_style(index, &self.style_id, self.category.as_deref())?;

        if self.json {
            return print_json(&StyleDetailResponse {
                category: &category.id,
                style,
            });
        }

        let title = detail_title(style);
        println!("{title}");
        println!("{}", "=".repeat(title.chars().count()));
        println!();
        println!("  ID:         {}", style.id);
        println!("  Category:   {} ({})", category.cat_name, category.id);
        println!("  Price:      {}", price_label(style.price));
        println!(
            "  Resolution: {}",
            resolution_label(style.resolution.as_deref())
        );
        let badges = badges(style);
        if !badges.is_empty() {
            println!("  Badges:     {}", badges.join(", "));
        }
        println!();

        println!("Configuration:");
        for (label, value) in configuration_rows(style) {
            println!("  {label:<14} {value}");
        }
        println!();

        println!("Layers:");
        for (label, count) in layer_counts(style) {
            println!("  {label:<16} {count}");
        }
        Ok(())
    }
}
