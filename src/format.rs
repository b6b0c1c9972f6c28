//! Display formatting shared by the terminal UI and the CLI.

use crate::models::StyleItem;

/// Formats a price in cents: `"FREE"` for zero, otherwise `"$D.CC"`.
#[must_use]
pub fn format_price(cents: u32) -> String {
    if cents == 0 {
        "FREE".to_string()
    } else {
        format!("${}.{:02}", cents / 100, cents % 100)
    }
}

/// Formats an optional price; a missing price renders as `"N/A"`.
#[must_use]
pub fn price_label(price: Option<u32>) -> String {
    price.map_or_else(|| "N/A".to_string(), format_price)
}

/// Short resolution label: `"1920x1080"` becomes `"1920p"`, absent becomes `"Auto"`.
#[must_use]
pub fn resolution_label(resolution: Option<&str>) -> String {
    match resolution {
        Some(res) if !res.is_empty() => {
            let width = res.split('x').next().unwrap_or(res);
            format!("{width}p")
        }
        _ => "Auto".to_string(),
    }
}

/// Heading of the detail view; unnamed styles read "Untitled Style".
#[must_use]
pub fn detail_title(style: &StyleItem) -> &str {
    style
        .style_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or("Untitled Style")
}

/// Badge labels for a style, in display order.
#[must_use]
pub fn badges(style: &StyleItem) -> Vec<&'static str> {
    let mut badges = Vec::new();
    if style.is_gif() {
        badges.push("GIF");
    }
    if style.is_ar() {
        badges.push("AR");
    }
    badges
}

/// Value cell of a configuration row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailValue {
    /// Rendered as a check or cross
    Flag(bool),
    /// Rendered verbatim
    Text(String),
}

impl std::fmt::Display for DetailValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag(true) => write!(f, "yes"),
            Self::Flag(false) => write!(f, "no"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

/// Rendering configuration of a style as labelled rows.
#[must_use]
pub fn configuration_rows(style: &StyleItem) -> Vec<(&'static str, DetailValue)> {
    vec![
        ("Client Render", DetailValue::Flag(style.is_client)),
        ("Keep BG Image", DetailValue::Flag(style.keep_bg_img)),
        ("Ratio Cut", DetailValue::Flag(style.ratio_cut())),
        ("Video Merge", DetailValue::Flag(style.video_merges())),
        (
            "Print Limit",
            DetailValue::Text(format!("{} prints", style.free_print_count)),
        ),
        (
            "Retry Limit",
            DetailValue::Text(format!("{} times", style.regeneration_num)),
        ),
    ]
}

/// Element counts per layer collection.
#[must_use]
pub fn layer_counts(style: &StyleItem) -> Vec<(&'static str, usize)> {
    vec![
        ("Layout Elements", style.lst_layout.len()),
        ("Photo Frames", style.lst_photo.len()),
        ("Stickers", style.lst_sticker.len()),
        ("Badges", style.lst_badge.len()),
        ("Rasters", style.lst_raster.len()),
    ]
}
