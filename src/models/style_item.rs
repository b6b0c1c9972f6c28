//! Style presets and the visual layers they are composed of.

use serde::{Deserialize, Serialize};

/// Placement of one layout element inside a style's canvas.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutElement {
    /// Element identifier
    pub id: String,
    /// Horizontal offset
    pub x: f64,
    /// Vertical offset
    pub y: f64,
    /// Element width
    pub width: f64,
    /// Element height
    pub height: f64,
    /// Stacking order (higher draws on top)
    #[serde(rename = "zIndex")]
    pub z_index: i32,
}

/// Photo frame slot inside a style.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoLayout {
    /// Frame identifier
    pub id: String,
    /// Optional mask image applied to the photo
    #[serde(rename = "maskUrl", skip_serializing_if = "Option::is_none")]
    pub mask_url: Option<String>,
    /// Rotation in degrees
    pub rotation: f64,
}

/// One selectable style preset.
///
/// Field names on the wire follow the bridge service (a mix of snake_case and
/// camelCase); the Rust names are normalized. Numeric flags keep their wire
/// encoding (`0`/`1`) and are read through the helper methods.
///
/// # Invariants
///
/// - `id` is unique within the owning [`StyleCategory`](super::StyleCategory)
/// - `price` is unsigned; `Some(0)` means free and `None` means the price is missing
/// - `style_name: None` is distinct from `Some("")` (search treats them differently)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleItem {
    /// Style identifier
    pub id: String,
    /// Display name (nullable)
    pub style_name: Option<String>,
    /// Preview image URL
    pub img_preview: String,
    /// Image render mode
    pub img_type: i32,
    /// Crop/cut mode
    pub cut_type: i32,
    /// Whether rendering happens on the client
    #[serde(rename = "isClient")]
    pub is_client: bool,
    /// Whether the background image is kept
    #[serde(rename = "keepBgImg")]
    pub keep_bg_img: bool,
    /// AR enablement flag (`1` = AR)
    pub ar8: i32,
    /// AR submit parameter
    pub arsubmit: i32,
    /// Video parameters (e.g. `fps=15`)
    #[serde(rename = "videoParams")]
    pub video_params: Option<String>,
    /// Type parameters
    #[serde(rename = "typeParams")]
    pub type_params: String,
    /// Image style identifier
    #[serde(rename = "imgStyleId")]
    pub img_style_id: i64,
    /// GIF flag (`1` = GIF)
    #[serde(rename = "isGif")]
    pub is_gif: i32,
    /// Output resolution such as `1920x1080`
    pub resolution: Option<String>,
    /// Video merge flag
    #[serde(rename = "videoMerge")]
    pub video_merge: i32,
    /// Client merge flag
    #[serde(rename = "clientMerge")]
    pub client_merge: i32,
    /// Ratio cut status (`1` = enabled)
    #[serde(rename = "ratioCutStatus")]
    pub ratio_cut_status: i32,
    /// Preview image status
    #[serde(rename = "preImgStatus")]
    pub pre_img_status: i32,
    /// Preview window flag
    #[serde(rename = "preWindow")]
    pub pre_window: i32,
    /// Layout elements
    pub lst_layout: Vec<LayoutElement>,
    /// Merge style identifier
    #[serde(rename = "mergeStyleId")]
    pub merge_style_id: i64,
    /// AR video type
    #[serde(rename = "arVideoType")]
    pub ar_video_type: i32,
    /// Photo frames
    pub lst_photo: Vec<PhotoLayout>,
    /// Sticker references, passed through untouched
    pub lst_sticker: Vec<serde_json::Value>,
    /// Badge references, passed through untouched
    pub lst_badge: Vec<serde_json::Value>,
    /// Raster references, passed through untouched
    pub lst_raster: Vec<serde_json::Value>,
    /// Price in cents
    pub price: Option<u32>,
    /// Promotional price in cents
    #[serde(rename = "freePrice")]
    pub free_price: u32,
    /// Safe-delete flag
    pub delsafe: bool,
    /// Whether the photo frame is removed
    #[serde(rename = "delPhotoFrame")]
    pub del_photo_frame: bool,
    /// Whether assets are split
    #[serde(rename = "assetSplit")]
    pub asset_split: bool,
    /// AR video source
    #[serde(rename = "arVideoSource")]
    pub ar_video_source: i32,
    /// AR video soundtrack
    #[serde(rename = "arVideoMp3")]
    pub ar_video_mp3: String,
    /// Free prints included
    #[serde(rename = "freePrintCount")]
    pub free_print_count: u32,
    /// Allowed regenerations
    #[serde(rename = "regenerationNum")]
    pub regeneration_num: u32,
}

impl StyleItem {
    /// Name shown in lists, falling back to "Untitled" when the name is absent.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.style_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Untitled",
        }
    }

    /// Returns true if the style is an animated GIF preset.
    #[must_use]
    pub const fn is_gif(&self) -> bool {
        self.is_gif == 1
    }

    /// Returns true if the style has AR enabled.
    #[must_use]
    pub const fn is_ar(&self) -> bool {
        self.ar8 == 1
    }

    /// Returns true if ratio cutting is enabled.
    #[must_use]
    pub const fn ratio_cut(&self) -> bool {
        self.ratio_cut_status == 1
    }

    /// Returns true if video merging is enabled.
    #[must_use]
    pub const fn video_merges(&self) -> bool {
        self.video_merge == 1
    }

    /// Returns true only when a price is present and equal to zero.
    #[must_use]
    pub const fn is_free(&self) -> bool {
        matches!(self.price, Some(0))
    }

    /// Case-insensitive substring match on the display name.
    ///
    /// An empty term matches everything. A missing name never matches a
    /// non-empty term; an empty-string name is matched like any other string.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        self.style_name
            .as_ref()
            .is_some_and(|name| name.to_lowercase().contains(&term.to_lowercase()))
    }
}
