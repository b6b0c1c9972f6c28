//! Data models for the style catalog.
//!
//! These types mirror the payload served by the device bridge. They carry no
//! UI or transport logic and are immutable once a catalog has been fetched.

pub mod category;
pub mod response;
pub mod style_item;

// Re-export all model types
pub use category::StyleCategory;
pub use response::DeviceConfigResponse;
pub use style_item::{LayoutElement, PhotoLayout, StyleItem};
