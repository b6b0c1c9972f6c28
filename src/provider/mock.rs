//! Synthetic catalog provider for previews and tests.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::models::{DeviceConfigResponse, StyleCategory, StyleItem};

use super::{ConfigProvider, Credentials, FetchError};

/// Returns a fixed four-category catalog after an artificial delay.
///
/// Everything is deterministic except `isClient`, which is randomized per item.
#[derive(Debug, Clone)]
pub struct MockConfigProvider {
    delay: Duration,
}

impl MockConfigProvider {
    /// Creates a mock provider with the given artificial delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Builds the synthetic catalog without any delay.
    #[must_use]
    pub fn generate_catalog() -> DeviceConfigResponse {
        DeviceConfigResponse::new(vec![
            StyleCategory {
                id: "cat_trends".to_string(),
                cat_name: "Trending".to_string(),
                kind: Some(1),
                btnimg: Some(
                    "https://images.unsplash.com/photo-1516035069371-29a1b244cc32?w=100&h=100&fit=crop"
                        .to_string(),
                ),
                lst_style: generate_styles("trend", 6, "Trending", |style| style.is_gif = 0),
            },
            StyleCategory {
                id: "cat_ar".to_string(),
                cat_name: "AR Filters".to_string(),
                kind: Some(2),
                btnimg: Some(
                    "https://images.unsplash.com/photo-1633412802994-5c058f151b66?w=100&h=100&fit=crop"
                        .to_string(),
                ),
                lst_style: generate_styles("ar", 4, "AR Effect", |style| style.ar8 = 1),
            },
            StyleCategory {
                id: "cat_gif".to_string(),
                cat_name: "GIF Booth".to_string(),
                kind: Some(3),
                btnimg: Some(
                    "https://images.unsplash.com/photo-1595068994297-f58c73204986?w=100&h=100&fit=crop"
                        .to_string(),
                ),
                lst_style: generate_styles("gif", 5, "Motion", |style| {
                    style.is_gif = 1;
                    style.video_params = Some("fps=15".to_string());
                }),
            },
            StyleCategory {
                id: "cat_print".to_string(),
                cat_name: "Print Layouts".to_string(),
                kind: Some(1),
                btnimg: Some(
                    "https://images.unsplash.com/photo-1515378791036-0648a3ef77b2?w=100&h=100&fit=crop"
                        .to_string(),
                ),
                lst_style: generate_styles("print", 8, "Classic", |style| {
                    style.free_print_count = 2;
                }),
            },
        ])
    }
}

impl Default for MockConfigProvider {
    fn default() -> Self {
        Self::new(Duration::from_millis(800))
    }
}

/// Generates `count` styles named "`name_base` 1..=count" with ids "`prefix`_0..".
fn generate_styles(
    prefix: &str,
    count: usize,
    name_base: &str,
    customize: impl Fn(&mut StyleItem),
) -> Vec<StyleItem> {
    (0..count)
        .map(|idx| {
            let mut style = StyleItem {
                id: format!("{prefix}_{idx}"),
                style_name: Some(format!("{name_base} {}", idx + 1)),
                img_preview: format!("https://picsum.photos/seed/{prefix}_{idx}/400/600"),
                img_type: 1,
                cut_type: 1,
                is_client: rand::random::<bool>(),
                keep_bg_img: true,
                img_style_id: idx as i64,
                resolution: Some("1920x1080".to_string()),
                ratio_cut_status: 1,
                pre_img_status: 1,
                pre_window: 1,
                price: Some(if idx % 2 == 0 { 0 } else { 299 }),
                free_print_count: 1,
                regeneration_num: 3,
                ..StyleItem::default()
            };
            customize(&mut style);
            style
        })
        .collect()
}

#[async_trait]
impl ConfigProvider for MockConfigProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch_catalog(
        &self,
        credentials: &Credentials,
    ) -> Result<DeviceConfigResponse, FetchError> {
        credentials.validate()?;

        info!(
            device_code = %credentials.device_code,
            base_url = %credentials.base_url,
            "Fetching mock catalog"
        );

        if !self.delay.is_zero() {
            debug!(delay_ms = self.delay.as_millis(), "Simulating network delay");
            tokio::time::sleep(self.delay).await;
        }

        Ok(Self::generate_catalog())
    }
}
