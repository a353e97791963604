use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;
use web_sys::window;

use crate::lookbook::catalog::AlbumCatalog;
use crate::lookbook::navigation::NavigationModel;

/// Delay before every still-hidden `.fade-in` element is forced visible.
pub const REVEAL_FALLBACK_MS: u32 = 1500;
/// Fraction of an element that must intersect the viewport to reveal it.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const PARALLAX_FACTOR: f64 = 0.3;
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
/// Orbit swipes with this much vertical travel are left to the browser (scroll, pinch).
pub const ORBIT_VERTICAL_TOLERANCE_PX: f64 = 40.0;
pub const LONG_PRESS_MS: u32 = 2000;
pub const DRAG_THROTTLE_MS: f64 = 200.0;
/// Pointer travel from the press point before a press counts as a drag.
pub const DRAG_START_PX: f64 = 4.0;
/// Half-width of the centre band, as a fraction of the surface width, that never rotates.
pub const DRAG_DEAD_ZONE: f64 = 0.15;
pub const ORBIT_IMAGE_FRACTION: f64 = 0.35;
pub const FIRST_RENDER_DELAY_MS: u32 = 0;

const BUNDLED_CONFIG: &str = include_str!("../assets/lookbook.json");
const CONFIG_ELEMENT_ID: &str = "site-config";
const ASSET_BASE: &str = "/assets";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("album `{0}` is defined more than once")]
    DuplicateAlbum(String),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub navigation: NavigationModel,
    pub catalog: AlbumCatalog,
}

impl SiteConfig {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.catalog.validate()?;
        Ok(config)
    }

    pub fn bundled() -> Self {
        Self::parse(BUNDLED_CONFIG).unwrap_or_else(|e| {
            warn!("Bundled lookbook config rejected: {}", e);
            Self::default()
        })
    }

    /// Reads `<script id="site-config" type="application/json">` from the host
    /// page, falling back to the bundled catalog when it is absent or invalid.
    pub fn load() -> Self {
        let inline = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match inline {
            Some(raw) => match Self::parse(&raw) {
                Ok(config) => {
                    info!("Using inline site config ({} albums)", config.catalog.len());
                    config
                }
                Err(e) => {
                    warn!("{}, falling back to bundled config", e);
                    Self::bundled()
                }
            },
            None => {
                info!("Using bundled site config");
                Self::bundled()
            }
        }
    }
}

pub fn asset_url(image: &str) -> String {
    if image.starts_with('/') || image.starts_with("http://") || image.starts_with("https://") {
        image.to_string()
    } else {
        format!("{}/{}", ASSET_BASE, image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookbook::catalog::Album;

    #[test]
    fn bundled_config_parses() {
        let config = SiteConfig::parse(BUNDLED_CONFIG).expect("bundled config should parse");
        assert_eq!(config.navigation, NavigationModel::Carousel);
        assert_eq!(config.catalog.len(), 3);
        assert!(config.catalog.is_disabled("album2"));
        assert!(!config.catalog.is_disabled("album1"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = SiteConfig::parse("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn orbit_model_is_selectable() {
        let config = SiteConfig::parse(r#"{"navigation": "orbit"}"#).unwrap();
        assert_eq!(config.navigation, NavigationModel::Orbit);
    }

    #[test]
    fn rejects_broken_json() {
        assert!(matches!(SiteConfig::parse("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn rejects_duplicate_albums() {
        let raw = r#"{"catalog": {"albums": [
            {"id": "a", "images": ["1.jpg"]},
            {"id": "a", "images": ["2.jpg"]}
        ]}}"#;
        match SiteConfig::parse(raw) {
            Err(ConfigError::DuplicateAlbum(id)) => assert_eq!(id, "a"),
            other => panic!("expected duplicate album error, got {:?}", other),
        }
    }

    #[test]
    fn keeps_albums_without_images() {
        let raw = r#"{"catalog": {"albums": [
            {"id": "a", "images": ["1.jpg"]},
            {"id": "soon", "images": []}
        ], "disabled": ["soon"]}}"#;
        let config = SiteConfig::parse(raw).unwrap();
        assert_eq!(config.catalog.len(), 2);
        assert_eq!(config.catalog.get("soon").and_then(Album::cover), None);
    }

    #[test]
    fn asset_urls() {
        assert_eq!(asset_url("lookbook1.jpg"), "/assets/lookbook1.jpg");
        assert_eq!(asset_url("/img/a.jpg"), "/img/a.jpg");
        assert_eq!(asset_url("https://cdn.example.com/a.jpg"), "https://cdn.example.com/a.jpg");
    }
}
