//! Configuration for marker icon construction
//!
//! A single [`MakiConfig`] value holds the marker service URL, the defaults
//! applied to unset request fields and the pixel geometry of every size tier.
//! The process-wide instance is built once on first use and never mutated;
//! callers that need a different endpoint build their own value and pass it
//! to [`build_icon_with`](crate::icons::maki::build_icon_with).

use crate::{
    core::constants::{
        DEFAULT_COLOR, DEFAULT_ICON, DEFAULT_SIZE, LARGE_ICON_SIZE, LARGE_POPUP_ANCHOR,
        MARKER_API_URL, MARKER_CLASS_NAME, MEDIUM_ICON_SIZE, MEDIUM_POPUP_ANCHOR, SMALL_ICON_SIZE,
        SMALL_POPUP_ANCHOR,
    },
    icons::maki::SizeTier,
    Result,
};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static GLOBAL_CONFIG: Lazy<MakiConfig> = Lazy::new(MakiConfig::default);

/// Pixel geometry attached to a size tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TierGeometry {
    /// Icon box (width, height) in pixels
    pub icon_size: (u32, u32),
    /// Popup offset (x, y) relative to the icon anchor
    pub popup_anchor: (i32, i32),
}

impl TierGeometry {
    pub const fn new(icon_size: (u32, u32), popup_anchor: (i32, i32)) -> Self {
        Self {
            icon_size,
            popup_anchor,
        }
    }
}

/// Marker service endpoint, request defaults and per-tier geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MakiConfig {
    pub api_url: String,
    pub default_icon: Option<String>,
    pub default_color: Option<String>,
    pub default_size: String,
    pub class_name: String,
    pub small: TierGeometry,
    pub medium: TierGeometry,
    pub large: TierGeometry,
}

impl Default for MakiConfig {
    fn default() -> Self {
        Self {
            api_url: MARKER_API_URL.to_string(),
            default_icon: Some(DEFAULT_ICON.to_string()),
            default_color: Some(DEFAULT_COLOR.to_string()),
            default_size: DEFAULT_SIZE.to_string(),
            class_name: MARKER_CLASS_NAME.to_string(),
            small: TierGeometry::new(SMALL_ICON_SIZE, SMALL_POPUP_ANCHOR),
            medium: TierGeometry::new(MEDIUM_ICON_SIZE, MEDIUM_POPUP_ANCHOR),
            large: TierGeometry::new(LARGE_ICON_SIZE, LARGE_POPUP_ANCHOR),
        }
    }
}

impl MakiConfig {
    /// The shared configuration used by [`build_icon`](crate::icons::maki::build_icon).
    pub fn global() -> &'static MakiConfig {
        &GLOBAL_CONFIG
    }

    /// Parse a configuration from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_tier(mut self, tier: SizeTier, geometry: TierGeometry) -> Self {
        match tier {
            SizeTier::Small => self.small = geometry,
            SizeTier::Medium => self.medium = geometry,
            SizeTier::Large => self.large = geometry,
        }
        self
    }

    /// Resolve the geometry of a size tier
    pub fn geometry(&self, tier: SizeTier) -> TierGeometry {
        match tier {
            SizeTier::Small => self.small,
            SizeTier::Medium => self.medium,
            SizeTier::Large => self.large,
        }
    }
}
