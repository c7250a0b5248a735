//! # Maki Markers
//!
//! Marker icons for Leaflet-style maps, drawn by the Mapbox marker service
//! with Maki glyphs.
//!
//! Given an icon name, a color and a size tier, the builder produces the
//! standard and retina image URLs of the pin plus the pixel geometry of the
//! tier. No image is ever fetched here; the host map loads the URLs.
//!
//! ```
//! use maki_markers::{build_icon, IconRequest};
//!
//! let icon = build_icon(
//!     &IconRequest::new().with_icon("rocket").with_color("#b0b").with_size("m"),
//! );
//! assert!(icon.icon_url.ends_with("pin-m-rocket+b0b.png"));
//! assert!(icon.icon_retina_url.ends_with("pin-m-rocket+b0b@2x.png"));
//! ```

pub mod core;
pub mod icons;
pub mod layers;
pub mod prelude;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{MakiConfig, TierGeometry},
    geo::{LatLng, LatLngBounds},
};

pub use crate::icons::{
    catalog::{is_known_icon, ICONS},
    maki::{
        build_icon, build_icon_with, normalize_color, pin_token, validate_request,
        IconDescriptor, IconRequest, SizeTier,
    },
};

pub use crate::layers::marker::Marker;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MarkerError>;

/// Common error types
///
/// `InvalidSizeTier`, `InvalidColorFormat` and `UnknownIcon` are reported as
/// soft warnings by [`validate_request`]; the builder itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum MarkerError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid size tier: {0:?} (expected \"s\", \"m\" or \"l\")")]
    InvalidSizeTier(String),

    #[error("Invalid color format: {0:?} (expected 3 or 6 hex digits)")]
    InvalidColorFormat(String),

    #[error("Unknown Maki icon: {0:?}")]
    UnknownIcon(String),
}

/// Error type alias for convenience
pub type Error = MarkerError;

/// Route `log` output to stderr, filtered by `RUST_LOG`. Safe to call more than once.
#[cfg(feature = "debug")]
pub fn init_debug_logging() {
    let _ = env_logger::builder().try_init();
}
