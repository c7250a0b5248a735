//! Marker constants derived from the Mapbox static marker API and Maki defaults.
//! Keeping them in a single place makes it easier to tweak the defaults every icon starts from.

/// Base URL of the remote marker-rendering service. Pin tokens are appended verbatim.
pub const MARKER_API_URL: &str = "https://api.tiles.mapbox.com/v3/marker/";

/// Maki glyph drawn when a request leaves the icon unset.
pub const DEFAULT_ICON: &str = "circle-stroked";

/// Short-form hex color applied when a request leaves the color unset.
pub const DEFAULT_COLOR: &str = "#0a0";

/// Size code applied when a request leaves the size unset.
pub const DEFAULT_SIZE: &str = "m";

/// CSS class attached to every rendered marker image.
pub const MARKER_CLASS_NAME: &str = "maki-marker";

/// Small pin icon box in pixels.
pub const SMALL_ICON_SIZE: (u32, u32) = (20, 50);

/// Popup offset relative to the small pin anchor.
pub const SMALL_POPUP_ANCHOR: (i32, i32) = (0, -20);

/// Medium pin icon box in pixels.
pub const MEDIUM_ICON_SIZE: (u32, u32) = (30, 70);

/// Popup offset relative to the medium pin anchor.
pub const MEDIUM_POPUP_ANCHOR: (i32, i32) = (0, -30);

/// Large pin icon box in pixels.
pub const LARGE_ICON_SIZE: (u32, u32) = (36, 90);

/// Popup offset relative to the large pin anchor.
pub const LARGE_POPUP_ANCHOR: (i32, i32) = (0, -40);

/// Suffix of the standard-density marker image.
pub const STANDARD_SUFFIX: &str = ".png";

/// Suffix of the high-density (2×) marker image.
pub const RETINA_SUFFIX: &str = "@2x.png";
