//! Maki glyph names accepted by the marker service.
//!
//! The builder never consults this list; it exists for callers that want to
//! reject or flag unknown names before building.

/// Available Maki icons
pub const ICONS: &[&str] = &[
    "airfield", "airport", "alcohol-shop", "america-football", "art-gallery", "bakery", "bank",
    "bar", "baseball", "basketball", "beer", "bicycle", "building", "bus", "cafe", "camera",
    "campsite", "car", "cemetery", "chemist", "cinema", "circle-stroked", "circle", "city",
    "clothing-store", "college", "commercial", "cricket", "cross", "dam", "danger", "disability",
    "dog-park", "embassy", "emergency-telephone", "entrance", "farm", "fast-food", "ferry",
    "fire-station", "fuel", "garden", "golf", "grocery", "hairdresser", "harbor", "heart",
    "heliport", "hospital", "industrial", "land-use", "laundry", "library", "lighthouse",
    "lodging", "logging", "london-underground", "marker-stroked", "marker", "minefield",
    "mobilephone", "monument", "museum", "music", "oil-well", "park2", "park", "parking-garage",
    "parking", "pharmacy", "pitch", "place-of-worship", "playground", "police", "polling-place",
    "post", "prison", "rail-above", "rail-light", "rail-metro", "rail-underground", "rail",
    "religious-christian", "religious-jewish", "religious-muslim", "restaurant", "roadblock",
    "rocket", "school", "scooter", "shop", "skiing", "slaughterhouse", "soccer", "square-stroked",
    "square", "star-stroked", "star", "suitcase", "swimming", "telephone", "tennis", "theatre",
    "toilets", "town-hall", "town", "triangle-stroked", "triangle", "village", "warehouse",
    "waste-basket", "water", "wetland", "zoo",
];

/// Returns true if `name` is a known Maki icon. Matching is exact and case-sensitive.
pub fn is_known_icon(name: &str) -> bool {
    ICONS.contains(&name)
}
