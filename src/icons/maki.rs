//! Maki marker icon construction
//!
//! Builds the pin token understood by the marker service
//! (`pin-<size>[-<icon>][+<color>]`), the standard and retina image URLs for
//! it, and the pixel geometry of the requested size tier.
//!
//! Construction is lenient: unknown size codes fall back to medium and icon
//! names and colors are passed through untouched. Use [`validate_request`] to
//! surface those cases as warnings without changing the result.

use crate::{
    core::{
        config::MakiConfig,
        constants::{RETINA_SUFFIX, STANDARD_SUFFIX},
    },
    icons::catalog::is_known_icon,
    MarkerError, Result,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Marker size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SizeTier {
    #[serde(rename = "s")]
    Small,
    #[default]
    #[serde(rename = "m")]
    Medium,
    #[serde(rename = "l")]
    Large,
}

impl SizeTier {
    /// Code used in the pin token
    pub fn code(&self) -> &'static str {
        match self {
            SizeTier::Small => "s",
            SizeTier::Medium => "m",
            SizeTier::Large => "l",
        }
    }

    /// Resolve a raw size code. Anything other than `"s"` or `"l"` is medium.
    pub fn resolve(code: Option<&str>) -> Self {
        match code {
            Some("s") => SizeTier::Small,
            Some("l") => SizeTier::Large,
            _ => SizeTier::Medium,
        }
    }
}

impl FromStr for SizeTier {
    type Err = MarkerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "s" => Ok(SizeTier::Small),
            "m" => Ok(SizeTier::Medium),
            "l" => Ok(SizeTier::Large),
            other => Err(MarkerError::InvalidSizeTier(other.to_string())),
        }
    }
}

impl std::fmt::Display for SizeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

fn explicit_null<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Icon options as accepted from callers.
///
/// `icon` and `color` are tri-state: `None` takes the default of the
/// configuration the icon is built against, `Some(None)` omits the segment
/// from the pin token and `Some(Some(_))` sets it. In JSON a missing key is
/// unset and an explicit `null` omits. An unset `size` takes the configured
/// default size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconRequest {
    #[serde(
        default,
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub icon: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl IconRequest {
    /// A request with every field unset, built with the configured defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// A request with neither glyph nor color: a plain pin
    pub fn bare() -> Self {
        Self::new().without_icon().without_color()
    }

    /// Parse the options object used by the Leaflet plugin,
    /// e.g. `{"icon": "rocket", "color": "#b0b", "size": "m"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(Some(icon.into()));
        self
    }

    pub fn without_icon(mut self) -> Self {
        self.icon = Some(None);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(Some(color.into()));
        self
    }

    pub fn without_color(mut self) -> Self {
        self.color = Some(None);
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_tier(self, tier: SizeTier) -> Self {
        self.with_size(tier.code())
    }

    /// Fill every unset field from `config`. The result has no unset fields.
    pub fn merged(&self, config: &MakiConfig) -> IconRequest {
        IconRequest {
            icon: Some(self.icon.clone().unwrap_or_else(|| config.default_icon.clone())),
            color: Some(self.color.clone().unwrap_or_else(|| config.default_color.clone())),
            size: Some(self.size.clone().unwrap_or_else(|| config.default_size.clone())),
        }
    }

    /// Size tier this request resolves to under `config`
    pub fn tier(&self, config: &MakiConfig) -> SizeTier {
        SizeTier::resolve(Some(self.size.as_deref().unwrap_or(config.default_size.as_str())))
    }
}

/// Everything a map needs to display a marker image
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconDescriptor {
    pub pin: String,
    pub icon_url: String,
    pub icon_retina_url: String,
    pub icon_size: (u32, u32),
    pub popup_anchor: (i32, i32),
    pub size: SizeTier,
    pub icon: Option<String>,
    /// Color without its leading `#`
    pub color: Option<String>,
    pub class_name: String,
}

impl IconDescriptor {
    /// Options object for `L.icon`, mirroring what the Leaflet plugin sets.
    pub fn leaflet_options(&self) -> serde_json::Value {
        serde_json::json!({
            "iconUrl": self.icon_url,
            "iconRetinaUrl": self.icon_retina_url,
            "iconSize": [self.icon_size.0, self.icon_size.1],
            "popupAnchor": [self.popup_anchor.0, self.popup_anchor.1],
            "className": self.class_name,
            "shadowUrl": null,
            "shadowSize": null,
            "shadowAnchor": null,
            "icon": self.icon,
            "color": self.color,
            "size": self.size.code(),
        })
    }

    /// `L.icon({...});` snippet for generated map pages
    pub fn leaflet_script(&self) -> String {
        format!("L.icon({});", self.leaflet_options())
    }
}

/// Strip at most one leading `#`
pub fn normalize_color(color: &str) -> &str {
    color.strip_prefix('#').unwrap_or(color)
}

/// Build the pin token, e.g. `pin-m-rocket+b0b`
pub fn pin_token(tier: SizeTier, icon: Option<&str>, color: Option<&str>) -> String {
    let mut pin = format!("pin-{}", tier.code());
    if let Some(icon) = icon {
        pin.push('-');
        pin.push_str(icon);
    }
    if let Some(color) = color {
        pin.push('+');
        pin.push_str(normalize_color(color));
    }
    pin
}

/// Build an icon against the process-wide configuration
pub fn build_icon(request: &IconRequest) -> IconDescriptor {
    build_icon_with(MakiConfig::global(), request)
}

/// Build an icon against an explicit configuration.
///
/// Unset request fields take `config`'s defaults before the pin is assembled.
pub fn build_icon_with(config: &MakiConfig, request: &IconRequest) -> IconDescriptor {
    let size = request.tier(config);
    let geometry = config.geometry(size);
    let icon = request.icon.clone().unwrap_or_else(|| config.default_icon.clone());
    let color = request
        .color
        .clone()
        .unwrap_or_else(|| config.default_color.clone());
    let pin = pin_token(size, icon.as_deref(), color.as_deref());

    IconDescriptor {
        icon_url: format!("{}{}{}", config.api_url, pin, STANDARD_SUFFIX),
        icon_retina_url: format!("{}{}{}", config.api_url, pin, RETINA_SUFFIX),
        pin,
        icon_size: geometry.icon_size,
        popup_anchor: geometry.popup_anchor,
        size,
        icon,
        color: color.as_deref().map(|c| normalize_color(c).to_string()),
        class_name: config.class_name.clone(),
    }
}

fn is_hex_color(color: &str) -> bool {
    matches!(color.len(), 3 | 6) && color.chars().all(|c| c.is_ascii_hexdigit())
}

/// Report request fields the builder will silently tolerate.
///
/// The returned warnings never affect [`build_icon`]; an empty list means
/// the request is fully well-formed. Unset fields are not checked.
pub fn validate_request(request: &IconRequest) -> Vec<MarkerError> {
    let mut warnings = Vec::new();

    if let Some(size) = request.size.as_deref() {
        if let Err(e) = size.parse::<SizeTier>() {
            warnings.push(e);
        }
    }

    if let Some(Some(icon)) = request.icon.as_ref() {
        if !is_known_icon(icon) {
            warnings.push(MarkerError::UnknownIcon(icon.to_string()));
        }
    }

    if let Some(Some(color)) = request.color.as_ref() {
        if !is_hex_color(normalize_color(color)) {
            warnings.push(MarkerError::InvalidColorFormat(color.to_string()));
        }
    }

    for warning in &warnings {
        log::warn!("Lenient marker request: {}", warning);
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(icon: Option<&str>, color: Option<&str>, size: Option<&str>) -> IconRequest {
        IconRequest {
            icon: Some(icon.map(str::to_string)),
            color: Some(color.map(str::to_string)),
            size: size.map(str::to_string),
        }
    }

    #[test]
    fn test_rocket_example() {
        let icon = build_icon(&request(Some("rocket"), Some("#b0b"), Some("m")));

        assert_eq!(icon.pin, "pin-m-rocket+b0b");
        assert!(icon.icon_url.ends_with("pin-m-rocket+b0b.png"));
        assert!(icon.icon_retina_url.ends_with("pin-m-rocket+b0b@2x.png"));
        assert_eq!(
            icon.icon_url,
            "https://api.tiles.mapbox.com/v3/marker/pin-m-rocket+b0b.png"
        );
    }

    #[test]
    fn test_unknown_sizes_fall_back_to_medium() {
        for size in [None, Some("m"), Some("M"), Some("S"), Some("large"), Some(""), Some("xl")] {
            let icon = build_icon(&request(Some("bar"), None, size));
            assert_eq!(icon.size, SizeTier::Medium, "size {:?}", size);
            assert_eq!(icon.icon_size, (30, 70));
            assert_eq!(icon.popup_anchor, (0, -30));
            assert!(icon.pin.starts_with("pin-m-"));
        }
    }

    #[test]
    fn test_small_and_large_geometry() {
        let small = build_icon(&request(None, None, Some("s")));
        assert_eq!(small.icon_size, (20, 50));
        assert_eq!(small.popup_anchor, (0, -20));
        assert_eq!(small.pin, "pin-s");

        let large = build_icon(&request(None, None, Some("l")));
        assert_eq!(large.icon_size, (36, 90));
        assert_eq!(large.popup_anchor, (0, -40));
        assert_eq!(large.pin, "pin-l");
    }

    #[test]
    fn test_color_strips_single_hash() {
        assert_eq!(build_icon(&request(None, Some("#ffffff"), None)).pin, "pin-m+ffffff");
        assert_eq!(build_icon(&request(None, Some("ffffff"), None)).pin, "pin-m+ffffff");
        assert_eq!(build_icon(&request(None, Some("##fff"), None)).pin, "pin-m+#fff");
    }

    #[test]
    fn test_malformed_color_passes_through() {
        let icon = build_icon(&request(None, Some("#zz-top"), Some("s")));
        assert_eq!(icon.pin, "pin-s+zz-top");
        assert_eq!(icon.color.as_deref(), Some("zz-top"));
    }

    #[test]
    fn test_icon_omitted() {
        let icon = build_icon(&request(None, Some("#000"), Some("l")));

        assert_eq!(icon.pin, "pin-l+000");
        assert!(icon.icon_url.ends_with("/pin-l+000.png"));
        assert!(icon.icon_retina_url.ends_with("/pin-l+000@2x.png"));
        assert_eq!(icon.icon, None);
    }

    #[test]
    fn test_default_request_uses_configured_defaults() {
        let icon = build_icon(&IconRequest::default());

        assert_eq!(icon.pin, "pin-m-circle-stroked+0a0");
        assert_eq!(icon.class_name, "maki-marker");
        assert_eq!(icon.color.as_deref(), Some("0a0"));
    }

    #[test]
    fn test_bare_request() {
        assert_eq!(build_icon(&IconRequest::bare()).pin, "pin-m");
    }

    #[test]
    fn test_build_is_pure() {
        let req = request(Some("cafe"), Some("#123456"), Some("s"));
        assert_eq!(build_icon(&req), build_icon(&req));
    }

    #[test]
    fn test_custom_config_defaults_reach_pin() {
        let config = MakiConfig::from_json(
            r##"{"default_icon": "zoo", "default_color": "#123", "default_size": "l"}"##,
        )
        .unwrap();

        let from_default = build_icon_with(&config, &IconRequest::default());
        assert_eq!(from_default.pin, "pin-l-zoo+123");
        assert_eq!(from_default.icon_size, (36, 90));

        let from_json = build_icon_with(&config, &IconRequest::from_json("{}").unwrap());
        assert_eq!(from_json.pin, "pin-l-zoo+123");

        let nulled = IconRequest::from_json(r#"{"icon": null, "size": "s"}"#).unwrap();
        assert_eq!(build_icon_with(&config, &nulled).pin, "pin-s+123");

        assert_eq!(build_icon(&IconRequest::default()).pin, "pin-m-circle-stroked+0a0");
    }

    #[test]
    fn test_merged_fills_only_unset_fields() {
        let config = MakiConfig {
            default_icon: Some("zoo".to_string()),
            default_color: None,
            ..MakiConfig::default()
        };
        let merged = IconRequest::new().with_color("#fff").merged(&config);

        assert_eq!(merged.icon, Some(Some("zoo".to_string())));
        assert_eq!(merged.color, Some(Some("#fff".to_string())));
        assert_eq!(merged.size.as_deref(), Some("m"));
        assert_eq!(
            build_icon_with(&config, &merged),
            build_icon_with(&config, &IconRequest::new().with_color("#fff"))
        );
        assert_eq!(build_icon_with(&config, &IconRequest::new()).pin, "pin-m-zoo");
    }

    #[test]
    fn test_custom_api_url() {
        let config = MakiConfig::default().with_api_url("http://localhost:9000/m/");
        let icon = build_icon_with(&config, &request(Some("zoo"), None, Some("l")));

        assert_eq!(icon.icon_url, "http://localhost:9000/m/pin-l-zoo.png");
        assert_eq!(icon.icon_retina_url, "http://localhost:9000/m/pin-l-zoo@2x.png");
    }

    #[test]
    fn test_size_tier_parsing() {
        assert_eq!("s".parse::<SizeTier>().unwrap(), SizeTier::Small);
        assert_eq!("m".parse::<SizeTier>().unwrap(), SizeTier::Medium);
        assert_eq!("l".parse::<SizeTier>().unwrap(), SizeTier::Large);
        assert!(matches!(
            "huge".parse::<SizeTier>(),
            Err(MarkerError::InvalidSizeTier(ref s)) if s == "huge"
        ));
        assert_eq!(SizeTier::Large.to_string(), "l");
        assert_eq!(SizeTier::default(), SizeTier::Medium);
    }

    #[test]
    fn test_request_builder_chain() {
        let req = IconRequest::new()
            .with_icon("ferry")
            .without_color()
            .with_tier(SizeTier::Small);

        assert_eq!(req.tier(MakiConfig::global()), SizeTier::Small);
        assert_eq!(build_icon(&req).pin, "pin-s-ferry");
        assert_eq!(build_icon(&req.clone().without_icon()).pin, "pin-s");
    }

    #[test]
    fn test_request_from_json_missing_vs_null() {
        let missing = IconRequest::from_json(r#"{"icon": "rocket"}"#).unwrap();
        assert_eq!(missing.icon, Some(Some("rocket".to_string())));
        assert_eq!(missing.color, None);
        assert_eq!(missing.size, None);
        assert_eq!(build_icon(&missing).pin, "pin-m-rocket+0a0");

        let nulled = IconRequest::from_json(r##"{"icon": null, "color": "#000", "size": "l"}"##)
            .unwrap();
        assert_eq!(nulled.icon, Some(None));
        assert_eq!(build_icon(&nulled).pin, "pin-l+000");

        assert!(IconRequest::from_json(r#"{"icon": 7}"#).is_err());
    }

    #[test]
    fn test_validate_clean_request() {
        let req = request(Some("rocket"), Some("#b0b"), Some("m"));
        assert!(validate_request(&req).is_empty());
        assert!(validate_request(&IconRequest::bare()).is_empty());
    }

    #[test]
    fn test_validate_reports_without_changing_build() {
        let req = request(Some("spaceship"), Some("#12345"), Some("xl"));
        let warnings = validate_request(&req);

        assert_eq!(warnings.len(), 3);
        assert!(matches!(warnings[0], MarkerError::InvalidSizeTier(ref s) if s == "xl"));
        assert!(matches!(warnings[1], MarkerError::UnknownIcon(ref s) if s == "spaceship"));
        assert!(matches!(warnings[2], MarkerError::InvalidColorFormat(ref s) if s == "#12345"));

        assert_eq!(build_icon(&req).pin, "pin-m-spaceship+12345");
    }

    #[test]
    fn test_leaflet_options() {
        let icon = build_icon(&request(Some("rocket"), Some("#b0b"), Some("s")));
        let options = icon.leaflet_options();

        assert_eq!(options["iconUrl"], icon.icon_url.as_str());
        assert_eq!(options["iconRetinaUrl"], icon.icon_retina_url.as_str());
        assert_eq!(options["iconSize"], serde_json::json!([20, 50]));
        assert_eq!(options["popupAnchor"], serde_json::json!([0, -20]));
        assert_eq!(options["className"], "maki-marker");
        assert!(options["shadowUrl"].is_null());
        assert_eq!(options["color"], "b0b");
        assert_eq!(options["size"], "s");
    }

    #[test]
    fn test_leaflet_script() {
        let script = build_icon(&IconRequest::bare()).leaflet_script();

        assert!(script.starts_with("L.icon({"));
        assert!(script.ends_with("});"));
        assert!(script.contains("pin-m@2x.png"));
    }
}
