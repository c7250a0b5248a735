use crate::{
    core::{
        config::MakiConfig,
        geo::{LatLng, LatLngBounds},
    },
    icons::maki::{build_icon_with, IconDescriptor, IconRequest},
    Result,
};

/// A map marker carrying a built Maki icon.
///
/// Placement, dragging and image loading belong to the host map; this value
/// only holds what the host needs to draw the marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    id: String,
    position: LatLng,
    popup_text: Option<String>,
    icon: IconDescriptor,
}

impl Marker {
    pub fn new(id: String, position: LatLng) -> Self {
        Self {
            id,
            position,
            popup_text: None,
            icon: build_icon_with(MakiConfig::global(), &IconRequest::default()),
        }
    }

    pub fn with_popup(mut self, text: String) -> Self {
        self.popup_text = Some(text);
        self
    }

    pub fn with_icon(mut self, request: &IconRequest) -> Self {
        self.set_icon(request);
        self
    }

    /// Attach an icon that was already built, e.g. against a proxy endpoint
    pub fn with_icon_descriptor(mut self, icon: IconDescriptor) -> Self {
        self.icon = icon;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn popup_text(&self) -> Option<&str> {
        self.popup_text.as_deref()
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn set_position(&mut self, position: LatLng) {
        self.position = position;
    }

    pub fn icon(&self) -> &IconDescriptor {
        &self.icon
    }

    pub fn set_icon(&mut self, request: &IconRequest) {
        self.set_icon_with(MakiConfig::global(), request);
    }

    pub fn set_icon_with(&mut self, config: &MakiConfig, request: &IconRequest) {
        self.icon = build_icon_with(config, request);
        log::debug!("Marker {} icon set to {}", self.id, self.icon.icon_url);
    }

    pub fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "position": {
                "lat": self.position.lat,
                "lng": self.position.lng
            },
            "popup": self.popup_text,
            "icon": self.icon.leaflet_options()
        })
    }

    /// Apply `position`, `popup` and `icon` keys. The `icon` value is a
    /// request object; keys missing from it take the configured defaults.
    /// Nothing is applied unless every present key parses.
    pub fn set_options(&mut self, options: serde_json::Value) -> Result<()> {
        self.set_options_with(MakiConfig::global(), options)
    }

    /// Like [`set_options`](Self::set_options), building the icon against `config`.
    pub fn set_options_with(
        &mut self,
        config: &MakiConfig,
        options: serde_json::Value,
    ) -> Result<()> {
        let position: Option<LatLng> = options
            .get("position")
            .map(|v| serde_json::from_value(v.clone()))
            .transpose()?;
        let popup: Option<Option<String>> = options
            .get("popup")
            .map(|v| serde_json::from_value(v.clone()))
            .transpose()?;
        let request: Option<IconRequest> = options
            .get("icon")
            .map(|v| serde_json::from_value(v.clone()))
            .transpose()?;

        if let Some(position) = position {
            self.position = position;
        }
        if let Some(popup) = popup {
            self.popup_text = popup;
        }
        if let Some(request) = request {
            self.set_icon_with(config, &request);
        }
        Ok(())
    }

    pub fn bounds(&self) -> Option<LatLngBounds> {
        Some(LatLngBounds::from_point(self.position))
    }
}
