//! Prelude module for common maki-markers types and traits
//!
//! This module re-exports the most commonly used types and functions
//! for easy importing with `use maki_markers::prelude::*;`

pub use crate::core::{
    config::{MakiConfig, TierGeometry},
    geo::{LatLng, LatLngBounds},
};

pub use crate::icons::{
    catalog::{is_known_icon, ICONS},
    maki::{build_icon, build_icon_with, validate_request, IconDescriptor, IconRequest, SizeTier},
};

pub use crate::layers::marker::Marker;

pub use crate::{Error as MarkerError, Result};
