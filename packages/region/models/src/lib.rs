#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Core geographic and region data model types.
//!
//! These types form the canonical data model shared across the region map
//! workspace: geocoded places as returned by provider adapters, derived
//! region classifications, boundary rings, and map camera commands. All of
//! them are plain immutable values; derivation logic lives in the
//! `region_map_region` and `region_map_camera` crates.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A geographic coordinate in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatLng {
    /// Latitude in degrees, valid range [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, valid range [-180, 180].
    pub lng: f64,
}

impl LatLng {
    /// Creates a new coordinate.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns `true` if both components are within their valid ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A provider-suggested rectangular display bound for a place.
///
/// Invariant: `northeast.lat >= southwest.lat`. Longitude may wrap at the
/// antimeridian (`southwest.lng > northeast.lng`), which [`Self::lng_span`]
/// corrects for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    /// Northeast corner.
    pub northeast: LatLng,
    /// Southwest corner.
    pub southwest: LatLng,
}

impl Viewport {
    /// Creates a new viewport from its corners.
    #[must_use]
    pub const fn new(northeast: LatLng, southwest: LatLng) -> Self {
        Self {
            northeast,
            southwest,
        }
    }

    /// Midpoint of the box.
    ///
    /// Computed as the naive coordinate mean: unlike [`Self::lng_span`],
    /// this does not wrap-correct, so for a box crossing the
    /// antimeridian the midpoint lands on the far side of the globe.
    #[must_use]
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.northeast.lat + self.southwest.lat) / 2.0,
            (self.northeast.lng + self.southwest.lng) / 2.0,
        )
    }

    /// Latitude extent in degrees.
    #[must_use]
    pub fn lat_span(&self) -> f64 {
        self.northeast.lat - self.southwest.lat
    }

    /// Longitude extent in degrees, corrected for antimeridian wrap.
    ///
    /// A negative raw difference means the box crosses the antimeridian and
    /// gets 360 added. A wrapped difference of exactly 0 (southwest at
    /// +180, northeast at -180) is the whole-world span and returns 360. A
    /// raw difference of 0 without wrap is a degenerate box and returns 0.
    #[must_use]
    pub fn lng_span(&self) -> f64 {
        let diff = self.northeast.lng - self.southwest.lng;
        if diff < 0.0 {
            let wrapped = diff + 360.0;
            if wrapped == 0.0 { 360.0 } else { wrapped }
        } else {
            diff
        }
    }

    /// Returns `true` if the box has no extent on either axis.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.lat_span() == 0.0 && self.lng_span() == 0.0
    }
}

/// One typed fragment of a geocoded address.
///
/// Produced entirely by the geocoding provider adapters; the `types` tags
/// use the Google-style vocabulary (`"country"`,
/// `"administrative_area_level_1"`, `"locality"`, ...) regardless of which
/// provider resolved the place, so downstream classification is
/// provider-agnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressComponent {
    /// Full human-readable name (e.g. `"California"`).
    pub long_name: String,
    /// Abbreviated form (e.g. `"CA"`).
    pub short_name: String,
    /// Semantic tags for this component.
    pub types: Vec<String>,
}

impl AddressComponent {
    /// Returns `true` if this component carries the given type tag.
    #[must_use]
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }
}

/// One resolved place, created fresh per search and never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodedPlace {
    /// Opaque provider-assigned identifier, unique per place.
    pub place_id: String,
    /// Canonical formatted address.
    pub formatted_address: String,
    /// The place's canonical center point.
    pub location: LatLng,
    /// Provider-suggested display bounds; absent for point-like places.
    pub viewport: Option<Viewport>,
    /// Typed address fragments, most specific first.
    pub address_components: Vec<AddressComponent>,
    /// Type tags for the place itself (e.g. `"political"`).
    pub types: Vec<String>,
}

/// The coarsest administrative level detected for a geocoded place.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum RegionType {
    /// A country.
    Country,
    /// A first-level administrative area (US state, province).
    State,
    /// A locality (city, town).
    City,
    /// A postal code area.
    PostalCode,
    /// No recognized administrative tag.
    Unknown,
}

/// Derived classification of a geocoded place's primary region.
///
/// Computed deterministically from the place's address components; never
/// mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionClassification {
    /// Detected administrative level.
    pub region_type: RegionType,
    /// Long name of the matching component, or empty if none matched.
    pub region_name: String,
}

impl RegionClassification {
    /// The classification for a place with no recognized tags.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            region_type: RegionType::Unknown,
            region_name: String::new(),
        }
    }
}

/// A closed ring of points describing a region's extent.
///
/// Invariant: always exactly 5 points, with the first and last identical
/// (explicit closure) — four box corners plus the repeated first corner.
/// Construction is in `region_map_region::boundary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryPolygon {
    /// Ring points in order, first == last.
    pub ring: Vec<LatLng>,
}

impl BoundaryPolygon {
    /// Returns `true` if the ring's first and last points are identical.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.ring.first(), self.ring.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }
}

/// A camera command for an interactive map widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraCommand {
    /// Where to point the camera.
    pub center: LatLng,
    /// Zoom level; fractional values are valid.
    pub zoom: f64,
    /// Whether the widget should animate the transition.
    pub animate: bool,
}

/// A lightweight autocomplete prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Human-readable suggestion text.
    pub description: String,
    /// Provider place identifier, usable for a details lookup.
    pub place_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lat_lng_validity() {
        assert!(LatLng::new(37.7749, -122.4194).is_valid());
        assert!(LatLng::new(90.0, 180.0).is_valid());
        assert!(!LatLng::new(90.1, 0.0).is_valid());
        assert!(!LatLng::new(0.0, -180.5).is_valid());
    }

    #[test]
    fn viewport_center_is_midpoint() {
        let viewport = Viewport::new(LatLng::new(42.0, -71.0), LatLng::new(41.0, -73.0));
        let center = viewport.center();
        assert!((center.lat - 41.5).abs() < 1e-12);
        assert!((center.lng - -72.0).abs() < 1e-12);
    }

    #[test]
    fn center_does_not_wrap_correct() {
        // Box from 170°E across to -170°E; the naive mean sits at 0°,
        // the far side of the globe. Documented limitation.
        let viewport = Viewport::new(LatLng::new(10.0, -170.0), LatLng::new(-10.0, 170.0));
        assert!((viewport.center().lng - 0.0).abs() < 1e-12);
    }

    #[test]
    fn lng_span_wraps_at_antimeridian() {
        // Box from 170°E across to -170°E (20° wide).
        let viewport = Viewport::new(LatLng::new(10.0, -170.0), LatLng::new(-10.0, 170.0));
        assert!((viewport.lng_span() - 20.0).abs() < 1e-12);
    }

    #[test]
    fn lng_span_zero_after_wrap_is_whole_world() {
        let viewport = Viewport::new(LatLng::new(10.0, -180.0), LatLng::new(-10.0, 180.0));
        assert!((viewport.lng_span() - 360.0).abs() < 1e-12);
    }

    #[test]
    fn lng_span_zero_without_wrap_is_degenerate() {
        let viewport = Viewport::new(LatLng::new(1.0, 1.0), LatLng::new(1.0, 1.0));
        assert!(viewport.lng_span().abs() < 1e-12);
        assert!(viewport.is_degenerate());
    }

    #[test]
    fn component_type_check() {
        let component = AddressComponent {
            long_name: "California".to_string(),
            short_name: "CA".to_string(),
            types: vec![
                "administrative_area_level_1".to_string(),
                "political".to_string(),
            ],
        };
        assert!(component.has_type("administrative_area_level_1"));
        assert!(!component.has_type("locality"));
    }

    #[test]
    fn region_type_string_forms() {
        assert_eq!(RegionType::PostalCode.to_string(), "postalCode");
        assert_eq!(RegionType::Country.as_ref(), "country");
        assert_eq!(
            "state".parse::<RegionType>().expect("parses"),
            RegionType::State
        );
    }

    #[test]
    fn serde_uses_camel_case() {
        let classification = RegionClassification {
            region_type: RegionType::PostalCode,
            region_name: "94103".to_string(),
        };
        let json = serde_json::to_value(&classification).expect("serializes");
        assert_eq!(json["regionType"], "postalCode");
        assert_eq!(json["regionName"], "94103");
    }

    #[test]
    fn empty_ring_is_not_closed() {
        let polygon = BoundaryPolygon { ring: Vec::new() };
        assert!(!polygon.is_closed());
    }
}
