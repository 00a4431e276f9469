//! Boundary ring synthesis for geocoded places.
//!
//! Providers rarely return an actual administrative polygon, so the map
//! overlay is synthesized as a rectangular ring. When the provider
//! supplied a viewport, the ring is its four corners (exact path). When
//! it did not — point-like results — the ring is a square around the
//! place's center, sized by administrative level (approximate path).
//!
//! The approximate path is a heuristic stand-in for a true administrative
//! boundary, not a guarantee of administrative correctness.

use region_map_region_models::{
    BoundaryPolygon, GeocodedPlace, LatLng, RegionClassification, RegionType, Viewport,
};

/// Heuristic half-width in degrees for a level's approximate box.
#[must_use]
pub const fn heuristic_offset(region_type: RegionType) -> f64 {
    match region_type {
        RegionType::Country => 2.0,
        RegionType::State => 1.0,
        RegionType::City | RegionType::PostalCode | RegionType::Unknown => 0.5,
    }
}

/// Synthesizes a closed boundary ring for a geocoded place.
///
/// An explicit provider viewport always takes precedence over the
/// heuristic box. Never fails; always produces exactly 5 points with the
/// first repeated as the last (explicit closure).
#[must_use]
pub fn synthesize(
    place: &GeocodedPlace,
    classification: &RegionClassification,
) -> BoundaryPolygon {
    place.viewport.as_ref().map_or_else(
        || {
            let offset = heuristic_offset(classification.region_type);
            let center = place.location;
            ring_from_corners(
                LatLng::new(center.lat + offset, center.lng + offset),
                LatLng::new(center.lat - offset, center.lng - offset),
            )
        },
        ring_from_viewport,
    )
}

/// Builds the exact ring from a provider viewport's corners.
#[must_use]
pub fn ring_from_viewport(viewport: &Viewport) -> BoundaryPolygon {
    ring_from_corners(viewport.northeast, viewport.southwest)
}

/// Closed 5-point ring from northeast and southwest corners:
/// NE, (NE.lat, SW.lng), SW, (SW.lat, NE.lng), NE.
fn ring_from_corners(northeast: LatLng, southwest: LatLng) -> BoundaryPolygon {
    BoundaryPolygon {
        ring: vec![
            northeast,
            LatLng::new(northeast.lat, southwest.lng),
            southwest,
            LatLng::new(southwest.lat, northeast.lng),
            northeast,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(location: LatLng, viewport: Option<Viewport>) -> GeocodedPlace {
        GeocodedPlace {
            place_id: "test-place".to_string(),
            formatted_address: "Test Place".to_string(),
            location,
            viewport,
            address_components: Vec::new(),
            types: Vec::new(),
        }
    }

    fn classification(region_type: RegionType) -> RegionClassification {
        RegionClassification {
            region_type,
            region_name: String::new(),
        }
    }

    #[test]
    fn viewport_produces_exact_corners() {
        // US-state-shaped viewport; the explicit viewport must beat the
        // 1.0° state heuristic.
        let viewport = Viewport::new(LatLng::new(42.0, -71.0), LatLng::new(41.0, -73.0));
        let subject = place(LatLng::new(41.5, -72.0), Some(viewport));
        let polygon = synthesize(&subject, &classification(RegionType::State));

        assert_eq!(polygon.ring.len(), 5);
        assert_eq!(polygon.ring[0], LatLng::new(42.0, -71.0));
        assert_eq!(polygon.ring[1], LatLng::new(42.0, -73.0));
        assert_eq!(polygon.ring[2], LatLng::new(41.0, -73.0));
        assert_eq!(polygon.ring[3], LatLng::new(41.0, -71.0));
        assert_eq!(polygon.ring[4], polygon.ring[0]);
    }

    #[test]
    fn country_heuristic_offsets_by_two_degrees() {
        let center = LatLng::new(37.7749, -122.4194);
        let subject = place(center, None);
        let polygon = synthesize(&subject, &classification(RegionType::Country));

        assert_eq!(polygon.ring.len(), 5);
        assert_eq!(
            polygon.ring[0],
            LatLng::new(center.lat + 2.0, center.lng + 2.0)
        );
        assert_eq!(
            polygon.ring[2],
            LatLng::new(center.lat - 2.0, center.lng - 2.0)
        );
        assert!(polygon.is_closed());
    }

    #[test]
    fn state_heuristic_offsets_by_one_degree() {
        let center = LatLng::new(40.0, -100.0);
        let polygon = synthesize(&place(center, None), &classification(RegionType::State));
        assert_eq!(polygon.ring[0], LatLng::new(41.0, -99.0));
        assert_eq!(polygon.ring[2], LatLng::new(39.0, -101.0));
    }

    #[test]
    fn other_levels_offset_by_half_degree() {
        for region_type in [RegionType::City, RegionType::PostalCode, RegionType::Unknown] {
            let center = LatLng::new(10.0, 20.0);
            let polygon = synthesize(&place(center, None), &classification(region_type));
            assert_eq!(polygon.ring[0], LatLng::new(10.5, 20.5), "{region_type}");
            assert_eq!(polygon.ring[2], LatLng::new(9.5, 19.5), "{region_type}");
        }
    }

    #[test]
    fn ring_is_always_closed_five_points() {
        let cases = [
            place(LatLng::new(0.0, 0.0), None),
            place(
                LatLng::new(0.0, 0.0),
                Some(Viewport::new(LatLng::new(1.0, 1.0), LatLng::new(-1.0, -1.0))),
            ),
            // Degenerate viewport still yields a well-formed ring.
            place(
                LatLng::new(5.0, 5.0),
                Some(Viewport::new(LatLng::new(5.0, 5.0), LatLng::new(5.0, 5.0))),
            ),
        ];
        for subject in &cases {
            let polygon = synthesize(subject, &classification(RegionType::Unknown));
            assert_eq!(polygon.ring.len(), 5);
            assert!(polygon.is_closed());
        }
    }
}
