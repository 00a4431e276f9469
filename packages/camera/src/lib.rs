#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Map camera math: zoom-to-fit, approximate area, and centers.
//!
//! Computes the camera parameters an interactive map widget needs to
//! display a region's bounding box: the geographic center, a zoom level
//! that fits the box on a pixel panel (Mercator world-projection fit),
//! and an approximate area in km².
//!
//! The area formula is a planar approximation (latitude/longitude spans
//! corrected by the cosine of the mean latitude). It is not geodesically
//! exact and degrades near the poles and for very large boxes; callers
//! should treat it as display metadata, not measurement.

use std::f64::consts::PI;

use region_map_region_models::{BoundaryPolygon, LatLng, Viewport};

/// Standard web-map world tile size in pixels.
const WORLD_TILE_PX: f64 = 256.0;

/// Kilometers per degree of latitude.
const KM_PER_DEGREE: f64 = 111.32;

/// Default maximum zoom for the Mercator fit.
pub const DEFAULT_MAX_ZOOM: f64 = 21.0;

/// Zoom bounds for the coarse variant.
const COARSE_MIN_ZOOM: f64 = 2.0;
const COARSE_MAX_ZOOM: f64 = 15.0;

/// On-screen map panel size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPanel {
    /// Panel width in pixels.
    pub width: f64,
    /// Panel height in pixels.
    pub height: f64,
}

impl PixelPanel {
    /// Creates a panel from explicit dimensions.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for PixelPanel {
    /// Reference panel emulating a typical map view: 800px wide, 400px
    /// high.
    fn default() -> Self {
        Self::new(800.0, 400.0)
    }
}

/// Latitude projected to a Mercator world fraction in [-π/2, π/2].
fn projected_lat(lat: f64) -> f64 {
    let sin = (lat * PI / 180.0).sin();
    let rad_x2 = ((1.0 + sin) / (1.0 - sin)).ln() / 2.0;
    rad_x2.clamp(-PI, PI) / 2.0
}

/// Zoom at which `fraction` of the world fits in `panel_px` pixels.
///
/// A non-positive fraction (degenerate axis) yields +∞ so the caller's
/// max-zoom clamp decides.
fn axis_zoom(panel_px: f64, fraction: f64) -> f64 {
    if fraction <= 0.0 {
        return f64::INFINITY;
    }
    (panel_px / WORLD_TILE_PX / fraction).log2().floor()
}

/// Computes the zoom that fits a box on a pixel panel.
///
/// Mercator world-projection fit: each axis gets
/// `floor(log2(panel_px / 256 / world_fraction))`, the result is the
/// smaller axis zoom clamped to `max_zoom`, minus a 0.5 padding margin,
/// floored at 0.
///
/// The `max_zoom` clamp is applied before the padding subtraction so a
/// degenerate box (a point with no extent) returns `max_zoom - 0.5`
/// rather than infinity. A longitude span that wraps to exactly 0 is
/// treated as the whole-world span by [`Viewport::lng_span`].
#[must_use]
pub fn fit_zoom(viewport: &Viewport, panel: PixelPanel, max_zoom: f64) -> f64 {
    let lat_fraction =
        (projected_lat(viewport.northeast.lat) - projected_lat(viewport.southwest.lat)) / PI;
    let lng_fraction = viewport.lng_span() / 360.0;

    let lat_zoom = axis_zoom(panel.height, lat_fraction);
    let lng_zoom = axis_zoom(panel.width, lng_fraction);

    (lat_zoom.min(lng_zoom).min(max_zoom) - 0.5).max(0.0)
}

/// Coarse zoom for callers without pixel-panel knowledge.
///
/// `floor(14 - log2(max(latSpan, lngSpan)))`, clamped to [2, 15]. A
/// degenerate box clamps to 15.
#[must_use]
pub fn fit_zoom_coarse(viewport: &Viewport) -> f64 {
    let max_span = viewport.lat_span().abs().max(viewport.lng_span());
    (14.0 - max_span.log2())
        .floor()
        .clamp(COARSE_MIN_ZOOM, COARSE_MAX_ZOOM)
}

/// Approximate area of a box in km², rounded to the nearest integer.
///
/// Planar approximation: `|latSpan| * |lngSpan| * 111.32² * cos(meanLat)`.
/// Not valid near the poles or for very large boxes.
#[must_use]
pub fn area_km2(viewport: &Viewport) -> f64 {
    let mean_lat = (viewport.northeast.lat + viewport.southwest.lat) / 2.0;
    (viewport.lat_span().abs()
        * viewport.lng_span().abs()
        * KM_PER_DEGREE
        * KM_PER_DEGREE
        * (mean_lat * PI / 180.0).cos())
    .round()
}

/// Arithmetic mean of the ring's distinct points.
///
/// The closing point duplicates the first and is skipped so it does not
/// skew the mean; for a box-derived 5-point ring the result is exactly
/// the box midpoint. An empty ring yields the origin.
#[must_use]
pub fn ring_center(polygon: &BoundaryPolygon) -> LatLng {
    let points = if polygon.is_closed() && polygon.ring.len() > 1 {
        &polygon.ring[..polygon.ring.len() - 1]
    } else {
        &polygon.ring[..]
    };
    if points.is_empty() {
        return LatLng::new(0.0, 0.0);
    }
    #[allow(clippy::cast_precision_loss)]
    let count = points.len() as f64;
    let (lat_sum, lng_sum) = points
        .iter()
        .fold((0.0, 0.0), |(lat, lng), p| (lat + p.lat, lng + p.lng));
    LatLng::new(lat_sum / count, lng_sum / count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(ne: (f64, f64), sw: (f64, f64)) -> Viewport {
        Viewport::new(LatLng::new(ne.0, ne.1), LatLng::new(sw.0, sw.1))
    }

    #[test]
    fn fits_state_sized_box() {
        // Massachusetts-shaped box on the default 800x400 panel:
        // lat axis floors to 8, lng axis to 9; min is 8, minus padding.
        let zoom = fit_zoom(
            &viewport((42.0, -71.0), (41.0, -73.0)),
            PixelPanel::default(),
            DEFAULT_MAX_ZOOM,
        );
        assert!((zoom - 7.5).abs() < 1e-9);
    }

    #[test]
    fn degenerate_box_clamps_to_max_zoom() {
        let zoom = fit_zoom(
            &viewport((1.0, 1.0), (1.0, 1.0)),
            PixelPanel::default(),
            DEFAULT_MAX_ZOOM,
        );
        assert!(zoom.is_finite());
        assert!((zoom - (DEFAULT_MAX_ZOOM - 0.5)).abs() < 1e-9);
    }

    #[test]
    fn whole_world_wrap_is_not_degenerate() {
        // Southwest at +180, northeast at -180: the wrapped span is the
        // whole world, so the longitude axis dominates.
        let zoom = fit_zoom(
            &viewport((10.0, -180.0), (-10.0, 180.0)),
            PixelPanel::default(),
            DEFAULT_MAX_ZOOM,
        );
        assert!((zoom - 0.5).abs() < 1e-9);
    }

    #[test]
    fn zoom_floors_at_zero() {
        // Pole-to-pole, antimeridian-to-antimeridian box.
        let zoom = fit_zoom(
            &viewport((90.0, 180.0), (-90.0, -180.0)),
            PixelPanel::default(),
            DEFAULT_MAX_ZOOM,
        );
        assert!((zoom - 0.0).abs() < 1e-9);
    }

    #[test]
    fn zoom_is_monotonically_non_increasing_in_box_size() {
        let panel = PixelPanel::default();
        let mut previous = f64::INFINITY;
        for half_span in [0.01, 0.05, 0.25, 1.0, 4.0, 16.0, 60.0] {
            let zoom = fit_zoom(
                &viewport((half_span, half_span), (-half_span, -half_span)),
                panel,
                DEFAULT_MAX_ZOOM,
            );
            assert!(
                zoom <= previous,
                "zoom {zoom} increased at half-span {half_span}"
            );
            previous = zoom;
        }
    }

    #[test]
    fn coarse_zoom_matches_simple_formula() {
        // Max span 2° -> floor(14 - 1) = 13.
        let zoom = fit_zoom_coarse(&viewport((42.0, -71.0), (41.0, -73.0)));
        assert!((zoom - 13.0).abs() < 1e-9);
    }

    #[test]
    fn coarse_zoom_clamps_degenerate_box() {
        // log2(0) is -inf; the upper clamp turns that into 15.
        assert!((fit_zoom_coarse(&viewport((1.0, 1.0), (1.0, 1.0))) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn coarse_zoom_for_whole_world() {
        // floor(14 - log2(360)) = 5, inside the [2, 15] clamp.
        let zoom = fit_zoom_coarse(&viewport((90.0, 180.0), (-90.0, -180.0)));
        assert!((zoom - 5.0).abs() < 1e-9);
    }

    #[test]
    fn area_of_one_degree_square_at_equator() {
        // 1° x 1° at the equator is ~111.32² km² = 12392 after rounding.
        let area = area_km2(&viewport((0.5, 0.5), (-0.5, -0.5)));
        assert!((area - 12392.0).abs() < 1.0);
    }

    #[test]
    fn area_shrinks_with_latitude() {
        let equator = area_km2(&viewport((0.5, 0.5), (-0.5, -0.5)));
        let north = area_km2(&viewport((60.5, 0.5), (59.5, -0.5)));
        assert!(north < equator);
        // cos(60°) = 0.5, so the high-latitude box is about half the area.
        assert!((north / equator - 0.5).abs() < 0.01);
    }

    #[test]
    fn area_is_integral() {
        let area = area_km2(&viewport((42.0, -71.0), (41.0, -73.0)));
        assert!((area - area.round()).abs() < 1e-12);
    }

    #[test]
    fn ring_center_equals_box_midpoint() {
        let box_viewport = viewport((42.0, -71.0), (41.0, -73.0));
        let ring = BoundaryPolygon {
            ring: vec![
                LatLng::new(42.0, -71.0),
                LatLng::new(42.0, -73.0),
                LatLng::new(41.0, -73.0),
                LatLng::new(41.0, -71.0),
                LatLng::new(42.0, -71.0),
            ],
        };
        let center = ring_center(&ring);
        let midpoint = box_viewport.center();
        assert!((center.lat - midpoint.lat).abs() < 1e-9);
        assert!((center.lng - midpoint.lng).abs() < 1e-9);
    }

    #[test]
    fn ring_center_of_empty_ring_is_origin() {
        let center = ring_center(&BoundaryPolygon { ring: Vec::new() });
        assert!((center.lat - 0.0).abs() < 1e-12);
        assert!((center.lng - 0.0).abs() < 1e-12);
    }
}
