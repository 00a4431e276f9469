//! Query-to-region resolution pipeline.
//!
//! The async half talks to the provider adapters; everything after the
//! geocode is the pure chain [`derive_region`], kept separate so it can
//! be exercised without HTTP.

use region_map_camera::{
    DEFAULT_MAX_ZOOM, PixelPanel, area_km2, fit_zoom, fit_zoom_coarse, ring_center,
};
use region_map_fips::CensusRegion;
use region_map_geocoder::service_registry::{ProviderConfig, enabled_services};
use region_map_geocoder::{GeocodeError, google, nominatim};
use region_map_region::{AddressFields, classify, extract_fields, synthesize};
use region_map_region_models::{
    BoundaryPolygon, CameraCommand, GeocodedPlace, Prediction, RegionClassification, Viewport,
};
use serde::Serialize;

use crate::ResolveError;

/// US FIPS cross-references derived from a resolved region's address
/// fields. Only present for US places whose state code is recognized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionFips {
    /// Two-letter state abbreviation.
    pub state_code: String,
    /// Two-digit state FIPS code.
    pub state_fips: String,
    /// Three-digit county FIPS code, when the county is in the curated
    /// registry.
    pub county_fips: Option<String>,
    /// Five-digit combined code, when the county resolved.
    pub full_code: Option<String>,
    /// Census region of the state.
    pub region: Option<CensusRegion>,
}

/// A fully resolved region: the geocoded place plus everything derived
/// from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRegion {
    /// The provider's geocoded place, unmodified.
    pub place: GeocodedPlace,
    /// Primary administrative level and name.
    pub classification: RegionClassification,
    /// Superset of canonical address fields.
    pub fields: AddressFields,
    /// Closed 5-point boundary ring for the map overlay.
    pub boundary: BoundaryPolygon,
    /// Camera command fitting the boundary.
    pub camera: CameraCommand,
    /// Approximate area in km² (planar approximation).
    pub area_km2: f64,
    /// US FIPS cross-references, when derivable.
    pub fips: Option<RegionFips>,
}

/// Resolves a free-text query using the coarse zoom variant.
///
/// # Errors
///
/// Returns [`ResolveError::NoMatch`] when every provider answers empty,
/// or the first provider failure when none succeeds.
pub async fn resolve(
    client: &reqwest::Client,
    query: &str,
) -> Result<ResolvedRegion, ResolveError> {
    resolve_with_panel(client, query, None).await
}

/// Resolves a free-text query, fitting zoom to a pixel panel when one
/// is supplied.
///
/// Providers run in registry priority order; the first that returns a
/// place wins. A provider that errors is skipped so a later provider
/// can still answer, but its failure is reported if nothing matches.
///
/// # Errors
///
/// Returns [`ResolveError::NoMatch`] when every provider answers empty,
/// or the first provider failure when none succeeds.
pub async fn resolve_with_panel(
    client: &reqwest::Client,
    query: &str,
    panel: Option<PixelPanel>,
) -> Result<ResolvedRegion, ResolveError> {
    let mut first_error: Option<GeocodeError> = None;

    for service in enabled_services() {
        let attempt = match &service.provider {
            ProviderConfig::Google {
                base_url,
                api_key_env,
            } => {
                let Ok(api_key) = std::env::var(api_key_env) else {
                    log::debug!("Skipping {}: {api_key_env} not set", service.id);
                    continue;
                };
                google::geocode(client, base_url, &api_key, query).await
            }
            ProviderConfig::Nominatim { base_url, .. } => {
                nominatim::geocode_freeform(client, base_url, query).await
            }
        };

        match attempt {
            Ok(Some(place)) => {
                log::info!("Resolved {query:?} via {}", service.id);
                return Ok(derive_region(place, panel));
            }
            Ok(None) => {
                log::info!("No match for {query:?} from {}", service.id);
            }
            Err(e) => {
                log::warn!("Provider {} failed: {e}", service.id);
                first_error.get_or_insert(e);
            }
        }
    }

    Err(first_error.map_or_else(
        || ResolveError::NoMatch {
            query: query.to_string(),
        },
        ResolveError::Geocode,
    ))
}

/// Fetches autocomplete predictions for a partial query.
///
/// Only the Google provider supports autocomplete; requires its API key
/// env var to be set.
///
/// # Errors
///
/// Returns [`ResolveError::NoProviderAvailable`] when no autocomplete
/// provider is usable, or the provider's failure unchanged.
pub async fn suggest(
    client: &reqwest::Client,
    input: &str,
) -> Result<Vec<Prediction>, ResolveError> {
    for service in enabled_services() {
        if let ProviderConfig::Google {
            base_url,
            api_key_env,
        } = &service.provider
        {
            let Ok(api_key) = std::env::var(api_key_env) else {
                log::debug!("Skipping {}: {api_key_env} not set", service.id);
                continue;
            };
            return Ok(google::place_predictions(client, base_url, &api_key, input).await?);
        }
    }
    Err(ResolveError::NoProviderAvailable)
}

/// Resolves a previously suggested place id into a full region.
///
/// Completes the autocomplete flow: the caller picks one of the
/// [`suggest`] predictions and passes its `place_id` here. Place details
/// are a Google-only operation, like autocomplete itself.
///
/// # Errors
///
/// Returns [`ResolveError::NoMatch`] when the provider no longer knows
/// the id, [`ResolveError::NoProviderAvailable`] when no details
/// provider is usable, or the provider's failure unchanged.
pub async fn resolve_place(
    client: &reqwest::Client,
    place_id: &str,
    panel: Option<PixelPanel>,
) -> Result<ResolvedRegion, ResolveError> {
    for service in enabled_services() {
        if let ProviderConfig::Google {
            base_url,
            api_key_env,
        } = &service.provider
        {
            let Ok(api_key) = std::env::var(api_key_env) else {
                log::debug!("Skipping {}: {api_key_env} not set", service.id);
                continue;
            };
            return match google::place_details(client, base_url, &api_key, place_id).await? {
                Some(place) => Ok(derive_region(place, panel)),
                None => Err(ResolveError::NoMatch {
                    query: place_id.to_string(),
                }),
            };
        }
    }
    Err(ResolveError::NoProviderAvailable)
}

/// Pure derivation chain: classify, extract fields, synthesize the
/// boundary, fit the camera, approximate the area, cross-reference
/// FIPS.
#[must_use]
pub fn derive_region(place: GeocodedPlace, panel: Option<PixelPanel>) -> ResolvedRegion {
    let classification = classify(&place.address_components);
    let fields = extract_fields(&place.address_components);
    let boundary = synthesize(&place, &classification);

    // The ring is NE, NW, SW, SE, NE by construction; corners 0 and 2
    // bound it whether it came from the viewport or the heuristic box.
    let fit_box = place
        .viewport
        .unwrap_or_else(|| Viewport::new(boundary.ring[0], boundary.ring[2]));

    let zoom = panel.map_or_else(
        || fit_zoom_coarse(&fit_box),
        |panel| fit_zoom(&fit_box, panel, DEFAULT_MAX_ZOOM),
    );

    let camera = CameraCommand {
        center: ring_center(&boundary),
        zoom,
        animate: true,
    };

    let area_km2 = area_km2(&fit_box);
    let fips = derive_region_fips(&fields);

    ResolvedRegion {
        place,
        classification,
        fields,
        boundary,
        camera,
        area_km2,
        fips,
    }
}

/// Cross-references a US place's address fields against the FIPS
/// registry.
fn derive_region_fips(fields: &AddressFields) -> Option<RegionFips> {
    if let Some(country_code) = &fields.country_code {
        if country_code != "US" {
            return None;
        }
    }

    let state_code = fields.admin_area_level_1_code.as_deref()?;
    let state_fips = region_map_fips::state_fips(state_code)?;

    let county_fips = fields
        .admin_area_level_2
        .as_deref()
        .and_then(|county| region_map_fips::county_fips(state_fips, county));

    let full_code = county_fips.map(|county| region_map_fips::full_fips(state_fips, county));

    Some(RegionFips {
        state_code: state_code.to_uppercase(),
        state_fips: state_fips.to_string(),
        county_fips: county_fips.map(String::from),
        full_code,
        region: region_map_fips::state_region(state_code),
    })
}
