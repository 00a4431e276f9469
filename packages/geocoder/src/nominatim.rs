//! Nominatim / OpenStreetMap geocoder client.
//!
//! Keyless fallback when no Google API key is configured. Nominatim has
//! strict rate limits on the public instance: **1 request per second**
//! maximum; the caller is responsible for pacing (see `rate_limit_ms`
//! in the service TOML configuration).
//!
//! Nominatim's address schema differs from Google's, so the parser maps
//! its `address` object onto the shared Google-style component tags
//! (`country`, `administrative_area_level_1`, `locality`, ...) before
//! returning. Downstream classification never sees Nominatim's own
//! vocabulary.
//!
//! See <https://nominatim.org/release-docs/develop/api/Search/>

use region_map_region_models::{AddressComponent, GeocodedPlace, LatLng, Viewport};
use serde_json::Value;

use crate::GeocodeError;

/// Geocodes a free-form query using the Nominatim search endpoint.
///
/// Returns `Ok(None)` when the provider has no match.
///
/// # Errors
///
/// Returns [`GeocodeError`] if the HTTP request or response parsing
/// fails.
pub async fn geocode_freeform(
    client: &reqwest::Client,
    base_url: &str,
    query: &str,
) -> Result<Option<GeocodedPlace>, GeocodeError> {
    log::debug!("Nominatim geocode: {query:?}");
    let resp = client
        .get(base_url)
        .query(&[
            ("q", query),
            ("format", "jsonv2"),
            ("addressdetails", "1"),
            ("limit", "1"),
        ])
        .send()
        .await?;

    if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(GeocodeError::RateLimited);
    }

    let body: Value = resp.json().await?;
    parse_response(&body)
}

/// Parses a Nominatim jsonv2 response array.
fn parse_response(body: &Value) -> Result<Option<GeocodedPlace>, GeocodeError> {
    let results = body
        .as_array()
        .ok_or_else(|| GeocodeError::parse("Nominatim response is not an array"))?;

    let Some(first) = results.first() else {
        return Ok(None);
    };

    let lat = string_f64(&first["lat"])
        .ok_or_else(|| GeocodeError::parse("missing lat in Nominatim response"))?;
    let lng = string_f64(&first["lon"])
        .ok_or_else(|| GeocodeError::parse("missing lon in Nominatim response"))?;

    let place_id = first["place_id"]
        .as_i64()
        .map(|id| id.to_string())
        .or_else(|| first["place_id"].as_str().map(String::from))
        .ok_or_else(|| GeocodeError::parse("missing place_id in Nominatim response"))?;

    let formatted_address = first["display_name"]
        .as_str()
        .ok_or_else(|| GeocodeError::parse("missing display_name in Nominatim response"))?
        .to_string();

    let viewport = parse_bounding_box(&first["boundingbox"]);
    let address_components = map_address_components(&first["address"]);

    // Nominatim's addresstype ("state", "city", ...) describes the
    // place itself; keep it as an opaque place type tag.
    let mut types = Vec::new();
    if let Some(address_type) = first["addresstype"].as_str() {
        types.push(address_type.to_string());
    }

    Ok(Some(GeocodedPlace {
        place_id,
        formatted_address,
        location: LatLng::new(lat, lng),
        viewport,
        address_components,
        types,
    }))
}

/// Nominatim bounding boxes are `[south, north, west, east]` strings.
fn parse_bounding_box(value: &Value) -> Option<Viewport> {
    let parts = value.as_array()?;
    if parts.len() != 4 {
        return None;
    }
    let south = string_f64(&parts[0])?;
    let north = string_f64(&parts[1])?;
    let west = string_f64(&parts[2])?;
    let east = string_f64(&parts[3])?;
    Some(Viewport::new(
        LatLng::new(north, east),
        LatLng::new(south, west),
    ))
}

/// Maps Nominatim's `address` object onto Google-style components.
fn map_address_components(address: &Value) -> Vec<AddressComponent> {
    let Some(fields) = address.as_object() else {
        return Vec::new();
    };

    let mut components = Vec::new();

    let mut push = |long: &str, short: &str, tags: &[&str]| {
        components.push(AddressComponent {
            long_name: long.to_string(),
            short_name: short.to_string(),
            types: tags.iter().map(|t| (*t).to_string()).collect(),
        });
    };

    // Most specific first, mirroring provider component ordering.
    if let Some(postcode) = fields.get("postcode").and_then(Value::as_str) {
        push(postcode, postcode, &["postal_code"]);
    }
    if let Some(neighbourhood) = fields.get("neighbourhood").and_then(Value::as_str) {
        push(neighbourhood, neighbourhood, &["neighborhood", "political"]);
    }
    if let Some(suburb) = fields.get("suburb").and_then(Value::as_str) {
        push(suburb, suburb, &["sublocality_level_1", "sublocality", "political"]);
    }
    for key in ["city", "town", "village", "municipality"] {
        if let Some(locality) = fields.get(key).and_then(Value::as_str) {
            push(locality, locality, &["locality", "political"]);
            break;
        }
    }
    if let Some(county) = fields.get("county").and_then(Value::as_str) {
        push(county, county, &["administrative_area_level_2", "political"]);
    }
    if let Some(state) = fields.get("state").and_then(Value::as_str) {
        // ISO3166-2-lvl4 carries codes like "US-CA"; the suffix is the
        // short name Google would return.
        let short = fields
            .get("ISO3166-2-lvl4")
            .and_then(Value::as_str)
            .and_then(|iso| iso.rsplit('-').next())
            .unwrap_or(state);
        push(state, short, &["administrative_area_level_1", "political"]);
    }
    if let Some(country) = fields.get("country").and_then(Value::as_str) {
        let code = fields
            .get("country_code")
            .and_then(Value::as_str)
            .map(str::to_uppercase);
        push(
            country,
            code.as_deref().unwrap_or(country),
            &["country", "political"],
        );
    }

    components
}

/// Nominatim encodes numbers as strings in jsonv2; accept both.
fn string_f64(value: &Value) -> Option<f64> {
    value
        .as_str()
        .and_then(|s| s.parse::<f64>().ok())
        .or_else(|| value.as_f64())
}
