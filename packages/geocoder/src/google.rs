//! Google Maps Platform client: geocoding, place autocomplete, and
//! place details.
//!
//! All three endpoints share the same envelope: a top-level `status`
//! string plus a payload. `ZERO_RESULTS` is a successful empty answer,
//! `OVER_QUERY_LIMIT` maps to [`GeocodeError::RateLimited`], anything
//! else unexpected maps to [`GeocodeError::Rejected`].
//!
//! See <https://developers.google.com/maps/documentation/geocoding/requests-geocoding>

use region_map_region_models::{AddressComponent, GeocodedPlace, LatLng, Prediction, Viewport};
use serde_json::Value;

use crate::GeocodeError;

/// Geocodes a free-text query.
///
/// Returns `Ok(None)` when the provider has no match.
///
/// # Errors
///
/// Returns [`GeocodeError`] if the HTTP request fails, the response
/// cannot be parsed, or the provider rejects the request.
pub async fn geocode(
    client: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    query: &str,
) -> Result<Option<GeocodedPlace>, GeocodeError> {
    log::debug!("Google geocode: {query:?}");
    let resp = client
        .get(format!("{base_url}/geocode/json"))
        .query(&[("address", query), ("key", api_key)])
        .send()
        .await?;

    if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(GeocodeError::RateLimited);
    }

    let body: Value = resp.json().await?;
    parse_geocode_response(&body)
}

/// Fetches autocomplete predictions for a partial query.
///
/// # Errors
///
/// Returns [`GeocodeError`] if the HTTP request fails, the response
/// cannot be parsed, or the provider rejects the request.
pub async fn place_predictions(
    client: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    input: &str,
) -> Result<Vec<Prediction>, GeocodeError> {
    let resp = client
        .get(format!("{base_url}/place/autocomplete/json"))
        .query(&[("input", input), ("key", api_key)])
        .send()
        .await?;

    if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(GeocodeError::RateLimited);
    }

    let body: Value = resp.json().await?;
    parse_predictions_response(&body)
}

/// Fetches full place details for a prediction's place id.
///
/// # Errors
///
/// Returns [`GeocodeError`] if the HTTP request fails, the response
/// cannot be parsed, or the provider rejects the request.
pub async fn place_details(
    client: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    place_id: &str,
) -> Result<Option<GeocodedPlace>, GeocodeError> {
    let resp = client
        .get(format!("{base_url}/place/details/json"))
        .query(&[
            ("place_id", place_id),
            ("fields", "place_id,formatted_address,geometry,address_component,type"),
            ("key", api_key),
        ])
        .send()
        .await?;

    if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(GeocodeError::RateLimited);
    }

    let body: Value = resp.json().await?;
    parse_details_response(&body)
}

/// Checks the shared `status` envelope field.
///
/// `Ok(true)` means results are present, `Ok(false)` means a valid
/// empty answer.
fn check_status(body: &Value) -> Result<bool, GeocodeError> {
    match body["status"].as_str() {
        Some("OK") => Ok(true),
        Some("ZERO_RESULTS" | "NOT_FOUND") => Ok(false),
        Some("OVER_QUERY_LIMIT") => Err(GeocodeError::RateLimited),
        Some(status) => Err(GeocodeError::Rejected {
            status: status.to_string(),
        }),
        None => Err(GeocodeError::parse("missing status in Google response")),
    }
}

fn parse_geocode_response(body: &Value) -> Result<Option<GeocodedPlace>, GeocodeError> {
    if !check_status(body)? {
        return Ok(None);
    }
    let results = body["results"]
        .as_array()
        .ok_or_else(|| GeocodeError::parse("Google results is not an array"))?;
    results.first().map(parse_place).transpose()
}

fn parse_details_response(body: &Value) -> Result<Option<GeocodedPlace>, GeocodeError> {
    if !check_status(body)? {
        return Ok(None);
    }
    let result = &body["result"];
    if result.is_null() {
        return Err(GeocodeError::parse("missing result in details response"));
    }
    parse_place(result).map(Some)
}

fn parse_predictions_response(body: &Value) -> Result<Vec<Prediction>, GeocodeError> {
    if !check_status(body)? {
        return Ok(Vec::new());
    }
    let predictions = body["predictions"]
        .as_array()
        .ok_or_else(|| GeocodeError::parse("Google predictions is not an array"))?;

    predictions
        .iter()
        .map(|p| {
            let description = p["description"]
                .as_str()
                .ok_or_else(|| GeocodeError::parse("prediction missing description"))?;
            let place_id = p["place_id"]
                .as_str()
                .ok_or_else(|| GeocodeError::parse("prediction missing place_id"))?;
            Ok(Prediction {
                description: description.to_string(),
                place_id: place_id.to_string(),
            })
        })
        .collect()
}

/// Parses one geocoder/details result object into a [`GeocodedPlace`].
fn parse_place(result: &Value) -> Result<GeocodedPlace, GeocodeError> {
    let place_id = result["place_id"]
        .as_str()
        .ok_or_else(|| GeocodeError::parse("missing place_id"))?
        .to_string();

    let formatted_address = result["formatted_address"]
        .as_str()
        .ok_or_else(|| GeocodeError::parse("missing formatted_address"))?
        .to_string();

    let location = parse_lat_lng(&result["geometry"]["location"])
        .ok_or_else(|| GeocodeError::parse("missing geometry.location"))?;

    // Point-like places legitimately have no viewport.
    let viewport = parse_viewport(&result["geometry"]["viewport"]);

    let address_components = result["address_components"]
        .as_array()
        .map(|components| components.iter().filter_map(parse_component).collect())
        .unwrap_or_default();

    let types = string_array(&result["types"]);

    Ok(GeocodedPlace {
        place_id,
        formatted_address,
        location,
        viewport,
        address_components,
        types,
    })
}

fn parse_component(component: &Value) -> Option<AddressComponent> {
    let long_name = component["long_name"].as_str()?;
    let short_name = component["short_name"].as_str()?;
    Some(AddressComponent {
        long_name: long_name.to_string(),
        short_name: short_name.to_string(),
        types: string_array(&component["types"]),
    })
}

fn parse_lat_lng(value: &Value) -> Option<LatLng> {
    Some(LatLng::new(value["lat"].as_f64()?, value["lng"].as_f64()?))
}

fn parse_viewport(value: &Value) -> Option<Viewport> {
    Some(Viewport::new(
        parse_lat_lng(&value["northeast"])?,
        parse_lat_lng(&value["southwest"])?,
    ))
}

fn string_array(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
