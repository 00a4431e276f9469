#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geocoding provider adapters for region search.
//!
//! Resolves free-text queries and place identifiers into
//! [`GeocodedPlace`] values using a multi-provider strategy configured
//! via TOML files in `services/`:
//!
//! 1. **Google Maps Platform** (priority 1) — geocoding, place
//!    autocomplete, and place details. Requires an API key (env var
//!    named in the TOML config); skipped when the key is unset.
//! 2. **Nominatim / OpenStreetMap** (priority 2) — free, no API key,
//!    1 req/sec rate limit on the public instance.
//!
//! Providers are loaded from the [`service_registry`] and tried in
//! priority order by the resolver.
//!
//! Every adapter maps its provider's response onto the shared
//! Google-style address component vocabulary, so downstream
//! classification never sees provider-specific schemas. Adapters never
//! retry: not-found is `Ok(None)`, rate limiting and transport failures
//! are typed errors the caller surfaces opaquely.
//!
//! [`GeocodedPlace`]: region_map_region_models::GeocodedPlace

pub mod google;
pub mod nominatim;
pub mod service_registry;

use thiserror::Error;

/// Errors from geocoding operations.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response parsing failed.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("Rate limit exceeded")]
    RateLimited,

    /// The provider rejected the request (bad key, denied, etc).
    #[error("Provider rejected request: {status}")]
    Rejected {
        /// Provider status string.
        status: String,
    },
}

impl GeocodeError {
    /// Shorthand for a [`GeocodeError::Parse`] with a message.
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}
