#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Region resolution orchestration.
//!
//! Chains the geocoding provider adapters with the pure derivation
//! stages: a free-text query is geocoded (providers in priority order,
//! first hit wins), then classified, boundary-synthesized, and turned
//! into a camera command plus derived metadata, returned as one
//! [`ResolvedRegion`].
//!
//! Also provides [`SelectionState`], the last-write-wins holder for the
//! currently displayed region: overlapping searches race, and only the
//! most recently begun search may commit its result.

pub mod resolve;
pub mod selection;

use thiserror::Error;

pub use resolve::{
    RegionFips, ResolvedRegion, derive_region, resolve, resolve_place, resolve_with_panel, suggest,
};
pub use selection::{SearchToken, SelectionState};

/// Errors from region resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A geocoding provider failed; passed through unchanged.
    #[error(transparent)]
    Geocode(#[from] region_map_geocoder::GeocodeError),

    /// Every enabled provider answered, but none matched the query.
    #[error("no region matched query: {query}")]
    NoMatch {
        /// The query that failed to resolve.
        query: String,
    },

    /// No enabled provider can serve this operation (e.g. autocomplete
    /// without a Google API key).
    #[error("no enabled geocoding provider available")]
    NoProviderAvailable,
}
