#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Address classification and boundary synthesis for geocoded places.
//!
//! Two pure, total stages that sit between a geocoding provider adapter
//! and the camera math:
//!
//! 1. [`classifier`] — scans a place's typed address components and
//!    derives its primary administrative level plus a superset of
//!    canonical address fields.
//! 2. [`boundary`] — produces a closed 5-point boundary ring for the
//!    place, exact when the provider supplied a viewport and a
//!    level-sized heuristic box otherwise.
//!
//! Nothing in this crate performs I/O, logs, or fails: unclassifiable
//! input resolves to [`RegionType::Unknown`] and boundary synthesis
//! always yields a ring.
//!
//! [`RegionType::Unknown`]: region_map_region_models::RegionType::Unknown

pub mod boundary;
pub mod classifier;

pub use boundary::synthesize;
pub use classifier::{AddressFields, classify, extract_fields, find_component};
