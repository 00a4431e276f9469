#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! US state and county FIPS code registry.
//!
//! Pure lookup functions over immutable static tables: two-letter state
//! abbreviations ↔ two-digit state FIPS codes, a curated list of major
//! county records, and the four census regions. Malformed queries return
//! `None`; nothing here panics or performs I/O.

pub mod tables;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};

pub use tables::{COUNTY_RECORDS, REGION_MEMBERS, STATE_CODES};

/// Regex for a 3-digit county FIPS code.
static COUNTY_FIPS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}$").expect("valid regex"));

/// Regex for a 5-digit full (state + county) FIPS code.
static FULL_FIPS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}$").expect("valid regex"));

/// One of the four US census regions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, AsRefStr,
)]
pub enum CensusRegion {
    /// New England and Mid-Atlantic states.
    Northeast,
    /// East and West North Central states.
    Midwest,
    /// South Atlantic, East and West South Central states.
    South,
    /// Mountain and Pacific states.
    West,
}

/// A curated county reference record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyRecord {
    /// Two-digit state FIPS code.
    pub state_fips: &'static str,
    /// Three-digit county FIPS code.
    pub county_fips: &'static str,
    /// County name including the "County" suffix.
    pub name: &'static str,
    /// Two-letter state abbreviation.
    pub state_code: &'static str,
    /// Census region the county's state belongs to.
    pub region: CensusRegion,
}

/// Maps a two-letter state abbreviation to its two-digit FIPS code.
///
/// Case-insensitive. Returns `None` for unrecognized abbreviations.
#[must_use]
pub fn state_fips(abbr: &str) -> Option<&'static str> {
    match abbr.to_uppercase().as_str() {
        "AL" => Some("01"),
        "AK" => Some("02"),
        "AZ" => Some("04"),
        "AR" => Some("05"),
        "CA" => Some("06"),
        "CO" => Some("08"),
        "CT" => Some("09"),
        "DE" => Some("10"),
        "FL" => Some("12"),
        "GA" => Some("13"),
        "HI" => Some("15"),
        "ID" => Some("16"),
        "IL" => Some("17"),
        "IN" => Some("18"),
        "IA" => Some("19"),
        "KS" => Some("20"),
        "KY" => Some("21"),
        "LA" => Some("22"),
        "ME" => Some("23"),
        "MD" => Some("24"),
        "MA" => Some("25"),
        "MI" => Some("26"),
        "MN" => Some("27"),
        "MS" => Some("28"),
        "MO" => Some("29"),
        "MT" => Some("30"),
        "NE" => Some("31"),
        "NV" => Some("32"),
        "NH" => Some("33"),
        "NJ" => Some("34"),
        "NM" => Some("35"),
        "NY" => Some("36"),
        "NC" => Some("37"),
        "ND" => Some("38"),
        "OH" => Some("39"),
        "OK" => Some("40"),
        "OR" => Some("41"),
        "PA" => Some("42"),
        "RI" => Some("44"),
        "SC" => Some("45"),
        "SD" => Some("46"),
        "TN" => Some("47"),
        "TX" => Some("48"),
        "UT" => Some("49"),
        "VT" => Some("50"),
        "VA" => Some("51"),
        "WA" => Some("53"),
        "WV" => Some("54"),
        "WI" => Some("55"),
        "WY" => Some("56"),
        _ => None,
    }
}

/// Maps a two-digit FIPS code to the state abbreviation.
///
/// Exact inverse of [`state_fips`] over the 50-state table. Returns
/// `None` for unrecognized codes.
#[must_use]
pub fn state_by_fips(code: &str) -> Option<&'static str> {
    match code {
        "01" => Some("AL"),
        "02" => Some("AK"),
        "04" => Some("AZ"),
        "05" => Some("AR"),
        "06" => Some("CA"),
        "08" => Some("CO"),
        "09" => Some("CT"),
        "10" => Some("DE"),
        "12" => Some("FL"),
        "13" => Some("GA"),
        "15" => Some("HI"),
        "16" => Some("ID"),
        "17" => Some("IL"),
        "18" => Some("IN"),
        "19" => Some("IA"),
        "20" => Some("KS"),
        "21" => Some("KY"),
        "22" => Some("LA"),
        "23" => Some("ME"),
        "24" => Some("MD"),
        "25" => Some("MA"),
        "26" => Some("MI"),
        "27" => Some("MN"),
        "28" => Some("MS"),
        "29" => Some("MO"),
        "30" => Some("MT"),
        "31" => Some("NE"),
        "32" => Some("NV"),
        "33" => Some("NH"),
        "34" => Some("NJ"),
        "35" => Some("NM"),
        "36" => Some("NY"),
        "37" => Some("NC"),
        "38" => Some("ND"),
        "39" => Some("OH"),
        "40" => Some("OK"),
        "41" => Some("OR"),
        "42" => Some("PA"),
        "44" => Some("RI"),
        "45" => Some("SC"),
        "46" => Some("SD"),
        "47" => Some("TN"),
        "48" => Some("TX"),
        "49" => Some("UT"),
        "50" => Some("VT"),
        "51" => Some("VA"),
        "53" => Some("WA"),
        "54" => Some("WV"),
        "55" => Some("WI"),
        "56" => Some("WY"),
        _ => None,
    }
}

/// Normalizes a county name for lookup: lowercase, first `" county"`
/// removed, surrounding whitespace stripped.
fn normalize_county_name(name: &str) -> String {
    name.to_lowercase().replacen(" county", "", 1).trim().to_string()
}

/// Looks up the three-digit county FIPS code by state FIPS and county
/// name.
///
/// Matching is case-insensitive and tolerates a missing or present
/// `" County"` suffix.
#[must_use]
pub fn county_fips(state_fips: &str, county_name: &str) -> Option<&'static str> {
    let normalized = normalize_county_name(county_name);
    COUNTY_RECORDS
        .iter()
        .find(|record| {
            record.state_fips == state_fips && normalize_county_name(record.name) == normalized
        })
        .map(|record| record.county_fips)
}

/// Combines state and county FIPS codes into the 5-digit full code.
#[must_use]
pub fn full_fips(state_fips: &str, county_fips: &str) -> String {
    format!("{state_fips}{county_fips}")
}

/// Splits a 5-digit full FIPS code into (state, county) parts.
///
/// Returns `None` unless the input is exactly 5 ASCII digits.
#[must_use]
pub fn parse_full_fips(full: &str) -> Option<(&str, &str)> {
    if is_full_fips_code(full) {
        Some((&full[..2], &full[2..]))
    } else {
        None
    }
}

/// Returns `true` iff `code` is a two-letter state abbreviation in the
/// table (case-insensitive).
#[must_use]
pub fn is_state_code(code: &str) -> bool {
    code.len() == 2 && state_fips(code).is_some()
}

/// Returns `true` iff `code` is exactly 3 ASCII digits.
#[must_use]
pub fn is_county_fips_code(code: &str) -> bool {
    COUNTY_FIPS_RE.is_match(code)
}

/// Returns `true` iff `code` is exactly 5 ASCII digits.
#[must_use]
pub fn is_full_fips_code(code: &str) -> bool {
    FULL_FIPS_RE.is_match(code)
}

/// Returns the census region a state belongs to.
///
/// First region whose member list contains the upper-cased abbreviation.
#[must_use]
pub fn state_region(abbr: &str) -> Option<CensusRegion> {
    let upper = abbr.to_uppercase();
    REGION_MEMBERS
        .iter()
        .find(|(_, members)| members.contains(&upper.as_str()))
        .map(|(region, _)| *region)
}

/// All curated counties in a census region.
#[must_use]
pub fn counties_by_region(region: CensusRegion) -> Vec<&'static CountyRecord> {
    COUNTY_RECORDS
        .iter()
        .filter(|record| record.region == region)
        .collect()
}

/// All curated counties in a state (by two-letter abbreviation,
/// case-insensitive).
#[must_use]
pub fn counties_by_state(state_code: &str) -> Vec<&'static CountyRecord> {
    let upper = state_code.to_uppercase();
    COUNTY_RECORDS
        .iter()
        .filter(|record| record.state_code == upper)
        .collect()
}

/// Returns `true` if the (state, county) pair is in the curated
/// major-metro list.
#[must_use]
pub fn is_major_metro_county(state_fips: &str, county_fips: &str) -> bool {
    COUNTY_RECORDS
        .iter()
        .any(|record| record.state_fips == state_fips && record.county_fips == county_fips)
}
