//! Static FIPS reference tables, compiled in.
//!
//! The county list is curated: major US counties by population and
//! economic significance, not an exhaustive census. Lookups that miss
//! simply return `None`.

use crate::{CensusRegion, CountyRecord};

/// Two-letter codes for the 50 US states.
pub const STATE_CODES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];

/// Census region membership, checked in declaration order.
pub const REGION_MEMBERS: &[(CensusRegion, &[&str])] = &[
    (
        CensusRegion::Northeast,
        &["CT", "ME", "MA", "NH", "RI", "VT", "NJ", "NY", "PA"],
    ),
    (
        CensusRegion::Midwest,
        &[
            "IL", "IN", "MI", "OH", "WI", "IA", "KS", "MN", "MO", "NE", "ND", "SD",
        ],
    ),
    (
        CensusRegion::South,
        &[
            "DE", "FL", "GA", "MD", "NC", "SC", "VA", "WV", "AL", "KY", "MS", "TN", "AR", "LA",
            "OK", "TX",
        ],
    ),
    (
        CensusRegion::West,
        &[
            "AZ", "CO", "ID", "MT", "NV", "NM", "UT", "WY", "AK", "CA", "HI", "OR", "WA",
        ],
    ),
];

const fn county(
    state_fips: &'static str,
    county_fips: &'static str,
    name: &'static str,
    state_code: &'static str,
    region: CensusRegion,
) -> CountyRecord {
    CountyRecord {
        state_fips,
        county_fips,
        name,
        state_code,
        region,
    }
}

/// Major US counties (top counties by population and economic
/// significance).
pub const COUNTY_RECORDS: &[CountyRecord] = &[
    // New York
    county("36", "061", "New York County", "NY", CensusRegion::Northeast),
    county("36", "047", "Kings County", "NY", CensusRegion::Northeast),
    county("36", "081", "Queens County", "NY", CensusRegion::Northeast),
    county("36", "005", "Bronx County", "NY", CensusRegion::Northeast),
    // California
    county("06", "037", "Los Angeles County", "CA", CensusRegion::West),
    county("06", "075", "San Francisco County", "CA", CensusRegion::West),
    county("06", "085", "Santa Clara County", "CA", CensusRegion::West),
    county("06", "001", "Alameda County", "CA", CensusRegion::West),
    county("06", "067", "Sacramento County", "CA", CensusRegion::West),
    // Illinois
    county("17", "031", "Cook County", "IL", CensusRegion::Midwest),
    county("17", "043", "DuPage County", "IL", CensusRegion::Midwest),
    county("17", "089", "Kane County", "IL", CensusRegion::Midwest),
    // Texas
    county("48", "201", "Harris County", "TX", CensusRegion::South),
    county("48", "113", "Dallas County", "TX", CensusRegion::South),
    county("48", "029", "Bexar County", "TX", CensusRegion::South),
    // Florida
    county("12", "086", "Miami-Dade County", "FL", CensusRegion::South),
    county("12", "011", "Broward County", "FL", CensusRegion::South),
    county("12", "095", "Orange County", "FL", CensusRegion::South),
    // Additional major metropolitan counties
    county("42", "101", "Philadelphia County", "PA", CensusRegion::Northeast),
    county("04", "013", "Maricopa County", "AZ", CensusRegion::West),
    county("53", "033", "King County", "WA", CensusRegion::West),
    county("27", "053", "Hennepin County", "MN", CensusRegion::Midwest),
    county("26", "163", "Wayne County", "MI", CensusRegion::Midwest),
];
