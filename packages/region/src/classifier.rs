//! Region classification over typed address components.
//!
//! Geocoding providers return an address as an ordered list of typed
//! fragments. This module derives the place's primary administrative
//! level from those fragments and pulls out the canonical named fields
//! (country, admin levels, locality, sublocalities, postal code, ...).
//!
//! The type vocabulary is the Google-style tag set; provider adapters
//! are responsible for mapping their own schemas onto it, so everything
//! here stays provider-agnostic.

use region_map_region_models::{AddressComponent, RegionClassification, RegionType};
use serde::{Deserialize, Serialize};

/// Component tag checked for each region type, coarsest first.
///
/// Order matters: a component list containing both `country` and
/// `locality` classifies as a country.
const CLASSIFICATION_PRIORITY: &[(&str, RegionType)] = &[
    ("country", RegionType::Country),
    ("administrative_area_level_1", RegionType::State),
    ("locality", RegionType::City),
    ("postal_code", RegionType::PostalCode),
];

/// Classifies a place's primary region from its address components.
///
/// Scans for the first tag match in fixed priority order (country >
/// state > city > postal code). Total function: an empty or unmatched
/// component list yields [`RegionType::Unknown`] with an empty name.
#[must_use]
pub fn classify(components: &[AddressComponent]) -> RegionClassification {
    for (tag, region_type) in CLASSIFICATION_PRIORITY {
        if let Some(component) = components.iter().find(|c| c.has_type(tag)) {
            return RegionClassification {
                region_type: *region_type,
                region_name: component.long_name.clone(),
            };
        }
    }
    RegionClassification::unknown()
}

/// Finds the first component carrying any of the given type tags.
///
/// Returns the component's long name, or its short name when
/// `use_short_name` is set. `None` if nothing matches.
#[must_use]
pub fn find_component(
    components: &[AddressComponent],
    tags: &[&str],
    use_short_name: bool,
) -> Option<String> {
    components
        .iter()
        .find(|c| tags.iter().any(|tag| c.has_type(tag)))
        .map(|c| {
            if use_short_name {
                c.short_name.clone()
            } else {
                c.long_name.clone()
            }
        })
}

/// Canonical named address fields extracted from a component list.
///
/// This is the superset of fields the client drafts accumulated across
/// revisions, reconciled once. Every field is optional; absence means
/// the provider returned no component with that tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressFields {
    /// Country long name (e.g. `"United States"`).
    pub country: Option<String>,
    /// ISO-style country code (e.g. `"US"`).
    pub country_code: Option<String>,
    /// Admin level 1 long name (US state, province).
    pub admin_area_level_1: Option<String>,
    /// Admin level 1 short code (e.g. `"CA"`).
    pub admin_area_level_1_code: Option<String>,
    /// Admin level 2 (US county).
    pub admin_area_level_2: Option<String>,
    /// Admin level 3.
    pub admin_area_level_3: Option<String>,
    /// Admin level 4.
    pub admin_area_level_4: Option<String>,
    /// Admin level 5.
    pub admin_area_level_5: Option<String>,
    /// Locality (city, town).
    pub locality: Option<String>,
    /// Sublocality level 1 (borough, district).
    pub sublocality_level_1: Option<String>,
    /// Sublocality level 2.
    pub sublocality_level_2: Option<String>,
    /// Sublocality level 3.
    pub sublocality_level_3: Option<String>,
    /// Sublocality level 4.
    pub sublocality_level_4: Option<String>,
    /// Sublocality level 5.
    pub sublocality_level_5: Option<String>,
    /// Neighborhood name.
    pub neighborhood: Option<String>,
    /// Ward (used in some national address schemes).
    pub ward: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
}

/// Extracts all canonical named fields from a component list.
#[must_use]
pub fn extract_fields(components: &[AddressComponent]) -> AddressFields {
    AddressFields {
        country: find_component(components, &["country"], false),
        country_code: find_component(components, &["country"], true),
        admin_area_level_1: find_component(components, &["administrative_area_level_1"], false),
        admin_area_level_1_code: find_component(
            components,
            &["administrative_area_level_1"],
            true,
        ),
        admin_area_level_2: find_component(components, &["administrative_area_level_2"], false),
        admin_area_level_3: find_component(components, &["administrative_area_level_3"], false),
        admin_area_level_4: find_component(components, &["administrative_area_level_4"], false),
        admin_area_level_5: find_component(components, &["administrative_area_level_5"], false),
        locality: find_component(components, &["locality", "postal_town"], false),
        sublocality_level_1: find_component(
            components,
            &["sublocality_level_1", "sublocality"],
            false,
        ),
        sublocality_level_2: find_component(components, &["sublocality_level_2"], false),
        sublocality_level_3: find_component(components, &["sublocality_level_3"], false),
        sublocality_level_4: find_component(components, &["sublocality_level_4"], false),
        sublocality_level_5: find_component(components, &["sublocality_level_5"], false),
        neighborhood: find_component(components, &["neighborhood"], false),
        ward: find_component(components, &["ward"], false),
        postal_code: find_component(components, &["postal_code"], false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(long: &str, short: &str, types: &[&str]) -> AddressComponent {
        AddressComponent {
            long_name: long.to_string(),
            short_name: short.to_string(),
            types: types.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    #[test]
    fn classifies_country() {
        let components = vec![
            component("San Francisco", "SF", &["locality", "political"]),
            component("United States", "US", &["country", "political"]),
        ];
        let classification = classify(&components);
        assert_eq!(classification.region_type, RegionType::Country);
        assert_eq!(classification.region_name, "United States");
    }

    #[test]
    fn classifies_state_when_no_country() {
        let components = vec![component(
            "California",
            "CA",
            &["administrative_area_level_1", "political"],
        )];
        let classification = classify(&components);
        assert_eq!(classification.region_type, RegionType::State);
        assert_eq!(classification.region_name, "California");
    }

    #[test]
    fn classifies_city() {
        let components = vec![component("Chicago", "Chicago", &["locality", "political"])];
        assert_eq!(classify(&components).region_type, RegionType::City);
    }

    #[test]
    fn classifies_postal_code() {
        let components = vec![component("94103", "94103", &["postal_code"])];
        let classification = classify(&components);
        assert_eq!(classification.region_type, RegionType::PostalCode);
        assert_eq!(classification.region_name, "94103");
    }

    #[test]
    fn priority_order_prefers_coarser_level() {
        // A state result still includes the country component; the
        // country wins because it is coarser.
        let components = vec![
            component(
                "Massachusetts",
                "MA",
                &["administrative_area_level_1", "political"],
            ),
            component("United States", "US", &["country", "political"]),
        ];
        assert_eq!(classify(&components).region_type, RegionType::Country);
    }

    #[test]
    fn unmatched_components_are_unknown() {
        let components = vec![component("Main St", "Main St", &["route"])];
        assert_eq!(classify(&components), RegionClassification::unknown());
    }

    #[test]
    fn empty_components_are_unknown() {
        let classification = classify(&[]);
        assert_eq!(classification.region_type, RegionType::Unknown);
        assert_eq!(classification.region_name, "");
    }

    #[test]
    fn find_component_short_and_long() {
        let components = vec![component(
            "California",
            "CA",
            &["administrative_area_level_1"],
        )];
        assert_eq!(
            find_component(&components, &["administrative_area_level_1"], false),
            Some("California".to_string())
        );
        assert_eq!(
            find_component(&components, &["administrative_area_level_1"], true),
            Some("CA".to_string())
        );
        assert_eq!(find_component(&components, &["locality"], false), None);
    }

    #[test]
    fn find_component_matches_any_tag() {
        let components = vec![component("Brooklyn", "Brooklyn", &["sublocality"])];
        assert_eq!(
            find_component(&components, &["sublocality_level_1", "sublocality"], false),
            Some("Brooklyn".to_string())
        );
    }

    #[test]
    fn extracts_superset_fields() {
        let components = vec![
            component("94103", "94103", &["postal_code"]),
            component("Mission District", "Mission District", &["neighborhood"]),
            component("San Francisco", "SF", &["locality", "political"]),
            component(
                "San Francisco County",
                "San Francisco County",
                &["administrative_area_level_2", "political"],
            ),
            component(
                "California",
                "CA",
                &["administrative_area_level_1", "political"],
            ),
            component("United States", "US", &["country", "political"]),
        ];

        let fields = extract_fields(&components);
        assert_eq!(fields.country.as_deref(), Some("United States"));
        assert_eq!(fields.country_code.as_deref(), Some("US"));
        assert_eq!(fields.admin_area_level_1.as_deref(), Some("California"));
        assert_eq!(fields.admin_area_level_1_code.as_deref(), Some("CA"));
        assert_eq!(
            fields.admin_area_level_2.as_deref(),
            Some("San Francisco County")
        );
        assert_eq!(fields.locality.as_deref(), Some("San Francisco"));
        assert_eq!(fields.neighborhood.as_deref(), Some("Mission District"));
        assert_eq!(fields.postal_code.as_deref(), Some("94103"));
        assert_eq!(fields.ward, None);
        assert_eq!(fields.sublocality_level_1, None);
    }

    #[test]
    fn classify_is_idempotent() {
        let components = vec![component("Japan", "JP", &["country", "political"])];
        assert_eq!(classify(&components), classify(&components));
    }
}
