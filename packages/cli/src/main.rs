#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the region resolution toolkit.
//!
//! Resolves free-text place queries into classified regions with
//! boundary polygons and camera commands, fetches autocomplete
//! predictions, and looks up the US FIPS registry. All results print as
//! pretty JSON on stdout; diagnostics go through `log` on stderr.

use clap::{Parser, Subcommand};
use region_map_camera::PixelPanel;
use region_map_geocoder::service_registry::{all_services, enabled_services};
use region_map_resolver::{resolve_place, resolve_with_panel, suggest};
use serde_json::json;

#[derive(Parser)]
#[command(name = "region_map_cli", about = "Region resolution toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a free-text place query into a region
    Search {
        /// Place query (e.g., "Santa Clara County", "94103")
        query: String,
        /// Map panel width in pixels; with --height, switches zoom from
        /// the coarse span heuristic to an exact Mercator fit
        #[arg(long, requires = "height")]
        width: Option<f64>,
        /// Map panel height in pixels
        #[arg(long, requires = "width")]
        height: Option<f64>,
        /// Emit the camera command without an animated transition
        #[arg(long)]
        no_animate: bool,
    },
    /// Fetch autocomplete predictions for a partial query
    Suggest {
        /// Partial place query
        input: String,
    },
    /// Resolve a place id from a previous suggest into a region
    Place {
        /// Provider place identifier
        place_id: String,
        /// Map panel width in pixels
        #[arg(long, requires = "height")]
        width: Option<f64>,
        /// Map panel height in pixels
        #[arg(long, requires = "width")]
        height: Option<f64>,
    },
    /// Look up the FIPS registry by state abbreviation, 2-digit state
    /// FIPS code, or 5-digit full code
    Fips {
        /// Code to look up (e.g., "CA", "06", "06085")
        code: String,
    },
    /// List configured geocoding providers in priority order
    Providers,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            query,
            width,
            height,
            no_animate,
        } => {
            log::info!(
                "Provider order: {}",
                enabled_services()
                    .iter()
                    .map(|s| s.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );

            let client = reqwest::Client::builder()
                .user_agent("region-map/1.0")
                .build()?;

            let panel = width
                .zip(height)
                .map(|(width, height)| PixelPanel::new(width, height));

            let mut region = resolve_with_panel(&client, &query, panel).await?;
            if no_animate {
                region.camera.animate = false;
            }

            println!("{}", serde_json::to_string_pretty(&region)?);
        }
        Commands::Place {
            place_id,
            width,
            height,
        } => {
            let client = reqwest::Client::builder()
                .user_agent("region-map/1.0")
                .build()?;

            let panel = width
                .zip(height)
                .map(|(width, height)| PixelPanel::new(width, height));

            let region = resolve_place(&client, &place_id, panel).await?;
            println!("{}", serde_json::to_string_pretty(&region)?);
        }
        Commands::Suggest { input } => {
            let client = reqwest::Client::builder()
                .user_agent("region-map/1.0")
                .build()?;

            let predictions = suggest(&client, &input).await?;
            println!("{}", serde_json::to_string_pretty(&predictions)?);
        }
        Commands::Fips { code } => {
            let report = fips_report(&code).ok_or_else(|| format!("Unknown code: {code}"))?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Providers => {
            let services = all_services();
            println!("{:<12} {:<10} {:<8} NAME", "ID", "PRIORITY", "ENABLED");
            println!("{}", "-".repeat(50));
            for service in &services {
                println!(
                    "{:<12} {:<10} {:<8} {}",
                    service.id, service.priority, service.enabled, service.name
                );
            }
        }
    }

    Ok(())
}

/// Builds the JSON report for a `fips` lookup, or `None` when the code
/// matches nothing in the registry.
fn fips_report(code: &str) -> Option<serde_json::Value> {
    if region_map_fips::is_state_code(code) {
        let state_fips = region_map_fips::state_fips(code)?;
        return Some(state_report(&code.to_uppercase(), state_fips));
    }

    if region_map_fips::is_full_fips_code(code) {
        let (state_fips, county_fips) = region_map_fips::parse_full_fips(code)?;
        let state_code = region_map_fips::state_by_fips(state_fips)?;
        let county = region_map_fips::counties_by_state(state_code)
            .into_iter()
            .find(|record| record.county_fips == county_fips)?;
        return Some(json!({
            "fullCode": code,
            "county": county,
            "region": region_map_fips::state_region(state_code),
        }));
    }

    // Bare 2-digit state FIPS code.
    let state_code = region_map_fips::state_by_fips(code)?;
    Some(state_report(state_code, code))
}

fn state_report(state_code: &str, state_fips: &str) -> serde_json::Value {
    json!({
        "stateCode": state_code,
        "stateFips": state_fips,
        "region": region_map_fips::state_region(state_code),
        "counties": region_map_fips::counties_by_state(state_code),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_abbreviation_lookup() {
        let report = fips_report("ca").expect("CA resolves");
        assert_eq!(report["stateCode"], "CA");
        assert_eq!(report["stateFips"], "06");
        assert_eq!(report["region"], "West");
    }

    #[test]
    fn state_fips_lookup() {
        let report = fips_report("25").expect("25 resolves");
        assert_eq!(report["stateCode"], "MA");
        assert_eq!(report["region"], "Northeast");
    }

    #[test]
    fn full_code_lookup() {
        let report = fips_report("06085").expect("06085 resolves");
        assert_eq!(report["fullCode"], "06085");
        assert_eq!(report["county"]["name"], "Santa Clara County");
        assert_eq!(report["region"], "West");
    }

    #[test]
    fn unknown_codes_are_none() {
        assert!(fips_report("ZZ").is_none());
        assert!(fips_report("99").is_none());
        assert!(fips_report("1234").is_none());
    }
}
