//! Gazetteer commands: `resolve`, `search` and `locations`.

use anyhow::{bail, Result};
use cesium_mcp_lib::gazetteer::{self, Location};
use serde_json::json;

use crate::{GlobalOptions, OutputFormat};

/// Handle the resolve subcommand.
///
/// Unknown names are an error; near misses are listed in the message.
pub fn handle_resolve(global: &GlobalOptions, name: &str) -> Result<()> {
    let Some(location) = gazetteer::find(name) else {
        let suggestions = gazetteer::suggest(name, 3);
        if suggestions.is_empty() {
            bail!("Location '{}' not found", name);
        }
        bail!(
            "Location '{}' not found. Did you mean: {}?",
            name,
            suggestions.join(", ")
        );
    };

    match global.format {
        OutputFormat::Json => println!(
            "{}",
            json!({
                "name": location.name,
                "longitude": location.longitude,
                "latitude": location.latitude,
            })
        ),
        OutputFormat::Text => println!(
            "{}: longitude={:.6}, latitude={:.6}",
            location.name, location.longitude, location.latitude
        ),
    }
    Ok(())
}

/// Handle the search subcommand.
pub fn handle_search(global: &GlobalOptions, prefix: &str, limit: usize) -> Result<()> {
    let matches = gazetteer::search(prefix, limit);
    print_locations(global, &matches)
}

/// Handle the locations subcommand.
pub fn handle_list(global: &GlobalOptions) -> Result<()> {
    let all: Vec<&Location> = gazetteer::list_all().iter().collect();
    print_locations(global, &all)
}

fn print_locations(global: &GlobalOptions, locations: &[&Location]) -> Result<()> {
    match global.format {
        OutputFormat::Json => println!("{}", gazetteer::to_json(locations.iter().copied())?),
        OutputFormat::Text => {
            if locations.is_empty() {
                println!("No matching locations.");
                return Ok(());
            }
            println!("Locations ({}):", locations.len());
            for location in locations {
                println!(
                    "  {:<32} {:>12.6} {:>11.6}",
                    location.name, location.longitude, location.latitude
                );
            }
        }
    }
    Ok(())
}
