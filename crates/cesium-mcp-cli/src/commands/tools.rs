//! `tools` subcommand: print the MCP tool catalog.

use anyhow::Result;
use cesium_mcp::tools;

use crate::{GlobalOptions, OutputFormat};

pub fn handle_list_tools(global: &GlobalOptions) -> Result<()> {
    match global.format {
        OutputFormat::Json => println!("{}", tools::definitions_json()),
        OutputFormat::Text => {
            let catalog = tools::catalog()
                .as_array()
                .map(Vec::as_slice)
                .unwrap_or_default();
            println!("Available tools ({}):", catalog.len());
            for tool in catalog {
                println!(
                    "  {:<24} {}",
                    tool["name"].as_str().unwrap_or_default(),
                    tool["description"].as_str().unwrap_or_default()
                );
            }
        }
    }
    Ok(())
}
