//! Payload decoding command

use std::io::Read;

use colored::Colorize;
use log::debug;
use serde_json::Value;

use crate::cli::schema::require;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::{ModelError, Result};
use crate::model::{Payload, decode_payload};
use crate::output::Formattable;
use crate::output::display::AssetDisplay;
use crate::output::json::JsonOutput;

/// Read the payload from a file, or stdin for `None` and `-`
fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) if path != "-" => {
            debug!("Reading payload from {}", path);
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            debug!("Reading payload from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Decode a JSON document, rejecting unrecognized fields when strict
pub fn decode_str(input: &str, type_id: Option<&str>, strict: bool) -> Result<Payload> {
    if let Some(type_id) = type_id {
        require(type_id)?;
    }

    let value: Value = serde_json::from_str(input).map_err(ModelError::from)?;
    let payload = decode_payload(value, type_id)?;

    if strict {
        let mut fields: Vec<String> = payload
            .assets
            .iter()
            .flat_map(|a| a.unrecognized.iter().cloned())
            .collect();
        fields.sort();
        fields.dedup();
        if !fields.is_empty() {
            return Err(ModelError::UnrecognizedFields(fields).into());
        }
    }

    Ok(payload)
}

/// Run the decode command
pub fn run(
    ctx: &CommandContext,
    file: Option<&str>,
    type_id: Option<&str>,
    strict: bool,
) -> Result<()> {
    let input = read_input(file)?;
    let payload = decode_str(&input, type_id, strict || ctx.strict())?;

    match ctx.format {
        OutputFormat::Json => {
            let assets = payload
                .assets
                .iter()
                .map(|a| a.record.to_value())
                .collect::<std::result::Result<Vec<_>, _>>()?;
            let output = JsonOutput::new(assets).with_paging(payload.paging);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Table => {
            let rows: Vec<AssetDisplay> = payload.assets.iter().map(AssetDisplay::from).collect();
            rows.print(ctx.format)?;

            if let Some(paging) = payload.paging.as_ref().filter(|p| p.has_more()) {
                let total = paging
                    .num_total
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "?".to_string());
                let next = paging
                    .next_begin()
                    .map(|n| format!(", next page begins at {}", n))
                    .unwrap_or_default();
                eprintln!(
                    "{}",
                    format!("Showing {} of {} assets{}", payload.assets.len(), total, next).dimmed()
                );
            }
        }
    }

    Ok(())
}
