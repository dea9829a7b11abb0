//! Schema inspection command

use log::debug;

use crate::cli::CommandContext;
use crate::error::{ModelError, Result};
use crate::output::Formattable;
use crate::output::display::PropertyDisplay;
use crate::schema::{self, TypeSchema};

/// Look up a type-id, failing with a hint when it is not registered
pub fn require(type_id: &str) -> Result<&'static TypeSchema> {
    schema::lookup(type_id).ok_or_else(|| ModelError::UnknownType(type_id.to_string()).into())
}

/// Rows for a schema's properties
pub fn rows(schema: &TypeSchema, paged_only: bool) -> Vec<PropertyDisplay> {
    schema
        .properties()
        .filter(|p| !paged_only || p.kind.is_paged())
        .map(PropertyDisplay::from)
        .collect()
}

/// Run the schema command
pub fn run(ctx: &CommandContext, type_id: &str, paged_only: bool) -> Result<()> {
    let schema = require(type_id)?;
    debug!(
        "Schema {} ({}): {} properties",
        schema.type_id,
        schema.base.as_str(),
        schema.properties().count()
    );

    rows(schema, paged_only).print(ctx.format)
}
