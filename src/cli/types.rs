//! Type listing command

use log::debug;

use crate::cli::{BaseFilter, CommandContext};
use crate::error::Result;
use crate::output::Formattable;
use crate::output::display::TypeDisplay;
use crate::schema::{self, BaseShape, TypeSchema};

/// Registered schemas, optionally restricted to one base shape
pub fn matching(base: Option<BaseFilter>) -> Vec<&'static TypeSchema> {
    let base = base.map(BaseShape::from);
    schema::registry()
        .iter()
        .copied()
        .filter(|s| base.is_none_or(|b| s.base == b))
        .collect()
}

/// Run the types command
pub fn run(ctx: &CommandContext, base: Option<BaseFilter>) -> Result<()> {
    let schemas = matching(base);
    debug!("Listing {} asset types", schemas.len());

    let rows: Vec<TypeDisplay> = schemas.into_iter().map(TypeDisplay::from).collect();
    rows.print(ctx.format)
}
