//! Request parameter command

use log::debug;

use crate::cli::schema::require;
use crate::cli::{CommandContext, PageArgs};
use crate::error::Result;
use crate::output::Formattable;
use crate::output::display::QueryParamDisplay;
use crate::query::{PropertyRequest, relationship_page};

/// What to request for a type
#[derive(Debug, Clone, Default)]
pub struct QuerySpec<'a> {
    pub properties: &'a [String],
    pub all: bool,
    pub relationship: Option<&'a str>,
}

/// Build the request parameters for a type
pub fn build(
    type_id: &str,
    spec: &QuerySpec<'_>,
    paging: &PageArgs,
    default_page_size: usize,
) -> Result<Vec<(&'static str, String)>> {
    let schema = require(type_id)?;

    if let Some(relationship) = spec.relationship {
        debug!("Paging relationship {} of {}", relationship, type_id);
        let params = relationship_page(
            schema,
            relationship,
            paging.begin.unwrap_or(0),
            Some(paging.resolve_page_size(default_page_size)),
        )?;
        return Ok(params);
    }

    let request = if spec.all {
        PropertyRequest::new(schema).all_properties()
    } else if spec.properties.is_empty() {
        PropertyRequest::new(schema)
    } else {
        PropertyRequest::with_properties(schema, spec.properties)?
    };

    let request = paging.apply(request, default_page_size);
    let paged = request.paged_properties();
    if !paged.is_empty() {
        debug!("Only the first page of {} is returned inline", paged.join(", "));
    }

    Ok(request.to_query_params())
}

/// Run the query command
pub fn run(
    ctx: &CommandContext,
    type_id: &str,
    spec: &QuerySpec<'_>,
    paging: &PageArgs,
) -> Result<()> {
    let params = build(type_id, spec, paging, ctx.page_size())?;

    let rows: Vec<QueryParamDisplay> = params.into_iter().map(QueryParamDisplay::from).collect();
    rows.print(ctx.format)
}
