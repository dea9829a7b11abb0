//! Display models for table and JSON output
//!
//! Display models turn schema entries and decoded records into rows with
//! CLI-friendly column names.

use serde::Serialize;
use tabled::Tabled;

use crate::model::Decoded;
use crate::schema::{Property, TypeSchema};

/// Truncate string to max length with ellipsis
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Registered asset type
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TypeDisplay {
    #[tabled(rename = "TYPE ID")]
    pub type_id: &'static str,

    #[tabled(rename = "NAME")]
    pub name: &'static str,

    #[tabled(rename = "BASE")]
    pub base: &'static str,

    /// Number of declared properties
    #[tabled(rename = "PROPERTIES")]
    pub properties: usize,

    /// Number of paged relationships
    #[tabled(rename = "PAGED")]
    pub paged: usize,
}

impl From<&TypeSchema> for TypeDisplay {
    fn from(schema: &TypeSchema) -> Self {
        Self {
            type_id: schema.type_id,
            name: schema.display_name,
            base: schema.base.as_str(),
            properties: schema.properties().count(),
            paged: schema.paged_relationship_properties().len(),
        }
    }
}

/// One property of a type schema
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PropertyDisplay {
    #[tabled(rename = "PROPERTY")]
    pub name: &'static str,

    #[tabled(rename = "KIND")]
    pub kind: &'static str,

    /// `inline` for non-relational properties, `paged` otherwise
    #[tabled(rename = "REQUEST")]
    pub request: &'static str,
}

impl From<&Property> for PropertyDisplay {
    fn from(prop: &Property) -> Self {
        Self {
            name: prop.name,
            kind: prop.kind.as_str(),
            request: if prop.kind.is_paged() { "paged" } else { "inline" },
        }
    }
}

/// Decoded asset summary
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AssetDisplay {
    #[tabled(rename = "TYPE")]
    pub type_id: String,

    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    /// Context path including the asset itself
    #[tabled(rename = "PATH")]
    pub path: String,

    /// Payload keys that were not mapped to a property
    #[tabled(rename = "IGNORED")]
    pub ignored: String,
}

impl From<&Decoded> for AssetDisplay {
    fn from(decoded: &Decoded) -> Self {
        let record = &decoded.record;
        Self {
            type_id: record.type_id().to_string(),
            id: record.id().unwrap_or("-").to_string(),
            name: truncate_string(record.name().unwrap_or("-"), 40),
            path: truncate_string(
                &record.reference().qualified_name().unwrap_or_else(|| "-".to_string()),
                60,
            ),
            ignored: if decoded.unrecognized.is_empty() {
                "-".to_string()
            } else {
                decoded.unrecognized.join(", ")
            },
        }
    }
}

/// One request parameter
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct QueryParamDisplay {
    #[tabled(rename = "PARAMETER")]
    pub name: &'static str,

    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl From<(&'static str, String)> for QueryParamDisplay {
    fn from((name, value): (&'static str, String)) -> Self {
        Self { name, value }
    }
}
