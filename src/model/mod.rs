//! Typed asset records of the IGC catalog
//!
//! One struct per asset type, each flattening one of the two base shapes
//! ([`Reference`] or [`MainObject`]). Wire names follow the catalog exactly;
//! names that are not valid Rust identifiers are renamed with serde.
//! Unknown fields are ignored on input.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ModelError;
use crate::schema::TypeSchema;

/// Implement [`Asset`] for a record that flattens [`MainObject`] as `base`
macro_rules! main_object_asset {
    ($ty:ty, $type_id:literal, $schema:path) => {
        impl $crate::model::Asset for $ty {
            const TYPE_ID: &'static str = $type_id;

            fn schema() -> &'static $crate::schema::TypeSchema {
                &$schema
            }

            fn reference(&self) -> &$crate::model::Reference {
                &self.base.reference
            }

            fn name(&self) -> Option<&str> {
                self.base.display_name()
            }
        }
    };
}

pub(crate) use main_object_asset;

mod base;
mod common;
mod database;
mod datastage;
mod files;
mod glossary;
mod record;
mod reference;
mod xml;

#[cfg(test)]
pub(crate) mod fixtures;

pub use base::{Lineage, MainObject};
pub use common::{Host, Label, Note};
pub use database::{Database, DatabaseColumn, DatabaseSchema, DatabaseTable};
pub use datastage::{DsJob, Link, Stage, StageColumn, TransformationProject};
pub use files::{AmazonS3Bucket, DataFile, DataFileField, DataFileFolder, DataFileRecord};
pub use glossary::{Category, InformationGovernanceRule, Term};
pub use record::{AssetRecord, Decoded, Payload, decode_payload, unrecognized_fields};
pub use reference::{ItemList, Paging, Reference};
pub use xml::{XmlSchemaDefinition, XsdAttribute, XsdComplexType, XsdElement, XsdSimpleType};

/// Read the type discriminator of a raw payload (`_type`, else `type`)
pub fn type_tag(value: &Value) -> Option<&str> {
    value
        .get("_type")
        .or_else(|| value.get("type"))
        .and_then(Value::as_str)
}

/// A typed catalog asset record
pub trait Asset: Serialize + DeserializeOwned {
    /// Wire `_type` discriminator of this record type
    const TYPE_ID: &'static str;

    /// Field classification of this record type
    fn schema() -> &'static TypeSchema;

    /// Reference header of the record
    fn reference(&self) -> &Reference;

    /// Asset name
    fn name(&self) -> Option<&str>;

    /// Whether a decoded record is exactly this type.
    ///
    /// Compares type-ids only. A record of a related type (an
    /// `amazon_s3_bucket` is a kind of `data_file_folder` in the catalog)
    /// does not match.
    fn is_instance(record: &AssetRecord) -> bool {
        record.type_id() == Self::TYPE_ID
    }

    /// Decode from a raw payload.
    ///
    /// A payload without a type tag is accepted; one tagged with a different
    /// type is rejected.
    fn from_value(value: Value) -> Result<Self, ModelError> {
        if let Some(found) = type_tag(&value)
            && found != Self::TYPE_ID
        {
            return Err(ModelError::TypeMismatch {
                expected: Self::TYPE_ID.to_string(),
                found: found.to_string(),
            });
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Encode to a wire payload, stamping `_type` when the header has none
    fn to_value(&self) -> Result<Value, ModelError> {
        let mut value = serde_json::to_value(self)?;
        if let Value::Object(ref mut map) = value {
            map.entry("_type")
                .or_insert_with(|| Value::String(Self::TYPE_ID.to_string()));
        }
        Ok(value)
    }
}
