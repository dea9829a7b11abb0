//! Type-tag dispatch over every known asset record type

use log::debug;
use serde_json::Value;

use super::{
    AmazonS3Bucket, Asset, Category, DataFile, DataFileField, DataFileFolder, DataFileRecord,
    Database, DatabaseColumn, DatabaseSchema, DatabaseTable, DsJob, Host,
    InformationGovernanceRule, ItemList, Label, Link, MainObject, Note, Paging, Reference, Stage,
    StageColumn, Term, TransformationProject, XmlSchemaDefinition, XsdAttribute, XsdComplexType,
    XsdElement, XsdSimpleType, type_tag,
};
use crate::error::ModelError;
use crate::schema::{self, HEADER_FIELDS, TypeSchema, catalog};

macro_rules! asset_records {
    ($($variant:ident),+ $(,)?) => {
        /// A decoded catalog asset of any type.
        ///
        /// Tags missing from the schema registry decode as [`AssetRecord::Other`]
        /// with only the main object properties.
        #[derive(Debug, Clone, PartialEq)]
        pub enum AssetRecord {
            $($variant($variant),)+
            Other(MainObject),
        }

        impl AssetRecord {
            fn decode_as(type_id: &str, value: Value) -> Result<Self, ModelError> {
                $(
                    if type_id == <$variant as Asset>::TYPE_ID {
                        return Ok(AssetRecord::$variant(serde_json::from_value(value)?));
                    }
                )+
                debug!("Unknown asset type `{}`, decoding common properties only", type_id);
                Ok(AssetRecord::Other(serde_json::from_value(value)?))
            }

            /// Type-id of the record
            pub fn type_id(&self) -> &str {
                match self {
                    $(AssetRecord::$variant(_) => <$variant as Asset>::TYPE_ID,)+
                    AssetRecord::Other(obj) => {
                        obj.reference.asset_type.as_deref().unwrap_or_default()
                    }
                }
            }

            /// Reference header of the record
            pub fn reference(&self) -> &Reference {
                match self {
                    $(AssetRecord::$variant(asset) => asset.reference(),)+
                    AssetRecord::Other(obj) => &obj.reference,
                }
            }

            pub fn name(&self) -> Option<&str> {
                match self {
                    $(AssetRecord::$variant(asset) => asset.name(),)+
                    AssetRecord::Other(obj) => obj.display_name(),
                }
            }

            /// Encode to a wire payload
            pub fn to_value(&self) -> Result<Value, ModelError> {
                match self {
                    $(AssetRecord::$variant(asset) => asset.to_value(),)+
                    AssetRecord::Other(obj) => Ok(serde_json::to_value(obj)?),
                }
            }
        }

        $(
            impl From<$variant> for AssetRecord {
                fn from(asset: $variant) -> Self {
                    AssetRecord::$variant(asset)
                }
            }
        )+
    };
}

asset_records!(
    Host,
    Label,
    Note,
    DataFileFolder,
    AmazonS3Bucket,
    DataFile,
    DataFileRecord,
    DataFileField,
    Database,
    DatabaseSchema,
    DatabaseTable,
    DatabaseColumn,
    TransformationProject,
    DsJob,
    Stage,
    Link,
    StageColumn,
    XmlSchemaDefinition,
    XsdElement,
    XsdComplexType,
    XsdSimpleType,
    XsdAttribute,
    Term,
    Category,
    InformationGovernanceRule,
);

impl AssetRecord {
    /// Decode a payload, picking the record type from its `_type` tag.
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        let type_id = type_tag(&value)
            .ok_or(ModelError::MissingTypeTag)?
            .to_string();
        Self::decode_as(&type_id, value)
    }

    /// Decode a payload as the given type.
    ///
    /// An untagged payload is stamped with `type_id`; a payload tagged with
    /// another type is rejected.
    pub fn from_value_as(mut value: Value, type_id: &str) -> Result<Self, ModelError> {
        if let Some(found) = type_tag(&value) {
            if found != type_id {
                return Err(ModelError::TypeMismatch {
                    expected: type_id.to_string(),
                    found: found.to_string(),
                });
            }
        } else if let Value::Object(ref mut map) = value {
            map.insert("_type".to_string(), Value::String(type_id.to_string()));
        }
        Self::decode_as(type_id, value)
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Schema of the record type, `None` for unregistered types
    pub fn schema(&self) -> Option<&'static TypeSchema> {
        schema::lookup(self.type_id())
    }

    pub fn id(&self) -> Option<&str> {
        self.reference().id.as_deref()
    }

    /// Whether the record is exactly of type `T` (no subtype matching)
    pub fn is<T: Asset>(&self) -> bool {
        T::is_instance(self)
    }
}

/// Keys of a raw payload that are neither header fields nor declared
/// properties of the schema.
///
/// With no schema, the main object properties are assumed.
pub fn unrecognized_fields(value: &Value, schema: Option<&TypeSchema>) -> Vec<String> {
    let Some(map) = value.as_object() else {
        return Vec::new();
    };

    let known: Vec<&str> = match schema {
        Some(schema) => schema.all_properties(),
        None => catalog::MAIN_OBJECT_PROPERTIES
            .iter()
            .map(|p| p.name)
            .collect(),
    };

    let mut fields: Vec<String> = map
        .keys()
        .filter(|k| !HEADER_FIELDS.contains(&k.as_str()) && !known.contains(&k.as_str()))
        .cloned()
        .collect();
    fields.sort();
    fields
}

/// One decoded asset with the payload keys that were ignored
#[derive(Debug, Clone)]
pub struct Decoded {
    pub record: AssetRecord,
    pub unrecognized: Vec<String>,
}

impl Decoded {
    fn from_value(value: Value, forced_type: Option<&str>) -> Result<Self, ModelError> {
        let type_id = match forced_type {
            Some(type_id) => type_id.to_string(),
            None => type_tag(&value)
                .ok_or(ModelError::MissingTypeTag)?
                .to_string(),
        };

        let unrecognized = unrecognized_fields(&value, schema::lookup(&type_id));
        if !unrecognized.is_empty() {
            debug!(
                "Ignoring {} unrecognized field(s) on `{}`: {}",
                unrecognized.len(),
                type_id,
                unrecognized.join(", ")
            );
        }

        let record = AssetRecord::from_value_as(value, &type_id)?;
        Ok(Self {
            record,
            unrecognized,
        })
    }
}

/// Decoded contents of a catalog response
#[derive(Debug, Clone)]
pub struct Payload {
    pub assets: Vec<Decoded>,
    /// Paging state when the response was a paged envelope
    pub paging: Option<Paging>,
}

/// Decode a response body holding one asset, an array of assets, or a
/// paged `{"paging": ..., "items": [...]}` envelope of assets.
///
/// With `forced_type`, untagged assets are decoded as that type and assets
/// tagged with a different type are rejected.
pub fn decode_payload(value: Value, forced_type: Option<&str>) -> Result<Payload, ModelError> {
    let is_envelope = type_tag(&value).is_none()
        && value.get("items").is_some_and(Value::is_array);

    let (items, paging) = match value {
        Value::Array(items) => (items, None),
        envelope if is_envelope => {
            let list: ItemList<Value> = serde_json::from_value(envelope)?;
            (list.items, Some(list.paging))
        }
        single => (vec![single], None),
    };

    let assets = items
        .into_iter()
        .map(|item| Decoded::from_value(item, forced_type))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Decoded {} asset(s)", assets.len());

    Ok(Payload { assets, paging })
}
