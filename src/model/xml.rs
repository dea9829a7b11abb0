//! XML schema (XSD) structures

use serde::{Deserialize, Serialize};

use super::{ItemList, MainObject, Reference, main_object_asset};
use crate::schema::catalog;

/// Imported XML schema document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XmlSchemaDefinition {
    #[serde(flatten)]
    pub base: MainObject,

    pub target_namespace: Option<String>,
    pub path: Option<String>,
    pub xsd_elements: Option<ItemList>,
    pub xsd_complex_types: Option<ItemList>,
    pub xsd_simple_types: Option<ItemList>,
    pub xsd_attributes: Option<ItemList>,
}

main_object_asset!(
    XmlSchemaDefinition,
    "xml_schema_definition",
    catalog::XML_SCHEMA_DEFINITION
);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XsdElement {
    #[serde(flatten)]
    pub base: MainObject,

    /// Lower bound, as written in the schema
    pub min_occurs: Option<String>,
    /// Upper bound, as written in the schema (may be `unbounded`)
    pub max_occurs: Option<String>,
    pub nillable: Option<bool>,
    pub default_value: Option<String>,
    pub xml_schema_definition: Option<Reference>,
    /// Simple or complex type of the element
    pub element_type: Option<Reference>,
    pub parent_complex_types: Option<ItemList>,
}

main_object_asset!(XsdElement, "xsd_element", catalog::XSD_ELEMENT);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XsdComplexType {
    #[serde(flatten)]
    pub base: MainObject,

    #[serde(rename = "abstract")]
    pub is_abstract: Option<bool>,
    pub mixed: Option<bool>,
    pub xml_schema_definition: Option<Reference>,
    pub base_type: Option<Reference>,
    pub xsd_elements: Option<ItemList>,
    pub xsd_attributes: Option<ItemList>,
}

main_object_asset!(XsdComplexType, "xsd_complex_type", catalog::XSD_COMPLEX_TYPE);

/// Simple type with its restriction facets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XsdSimpleType {
    #[serde(flatten)]
    pub base: MainObject,

    /// Name of the built-in type being restricted
    pub base_type: Option<String>,
    pub length: Option<i64>,
    pub min_length: Option<i64>,
    pub max_length: Option<i64>,
    pub pattern: Option<String>,
    pub enumeration: Option<Vec<String>>,
    pub xml_schema_definition: Option<Reference>,
}

main_object_asset!(XsdSimpleType, "xsd_simple_type", catalog::XSD_SIMPLE_TYPE);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XsdAttribute {
    #[serde(flatten)]
    pub base: MainObject,

    /// `required`, `optional` or `prohibited`
    #[serde(rename = "use")]
    pub usage: Option<String>,
    pub default_value: Option<String>,
    pub fixed_value: Option<String>,
    pub xml_schema_definition: Option<Reference>,
    pub attribute_type: Option<Reference>,
}

main_object_asset!(XsdAttribute, "xsd_attribute", catalog::XSD_ATTRIBUTE);
