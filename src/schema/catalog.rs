//! Type table for every asset type the model layer knows about

use super::{BaseShape, Property, TypeSchema};

/// Properties shared by every type extending the main object shape
pub const MAIN_OBJECT_PROPERTIES: &[Property] = &[
    Property::scalar("name"),
    Property::scalar("short_description"),
    Property::scalar("long_description"),
    Property::paged("labels"),
    Property::paged("stewards"),
    Property::paged("assigned_to_terms"),
    Property::paged("implements_rules"),
    Property::paged("governed_by_rules"),
    Property::scalar("created_by"),
    Property::scalar("created_on"),
    Property::scalar("modified_by"),
    Property::scalar("modified_on"),
];

/// Data flow relationships shared by data-bearing assets
pub const LINEAGE_PROPERTIES: &[Property] = &[
    Property::paged("read_by_(static)"),
    Property::paged("written_by_(static)"),
    Property::paged("read_by_(design)"),
    Property::paged("written_by_(design)"),
    Property::paged("read_by_(operational)"),
    Property::paged("written_by_(operational)"),
    Property::paged("read_by_(user_defined)"),
    Property::paged("written_by_(user_defined)"),
    Property::paged("impacted_by"),
    Property::paged("impacts_on"),
];

// ============================================================================
// Common
// ============================================================================

pub static HOST: TypeSchema = TypeSchema {
    type_id: "host",
    display_name: "Host",
    base: BaseShape::MainObject,
    groups: &[
        MAIN_OBJECT_PROPERTIES,
        &[
            Property::scalar("ip_address"),
            Property::scalar("platform"),
            Property::paged("data_file_folders"),
            Property::paged("databases"),
            Property::paged("data_connections"),
        ],
    ],
};

pub static LABEL: TypeSchema = TypeSchema {
    type_id: "label",
    display_name: "Label",
    base: BaseShape::MainObject,
    groups: &[MAIN_OBJECT_PROPERTIES, &[Property::paged("assets")]],
};

pub static NOTE: TypeSchema = TypeSchema {
    type_id: "note",
    display_name: "Note",
    base: BaseShape::Reference,
    groups: &[&[
        Property::scalar("subject"),
        Property::scalar("note"),
        Property::scalar("status"),
        Property::reference("belonging_to"),
        Property::scalar("created_by"),
        Property::scalar("created_on"),
        Property::scalar("modified_by"),
        Property::scalar("modified_on"),
    ]],
};

// ============================================================================
// Files
// ============================================================================

pub static DATA_FILE_FOLDER: TypeSchema = TypeSchema {
    type_id: "data_file_folder",
    display_name: "Data File Folder",
    base: BaseShape::MainObject,
    groups: &[
        MAIN_OBJECT_PROPERTIES,
        &[
            Property::scalar("path"),
            Property::reference("host"),
            Property::reference("parent_folder"),
            Property::paged("data_file_folders"),
            Property::paged("data_files"),
            Property::paged("in_collections"),
        ],
    ],
};

pub static AMAZON_S3_BUCKET: TypeSchema = TypeSchema {
    type_id: "amazon_s3_bucket",
    display_name: "Amazon S3 Bucket",
    base: BaseShape::MainObject,
    groups: &[
        MAIN_OBJECT_PROPERTIES,
        LINEAGE_PROPERTIES,
        &[
            Property::scalar("path"),
            Property::scalar("region"),
            Property::reference("host"),
            Property::paged("data_file_folders"),
            Property::paged("data_files"),
            Property::paged("in_collections"),
        ],
    ],
};

pub static DATA_FILE: TypeSchema = TypeSchema {
    type_id: "data_file",
    display_name: "Data File",
    base: BaseShape::MainObject,
    groups: &[
        MAIN_OBJECT_PROPERTIES,
        LINEAGE_PROPERTIES,
        &[
            Property::scalar("path"),
            Property::scalar("format"),
            Property::scalar("size"),
            Property::reference("host"),
            Property::reference("parent_folder"),
            Property::paged("data_file_records"),
        ],
    ],
};

pub static DATA_FILE_RECORD: TypeSchema = TypeSchema {
    type_id: "data_file_record",
    display_name: "Data File Record",
    base: BaseShape::MainObject,
    groups: &[
        MAIN_OBJECT_PROPERTIES,
        LINEAGE_PROPERTIES,
        &[
            Property::reference("data_file"),
            Property::paged("data_file_fields"),
        ],
    ],
};

pub static DATA_FILE_FIELD: TypeSchema = TypeSchema {
    type_id: "data_file_field",
    display_name: "Data File Field",
    base: BaseShape::MainObject,
    groups: &[
        MAIN_OBJECT_PROPERTIES,
        LINEAGE_PROPERTIES,
        &[
            Property::scalar("data_type"),
            Property::scalar("length"),
            Property::scalar("position"),
            Property::scalar("nullable"),
            Property::reference("data_file_record"),
        ],
    ],
};

// ============================================================================
// Databases
// ============================================================================

pub static DATABASE: TypeSchema = TypeSchema {
    type_id: "database",
    display_name: "Database",
    base: BaseShape::MainObject,
    groups: &[
        MAIN_OBJECT_PROPERTIES,
        &[
            Property::scalar("dbms"),
            Property::scalar("dbms_version"),
            Property::reference("host"),
            Property::paged("database_schemas"),
        ],
    ],
};

pub static DATABASE_SCHEMA: TypeSchema = TypeSchema {
    type_id: "database_schema",
    display_name: "Database Schema",
    base: BaseShape::MainObject,
    groups: &[
        MAIN_OBJECT_PROPERTIES,
        LINEAGE_PROPERTIES,
        &[
            Property::reference("database"),
            Property::paged("database_tables"),
        ],
    ],
};

pub static DATABASE_TABLE: TypeSchema = TypeSchema {
    type_id: "database_table",
    display_name: "Database Table",
    base: BaseShape::MainObject,
    groups: &[
        MAIN_OBJECT_PROPERTIES,
        LINEAGE_PROPERTIES,
        &[
            Property::scalar("alias_(business_name)"),
            Property::reference("database_schema"),
            Property::paged("database_columns"),
            Property::paged("defined_primary_key"),
        ],
    ],
};

pub static DATABASE_COLUMN: TypeSchema = TypeSchema {
    type_id: "database_column",
    display_name: "Database Column",
    base: BaseShape::MainObject,
    groups: &[
        MAIN_OBJECT_PROPERTIES,
        &[
            Property::scalar("data_type"),
            Property::scalar("length"),
            Property::scalar("position"),
            Property::scalar("allows_null_values"),
            Property::scalar("default_value"),
            Property::scalar("alias_(business_name)"),
            Property::reference("database_table_or_view"),
            Property::paged("data_classes"),
        ],
    ],
};

// ============================================================================
// DataStage
// ============================================================================

pub static TRANSFORMATION_PROJECT: TypeSchema = TypeSchema {
    type_id: "transformation_project",
    display_name: "Transformation Project",
    base: BaseShape::MainObject,
    groups: &[
        MAIN_OBJECT_PROPERTIES,
        &[Property::reference("host"), Property::paged("jobs")],
    ],
};

pub static DSJOB: TypeSchema = TypeSchema {
    type_id: "dsjob",
    display_name: "Job",
    base: BaseShape::MainObject,
    groups: &[
        MAIN_OBJECT_PROPERTIES,
        &[
            Property::scalar("job_type"),
            Property::reference("transformation_project"),
            Property::paged("stages"),
            Property::paged("links"),
            Property::paged("reads_from_(static)"),
            Property::paged("writes_to_(static)"),
            Property::paged("reads_from_(design)"),
            Property::paged("writes_to_(design)"),
        ],
    ],
};

pub static STAGE: TypeSchema = TypeSchema {
    type_id: "stage",
    display_name: "Stage",
    base: BaseShape::MainObject,
    groups: &[
        MAIN_OBJECT_PROPERTIES,
        &[
            Property::scalar("runtime_column_propagation"),
            Property::reference("job_or_container"),
            Property::reference("stage_type"),
            Property::paged("input_links"),
            Property::paged("output_links"),
            Property::paged("reads_from_(design)"),
            Property::paged("writes_to_(design)"),
        ],
    ],
};

pub static LINK: TypeSchema = TypeSchema {
    type_id: "link",
    display_name: "Link",
    base: BaseShape::MainObject,
    groups: &[
        MAIN_OBJECT_PROPERTIES,
        &[
            Property::scalar("link_type"),
            Property::reference("job_or_container"),
            Property::reference("input_stage"),
            Property::reference("output_stage"),
            Property::paged("stage_columns"),
        ],
    ],
};

pub static DS_STAGE_COLUMN: TypeSchema = TypeSchema {
    type_id: "ds_stage_column",
    display_name: "Stage Column",
    base: BaseShape::MainObject,
    groups: &[
        MAIN_OBJECT_PROPERTIES,
        &[
            Property::scalar("data_type"),
            Property::scalar("length"),
            Property::scalar("position"),
            Property::scalar("nullable"),
            Property::reference("link"),
            Property::paged("previous_stage_columns"),
            Property::paged("next_stage_columns"),
        ],
    ],
};

// ============================================================================
// XML schemas
// ============================================================================

pub static XML_SCHEMA_DEFINITION: TypeSchema = TypeSchema {
    type_id: "xml_schema_definition",
    display_name: "XML Schema Definition",
    base: BaseShape::MainObject,
    groups: &[
        MAIN_OBJECT_PROPERTIES,
        &[
            Property::scalar("target_namespace"),
            Property::scalar("path"),
            Property::paged("xsd_elements"),
            Property::paged("xsd_complex_types"),
            Property::paged("xsd_simple_types"),
            Property::paged("xsd_attributes"),
        ],
    ],
};

pub static XSD_ELEMENT: TypeSchema = TypeSchema {
    type_id: "xsd_element",
    display_name: "XSD Element",
    base: BaseShape::MainObject,
    groups: &[
        MAIN_OBJECT_PROPERTIES,
        &[
            Property::scalar("min_occurs"),
            Property::scalar("max_occurs"),
            Property::scalar("nillable"),
            Property::scalar("default_value"),
            Property::reference("xml_schema_definition"),
            Property::reference("element_type"),
            Property::paged("parent_complex_types"),
        ],
    ],
};

pub static XSD_COMPLEX_TYPE: TypeSchema = TypeSchema {
    type_id: "xsd_complex_type",
    display_name: "XSD Complex Type",
    base: BaseShape::MainObject,
    groups: &[
        MAIN_OBJECT_PROPERTIES,
        &[
            Property::scalar("abstract"),
            Property::scalar("mixed"),
            Property::reference("xml_schema_definition"),
            Property::reference("base_type"),
            Property::paged("xsd_elements"),
            Property::paged("xsd_attributes"),
        ],
    ],
};

pub static XSD_SIMPLE_TYPE: TypeSchema = TypeSchema {
    type_id: "xsd_simple_type",
    display_name: "XSD Simple Type",
    base: BaseShape::MainObject,
    groups: &[
        MAIN_OBJECT_PROPERTIES,
        &[
            Property::scalar("base_type"),
            Property::scalar("length"),
            Property::scalar("min_length"),
            Property::scalar("max_length"),
            Property::scalar("pattern"),
            Property::scalar("enumeration"),
            Property::reference("xml_schema_definition"),
        ],
    ],
};

pub static XSD_ATTRIBUTE: TypeSchema = TypeSchema {
    type_id: "xsd_attribute",
    display_name: "XSD Attribute",
    base: BaseShape::MainObject,
    groups: &[
        MAIN_OBJECT_PROPERTIES,
        &[
            Property::scalar("use"),
            Property::scalar("default_value"),
            Property::scalar("fixed_value"),
            Property::reference("xml_schema_definition"),
            Property::reference("attribute_type"),
        ],
    ],
};

// ============================================================================
// Glossary & governance
// ============================================================================

pub static TERM: TypeSchema = TypeSchema {
    type_id: "term",
    display_name: "Term",
    base: BaseShape::MainObject,
    groups: &[
        MAIN_OBJECT_PROPERTIES,
        &[
            Property::scalar("status"),
            Property::scalar("abbreviation"),
            Property::scalar("example"),
            Property::scalar("usage"),
            Property::reference("parent_category"),
            Property::paged("synonyms"),
            Property::paged("assigned_assets"),
            Property::paged("is_a_type_of"),
            Property::paged("has_types"),
            Property::paged("related_terms"),
        ],
    ],
};

pub static CATEGORY: TypeSchema = TypeSchema {
    type_id: "category",
    display_name: "Category",
    base: BaseShape::MainObject,
    groups: &[
        MAIN_OBJECT_PROPERTIES,
        &[
            Property::reference("parent_category"),
            Property::paged("subcategories"),
            Property::paged("terms"),
        ],
    ],
};

pub static INFORMATION_GOVERNANCE_RULE: TypeSchema = TypeSchema {
    type_id: "information_governance_rule",
    display_name: "Information Governance Rule",
    base: BaseShape::MainObject,
    groups: &[
        MAIN_OBJECT_PROPERTIES,
        &[
            Property::scalar("status"),
            Property::paged("implemented_by_assets"),
            Property::paged("governs_assets"),
        ],
    ],
};

static REGISTRY: &[&TypeSchema] = &[
    &HOST,
    &LABEL,
    &NOTE,
    &DATA_FILE_FOLDER,
    &AMAZON_S3_BUCKET,
    &DATA_FILE,
    &DATA_FILE_RECORD,
    &DATA_FILE_FIELD,
    &DATABASE,
    &DATABASE_SCHEMA,
    &DATABASE_TABLE,
    &DATABASE_COLUMN,
    &TRANSFORMATION_PROJECT,
    &DSJOB,
    &STAGE,
    &LINK,
    &DS_STAGE_COLUMN,
    &XML_SCHEMA_DEFINITION,
    &XSD_ELEMENT,
    &XSD_COMPLEX_TYPE,
    &XSD_SIMPLE_TYPE,
    &XSD_ATTRIBUTE,
    &TERM,
    &CATEGORY,
    &INFORMATION_GOVERNANCE_RULE,
];

/// Every known asset type schema
pub fn registry() -> &'static [&'static TypeSchema] {
    REGISTRY
}

/// Find the schema for a type-id
pub fn lookup(type_id: &str) -> Option<&'static TypeSchema> {
    REGISTRY.iter().copied().find(|s| s.type_id == type_id)
}
