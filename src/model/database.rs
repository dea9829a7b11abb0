//! Relational database assets

use serde::{Deserialize, Serialize};

use super::{ItemList, Lineage, MainObject, Reference, main_object_asset};
use crate::schema::catalog;

/// Database instance on a host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Database {
    #[serde(flatten)]
    pub base: MainObject,

    /// Database management system, e.g. `DB2`
    pub dbms: Option<String>,
    pub dbms_version: Option<String>,
    pub host: Option<Reference>,
    pub database_schemas: Option<ItemList>,
}

main_object_asset!(Database, "database", catalog::DATABASE);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSchema {
    #[serde(flatten)]
    pub base: MainObject,

    #[serde(flatten)]
    pub lineage: Lineage,

    pub database: Option<Reference>,
    pub database_tables: Option<ItemList>,
}

main_object_asset!(DatabaseSchema, "database_schema", catalog::DATABASE_SCHEMA);

/// Table within a database schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseTable {
    #[serde(flatten)]
    pub base: MainObject,

    #[serde(flatten)]
    pub lineage: Lineage,

    #[serde(rename = "alias_(business_name)")]
    pub alias_business_name: Option<String>,
    pub database_schema: Option<Reference>,
    pub database_columns: Option<ItemList>,
    pub defined_primary_key: Option<ItemList>,
}

main_object_asset!(DatabaseTable, "database_table", catalog::DATABASE_TABLE);

/// Column of a table or view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseColumn {
    #[serde(flatten)]
    pub base: MainObject,

    pub data_type: Option<String>,
    pub length: Option<i64>,
    pub position: Option<i64>,
    pub allows_null_values: Option<bool>,
    pub default_value: Option<String>,
    #[serde(rename = "alias_(business_name)")]
    pub alias_business_name: Option<String>,
    pub database_table_or_view: Option<Reference>,
    pub data_classes: Option<ItemList>,
}

main_object_asset!(DatabaseColumn, "database_column", catalog::DATABASE_COLUMN);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Asset, fixtures};
    use serde_json::json;

    #[test]
    fn test_table_business_alias() {
        let table = DatabaseTable::from_value(json!({
            "_type": "database_table",
            "_id": "t1",
            "name": "ORD_HDR",
            "alias_(business_name)": "Order Header"
        }))
        .unwrap();

        assert_eq!(table.alias_business_name.as_deref(), Some("Order Header"));

        let value = table.to_value().unwrap();
        assert_eq!(value["alias_(business_name)"], json!("Order Header"));
        assert!(value.get("alias_business_name").is_none());
    }

    #[test]
    fn test_table_round_trip() {
        let table = DatabaseTable::from_value(fixtures::table_payload()).unwrap();

        assert_eq!(table.database_columns.as_ref().map(|l| l.len()), Some(2));
        assert_eq!(
            table.reference().qualified_name().as_deref(),
            Some("dbhost::SALES::DB2INST1::ORDERS")
        );

        let back = DatabaseTable::from_value(table.to_value().unwrap()).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_column_scalars() {
        let column = DatabaseColumn::from_value(json!({
            "_type": "database_column",
            "name": "ORDER_ID",
            "data_type": "INTEGER",
            "length": 10,
            "position": 1,
            "allows_null_values": false,
            "database_table_or_view": {"_type": "database_table", "_id": "t1"}
        }))
        .unwrap();

        assert_eq!(column.length, Some(10));
        assert_eq!(column.allows_null_values, Some(false));
        assert!(column.default_value.is_none());
        assert!(
            column
                .database_table_or_view
                .as_ref()
                .unwrap()
                .points_to("database_table")
        );
    }

    #[test]
    fn test_database_ignores_unknown_fields() {
        let db = Database::from_value(json!({
            "_type": "database",
            "name": "SALES",
            "dbms": "DB2",
            "vendor_specific": {"nested": true}
        }))
        .unwrap();

        assert_eq!(db.dbms.as_deref(), Some("DB2"));
        assert_eq!(db.name(), Some("SALES"));
    }
}
