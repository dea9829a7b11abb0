//! Test fixtures: catalog payloads shaped like real REST responses
//!
//! Import via `use crate::model::fixtures` in test modules.

use serde_json::{Value, json};

/// Amazon S3 bucket with lineage, paged folders and one undeclared field
pub fn bucket_payload() -> Value {
    json!({
        "_type": "amazon_s3_bucket",
        "_id": "b1",
        "_name": "landing-zone",
        "_url": "https://igc.example.com/ibm/iis/igc-rest/v1/assets/b1",
        "_context": [
            {"_type": "host", "_id": "h1", "_name": "s3.eu-west-1.amazonaws.com"}
        ],
        "name": "landing-zone",
        "short_description": "Raw partner drops",
        "region": "eu-west-1",
        "path": "s3://landing-zone",
        "host": {"_type": "host", "_id": "h1", "_name": "s3.eu-west-1.amazonaws.com"},
        "created_by": "isadmin",
        "created_on": 1736942400000_i64,
        "labels": [{"_type": "label", "_id": "l1", "_name": "Partner"}],
        "data_file_folders": {
            "paging": {"numTotal": 12, "pageSize": 10, "begin": 0, "end": 9},
            "items": [
                {"_type": "data_file_folder", "_id": "dir1", "_name": "orders"},
                {"_type": "data_file_folder", "_id": "dir2", "_name": "returns"}
            ]
        },
        "read_by_(static)": [{"type": "dsjob", "_id": "j1"}],
        "read_by_(design)": [{"_type": "dsjob", "_id": "j2"}],
        "unexpected_field": 42
    })
}

/// Database table with context path and columns
pub fn table_payload() -> Value {
    json!({
        "_type": "database_table",
        "_id": "t1",
        "_name": "ORDERS",
        "_context": [
            {"_type": "host", "_id": "h2", "_name": "dbhost"},
            {"_type": "database", "_id": "d1", "_name": "SALES"},
            {"_type": "database_schema", "_id": "s1", "_name": "DB2INST1"}
        ],
        "name": "ORDERS",
        "alias_(business_name)": "Customer Orders",
        "database_schema": {"_type": "database_schema", "_id": "s1", "_name": "DB2INST1"},
        "database_columns": {
            "paging": {"numTotal": 2, "pageSize": 10, "begin": 0, "end": 1},
            "items": [
                {"_type": "database_column", "_id": "c1", "_name": "ORDER_ID"},
                {"_type": "database_column", "_id": "c2", "_name": "CUSTOMER_ID"}
            ]
        },
        "assigned_to_terms": [{"_type": "term", "_id": "term1", "_name": "Order"}],
        "modified_on": 1737028800000_i64
    })
}

/// DataStage job with a partially fetched stage list
pub fn job_payload() -> Value {
    json!({
        "_type": "dsjob",
        "_id": "j2",
        "name": "LoadOrders",
        "job_type": "Parallel",
        "transformation_project": {"_type": "transformation_project", "_id": "p1", "_name": "DWH"},
        "stages": {
            "paging": {
                "numTotal": 15,
                "pageSize": 10,
                "begin": 0,
                "end": 9,
                "next": "https://igc.example.com/ibm/iis/igc-rest/v1/assets/j2/stages?begin=10"
            },
            "items": [{"_type": "stage", "_id": "st1", "_name": "Read_Orders"}]
        },
        "reads_from_(design)": [{"_type": "database_table", "_id": "t1"}],
        "writes_to_(design)": []
    })
}

/// Search response: a paged envelope of mixed asset types
pub fn search_payload() -> Value {
    json!({
        "paging": {"numTotal": 5, "pageSize": 2, "begin": 0, "end": 1},
        "items": [
            {"_type": "term", "_id": "term1", "name": "Order", "status": "ACCEPTED"},
            {"_type": "category", "_id": "cat1", "name": "Sales"}
        ]
    })
}
