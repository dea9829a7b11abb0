//! Common base shapes shared by asset records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::reference::{ItemList, Reference};

/// Properties every catalogued asset carries.
///
/// Typed records flatten this into their own wire object, so the fields sit
/// next to the type-specific ones rather than under a nested key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MainObject {
    /// Reference header (`_type`, `_id`, `_name`, `_url`, `_context`)
    #[serde(flatten)]
    pub reference: Reference,

    pub name: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,

    pub labels: Option<ItemList>,
    pub stewards: Option<ItemList>,
    pub assigned_to_terms: Option<ItemList>,
    pub implements_rules: Option<ItemList>,
    pub governed_by_rules: Option<ItemList>,

    pub created_by: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub created_on: Option<DateTime<Utc>>,
    pub modified_by: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub modified_on: Option<DateTime<Utc>>,
}

impl MainObject {
    /// Asset name, falling back to the header `_name`
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.reference.name.as_deref())
    }
}

/// Data flow relationships of data-bearing assets.
///
/// Who reads or writes the asset, per lineage source (static analysis,
/// design metadata, operational metadata, user-defined flows).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lineage {
    #[serde(rename = "read_by_(static)")]
    pub read_by_static: Option<ItemList>,
    #[serde(rename = "written_by_(static)")]
    pub written_by_static: Option<ItemList>,
    #[serde(rename = "read_by_(design)")]
    pub read_by_design: Option<ItemList>,
    #[serde(rename = "written_by_(design)")]
    pub written_by_design: Option<ItemList>,
    #[serde(rename = "read_by_(operational)")]
    pub read_by_operational: Option<ItemList>,
    #[serde(rename = "written_by_(operational)")]
    pub written_by_operational: Option<ItemList>,
    #[serde(rename = "read_by_(user_defined)")]
    pub read_by_user_defined: Option<ItemList>,
    #[serde(rename = "written_by_(user_defined)")]
    pub written_by_user_defined: Option<ItemList>,
    pub impacted_by: Option<ItemList>,
    pub impacts_on: Option<ItemList>,
}

impl Lineage {
    /// All readers across every lineage source
    pub fn readers(&self) -> impl Iterator<Item = &Reference> {
        [
            &self.read_by_static,
            &self.read_by_design,
            &self.read_by_operational,
            &self.read_by_user_defined,
        ]
        .into_iter()
        .flatten()
        .flat_map(|list| list.iter())
    }

    /// All writers across every lineage source
    pub fn writers(&self) -> impl Iterator<Item = &Reference> {
        [
            &self.written_by_static,
            &self.written_by_design,
            &self.written_by_operational,
            &self.written_by_user_defined,
        ]
        .into_iter()
        .flatten()
        .flat_map(|list| list.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_main_object_timestamps_are_epoch_millis() {
        let obj: MainObject = serde_json::from_value(json!({
            "_type": "host",
            "_id": "h1",
            "name": "etl01",
            "created_on": 1736942400000_i64,
            "modified_on": null
        }))
        .unwrap();

        let created = obj.created_on.unwrap();
        assert_eq!(created.timestamp_millis(), 1736942400000);
        assert!(obj.modified_on.is_none());

        let value = serde_json::to_value(&obj).unwrap();
        assert_eq!(value["created_on"], json!(1736942400000_i64));
        assert_eq!(value["modified_on"], json!(null));
    }

    #[test]
    fn test_main_object_flattens_header() {
        let obj = MainObject {
            reference: Reference::new("label", "l1"),
            name: Some("PII".to_string()),
            ..MainObject::default()
        };

        let value = serde_json::to_value(&obj).unwrap();
        assert_eq!(value["_type"], json!("label"));
        assert_eq!(value["_id"], json!("l1"));
        assert_eq!(value["name"], json!("PII"));
        assert!(value.get("reference").is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_header() {
        let obj = MainObject {
            reference: Reference::new("host", "h1").named("etl01"),
            ..MainObject::default()
        };
        assert_eq!(obj.display_name(), Some("etl01"));
    }

    #[test]
    fn test_lineage_readers_and_writers() {
        let lineage: Lineage = serde_json::from_value(json!({
            "read_by_(static)": [{"_type": "dsjob", "_id": "j1"}],
            "read_by_(design)": [{"_type": "dsjob", "_id": "j2"}],
            "written_by_(operational)": {"items": [{"_type": "dsjob", "_id": "j3"}]}
        }))
        .unwrap();

        let readers: Vec<_> = lineage.readers().filter_map(|r| r.id.as_deref()).collect();
        let writers: Vec<_> = lineage.writers().filter_map(|r| r.id.as_deref()).collect();

        assert_eq!(readers, vec!["j1", "j2"]);
        assert_eq!(writers, vec!["j3"]);
    }
}
