//! Hosts, labels and notes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Asset, ItemList, MainObject, Reference, main_object_asset};
use crate::schema::{TypeSchema, catalog};

/// Machine that hosts files, databases or engines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Host {
    #[serde(flatten)]
    pub base: MainObject,

    pub ip_address: Option<String>,
    pub platform: Option<String>,
    pub data_file_folders: Option<ItemList>,
    pub databases: Option<ItemList>,
    pub data_connections: Option<ItemList>,
}

main_object_asset!(Host, "host", catalog::HOST);

/// Label that can be attached to any asset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Label {
    #[serde(flatten)]
    pub base: MainObject,

    /// Assets carrying this label
    pub assets: Option<ItemList>,
}

main_object_asset!(Label, "label", catalog::LABEL);

/// Free-text note attached to an asset.
///
/// Notes only have a reference header, not the main object properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    #[serde(flatten)]
    pub reference: Reference,

    pub subject: Option<String>,
    /// Note body
    pub note: Option<String>,
    pub status: Option<String>,
    /// Asset the note is attached to
    pub belonging_to: Option<Reference>,
    pub created_by: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub created_on: Option<DateTime<Utc>>,
    pub modified_by: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub modified_on: Option<DateTime<Utc>>,
}

impl Asset for Note {
    const TYPE_ID: &'static str = "note";

    fn schema() -> &'static TypeSchema {
        &catalog::NOTE
    }

    fn reference(&self) -> &Reference {
        &self.reference
    }

    fn name(&self) -> Option<&str> {
        self.reference.name.as_deref().or(self.subject.as_deref())
    }
}
