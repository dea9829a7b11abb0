//! File system assets: folders, buckets, files, records and fields

use serde::{Deserialize, Serialize};

use super::{ItemList, Lineage, MainObject, Reference, main_object_asset};
use crate::schema::catalog;

/// Folder on a host file system
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataFileFolder {
    #[serde(flatten)]
    pub base: MainObject,

    pub path: Option<String>,
    pub host: Option<Reference>,
    pub parent_folder: Option<Reference>,
    pub data_file_folders: Option<ItemList>,
    pub data_files: Option<ItemList>,
    pub in_collections: Option<ItemList>,
}

main_object_asset!(DataFileFolder, "data_file_folder", catalog::DATA_FILE_FOLDER);

/// Amazon S3 bucket.
///
/// The catalog treats a bucket as a top-level folder, but it is tagged with
/// its own type-id and decodes into this struct only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmazonS3Bucket {
    #[serde(flatten)]
    pub base: MainObject,

    #[serde(flatten)]
    pub lineage: Lineage,

    pub path: Option<String>,
    pub region: Option<String>,
    pub host: Option<Reference>,
    pub data_file_folders: Option<ItemList>,
    pub data_files: Option<ItemList>,
    pub in_collections: Option<ItemList>,
}

main_object_asset!(AmazonS3Bucket, "amazon_s3_bucket", catalog::AMAZON_S3_BUCKET);

/// Data file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataFile {
    #[serde(flatten)]
    pub base: MainObject,

    #[serde(flatten)]
    pub lineage: Lineage,

    pub path: Option<String>,
    pub format: Option<String>,
    /// Size in bytes
    pub size: Option<u64>,
    pub host: Option<Reference>,
    pub parent_folder: Option<Reference>,
    pub data_file_records: Option<ItemList>,
}

main_object_asset!(DataFile, "data_file", catalog::DATA_FILE);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataFileRecord {
    #[serde(flatten)]
    pub base: MainObject,

    #[serde(flatten)]
    pub lineage: Lineage,

    pub data_file: Option<Reference>,
    pub data_file_fields: Option<ItemList>,
}

main_object_asset!(DataFileRecord, "data_file_record", catalog::DATA_FILE_RECORD);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataFileField {
    #[serde(flatten)]
    pub base: MainObject,

    #[serde(flatten)]
    pub lineage: Lineage,

    pub data_type: Option<String>,
    pub length: Option<i64>,
    pub position: Option<i64>,
    pub nullable: Option<bool>,
    pub data_file_record: Option<Reference>,
}

main_object_asset!(DataFileField, "data_file_field", catalog::DATA_FILE_FIELD);
