//! DataStage design assets: projects, jobs, stages, links and stage columns

use serde::{Deserialize, Serialize};

use super::{ItemList, MainObject, Reference, main_object_asset};
use crate::schema::catalog;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformationProject {
    #[serde(flatten)]
    pub base: MainObject,

    pub host: Option<Reference>,
    pub jobs: Option<ItemList>,
}

main_object_asset!(
    TransformationProject,
    "transformation_project",
    catalog::TRANSFORMATION_PROJECT
);

/// DataStage job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DsJob {
    #[serde(flatten)]
    pub base: MainObject,

    /// Job kind as reported by the catalog (parallel, sequence, ...)
    pub job_type: Option<String>,
    pub transformation_project: Option<Reference>,
    pub stages: Option<ItemList>,
    pub links: Option<ItemList>,
    #[serde(rename = "reads_from_(static)")]
    pub reads_from_static: Option<ItemList>,
    #[serde(rename = "writes_to_(static)")]
    pub writes_to_static: Option<ItemList>,
    #[serde(rename = "reads_from_(design)")]
    pub reads_from_design: Option<ItemList>,
    #[serde(rename = "writes_to_(design)")]
    pub writes_to_design: Option<ItemList>,
}

main_object_asset!(DsJob, "dsjob", catalog::DSJOB);

/// Stage within a job or shared container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stage {
    #[serde(flatten)]
    pub base: MainObject,

    pub runtime_column_propagation: Option<bool>,
    pub job_or_container: Option<Reference>,
    pub stage_type: Option<Reference>,
    pub input_links: Option<ItemList>,
    pub output_links: Option<ItemList>,
    #[serde(rename = "reads_from_(design)")]
    pub reads_from_design: Option<ItemList>,
    #[serde(rename = "writes_to_(design)")]
    pub writes_to_design: Option<ItemList>,
}

main_object_asset!(Stage, "stage", catalog::STAGE);

/// Link between two stages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(flatten)]
    pub base: MainObject,

    pub link_type: Option<String>,
    pub job_or_container: Option<Reference>,
    pub input_stage: Option<Reference>,
    pub output_stage: Option<Reference>,
    pub stage_columns: Option<ItemList>,
}

main_object_asset!(Link, "link", catalog::LINK);

/// Column carried by a link
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageColumn {
    #[serde(flatten)]
    pub base: MainObject,

    pub data_type: Option<String>,
    pub length: Option<i64>,
    pub position: Option<i64>,
    pub nullable: Option<bool>,
    pub link: Option<Reference>,
    pub previous_stage_columns: Option<ItemList>,
    pub next_stage_columns: Option<ItemList>,
}

main_object_asset!(StageColumn, "ds_stage_column", catalog::DS_STAGE_COLUMN);
