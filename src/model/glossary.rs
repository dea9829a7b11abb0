//! Business glossary and governance assets

use serde::{Deserialize, Serialize};

use super::{ItemList, MainObject, Reference, main_object_asset};
use crate::schema::catalog;

/// Business term
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Term {
    #[serde(flatten)]
    pub base: MainObject,

    /// Workflow status (`CANDIDATE`, `ACCEPTED`, `STANDARD`, `DEPRECATED`)
    pub status: Option<String>,
    pub abbreviation: Option<String>,
    pub example: Option<String>,
    pub usage: Option<String>,
    pub parent_category: Option<Reference>,
    pub synonyms: Option<ItemList>,
    pub assigned_assets: Option<ItemList>,
    pub is_a_type_of: Option<ItemList>,
    pub has_types: Option<ItemList>,
    pub related_terms: Option<ItemList>,
}

main_object_asset!(Term, "term", catalog::TERM);

/// Glossary category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(flatten)]
    pub base: MainObject,

    pub parent_category: Option<Reference>,
    pub subcategories: Option<ItemList>,
    pub terms: Option<ItemList>,
}

main_object_asset!(Category, "category", catalog::CATEGORY);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InformationGovernanceRule {
    #[serde(flatten)]
    pub base: MainObject,

    pub status: Option<String>,
    pub implemented_by_assets: Option<ItemList>,
    pub governs_assets: Option<ItemList>,
}

main_object_asset!(
    InformationGovernanceRule,
    "information_governance_rule",
    catalog::INFORMATION_GOVERNANCE_RULE
);
