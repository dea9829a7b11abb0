//! Declarative schema metadata for catalog asset types
//!
//! Each asset type is described once, keyed by its type-id. The description
//! says which wire properties a type carries and how each one is classified:
//! plain values and single references are non-relational, reference lists are
//! paged relationships. Request builders use this to decide which properties
//! can be fetched inline and which have to be paged separately.

use serde::Serialize;

pub mod catalog;

pub use catalog::{lookup, registry};

/// Wire fields that make up the reference header of every record.
///
/// These are not catalog properties and never appear in a schema.
pub const HEADER_FIELDS: &[&str] = &["_type", "type", "_id", "_name", "_url", "_context"];

/// How a property is represented on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    /// String, number, boolean or timestamp value
    Scalar,
    /// Single reference to another asset
    Reference,
    /// Paged list of references
    ReferenceList,
}

impl PropertyKind {
    /// Whether the property is fetched as a paged relationship
    pub fn is_paged(self) -> bool {
        matches!(self, PropertyKind::ReferenceList)
    }

    /// Short label for display
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyKind::Scalar => "scalar",
            PropertyKind::Reference => "reference",
            PropertyKind::ReferenceList => "reference list",
        }
    }
}

/// A single wire property of an asset type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property {
    /// Wire name, exactly as the catalog emits it
    pub name: &'static str,
    /// Wire representation
    pub kind: PropertyKind,
}

impl Property {
    pub const fn scalar(name: &'static str) -> Self {
        Self {
            name,
            kind: PropertyKind::Scalar,
        }
    }

    pub const fn reference(name: &'static str) -> Self {
        Self {
            name,
            kind: PropertyKind::Reference,
        }
    }

    pub const fn paged(name: &'static str) -> Self {
        Self {
            name,
            kind: PropertyKind::ReferenceList,
        }
    }
}

/// Which common shape a record type extends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseShape {
    /// Reference header only
    Reference,
    /// Reference header plus the common catalog properties
    MainObject,
}

impl BaseShape {
    pub fn as_str(self) -> &'static str {
        match self {
            BaseShape::Reference => "reference",
            BaseShape::MainObject => "main_object",
        }
    }
}

/// Schema of one asset type
#[derive(Debug)]
pub struct TypeSchema {
    /// Wire `_type` discriminator
    pub type_id: &'static str,
    /// Human-readable name
    pub display_name: &'static str,
    /// Common shape the type extends
    pub base: BaseShape,
    /// Property groups, inherited groups first
    pub groups: &'static [&'static [Property]],
}

impl TypeSchema {
    /// Iterate over every property in declaration order
    pub fn properties(&self) -> impl Iterator<Item = &'static Property> {
        let groups: &'static [&'static [Property]] = self.groups;
        groups.iter().flat_map(|group| group.iter())
    }

    /// Every property wire name
    pub fn all_properties(&self) -> Vec<&'static str> {
        self.properties().map(|p| p.name).collect()
    }

    /// Properties that can be requested inline (scalars and single references)
    pub fn non_relational_properties(&self) -> Vec<&'static str> {
        self.properties()
            .filter(|p| !p.kind.is_paged())
            .map(|p| p.name)
            .collect()
    }

    /// Properties that are paged relationships
    pub fn paged_relationship_properties(&self) -> Vec<&'static str> {
        self.properties()
            .filter(|p| p.kind.is_paged())
            .map(|p| p.name)
            .collect()
    }

    /// Look up a property by wire name
    pub fn property(&self, name: &str) -> Option<&'static Property> {
        self.properties().find(|p| p.name == name)
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    /// Whether the named property is a paged relationship.
    ///
    /// Returns false for unknown properties.
    pub fn is_paged(&self, name: &str) -> bool {
        self.property(name).is_some_and(|p| p.kind.is_paged())
    }
}
