//! Reference and reference-list shapes
//!
//! A [`Reference`] points at another asset by type and id. A relationship
//! with many targets is an [`ItemList`], which the catalog sends either as a
//! bare JSON array or as a paged envelope.

use serde::{Deserialize, Deserializer, Serialize, de};

/// Pointer to another catalog asset.
///
/// Carries the header fields the catalog attaches to every record. None of
/// them are required; a reference from a list usually only has `_type`,
/// `_id` and `_name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ReferenceWire")]
pub struct Reference {
    /// Type-id of the target asset
    #[serde(rename = "_type", skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,

    /// Catalog id (RID) of the target asset
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name of the target asset
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// REST URL of the target asset
    #[serde(rename = "_url", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Ancestry of the target asset, outermost first
    #[serde(rename = "_context", skip_serializing_if = "Option::is_none")]
    pub context: Option<Vec<Reference>>,
}

/// Input form of [`Reference`].
///
/// Some endpoints emit the type as `type` rather than `_type`. Both are read,
/// `_type` wins when a payload has both.
#[derive(Deserialize)]
struct ReferenceWire {
    #[serde(rename = "_type", default)]
    tagged_type: Option<String>,
    #[serde(rename = "type", default)]
    plain_type: Option<String>,
    #[serde(rename = "_id", default)]
    id: Option<String>,
    #[serde(rename = "_name", default)]
    name: Option<String>,
    #[serde(rename = "_url", default)]
    url: Option<String>,
    #[serde(rename = "_context", default)]
    context: Option<Vec<Reference>>,
}

impl From<ReferenceWire> for Reference {
    fn from(wire: ReferenceWire) -> Self {
        Self {
            asset_type: wire.tagged_type.or(wire.plain_type),
            id: wire.id,
            name: wire.name,
            url: wire.url,
            context: wire.context,
        }
    }
}

impl Reference {
    /// Create a reference to an asset of the given type and id
    pub fn new(asset_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            asset_type: Some(asset_type.into()),
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Set the display name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the ancestry path.
    pub fn within(mut self, context: Vec<Reference>) -> Self {
        self.context = Some(context);
        self
    }

    /// Whether this reference targets the given type-id exactly
    pub fn points_to(&self, type_id: &str) -> bool {
        self.asset_type.as_deref() == Some(type_id)
    }

    /// Context names and own name joined with `::`.
    ///
    /// Unnamed context entries are skipped. Returns `None` when nothing is named.
    pub fn qualified_name(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .context
            .iter()
            .flatten()
            .filter_map(|r| r.name.as_deref())
            .chain(self.name.as_deref())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("::"))
        }
    }
}

/// Paging state of a reference list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    /// Total number of items across all pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_total: Option<usize>,

    /// Items per page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,

    /// Offset of the first item on this page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin: Option<usize>,

    /// Offset of the last item on this page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,

    /// URL of the next page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// URL of the previous page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

impl Paging {
    /// Check if there are more pages to fetch.
    pub fn has_more(&self) -> bool {
        if self.next.is_some() {
            return true;
        }

        if let (Some(end), Some(total)) = (self.end, self.num_total) {
            return end.checked_add(1).is_some_and(|next| next < total);
        }

        false
    }

    /// Offset the next page starts at, if there is one.
    pub fn next_begin(&self) -> Option<usize> {
        if !self.has_more() {
            return None;
        }

        match (self.end, self.begin, self.page_size) {
            (Some(end), _, _) => end.checked_add(1),
            (None, Some(begin), Some(size)) => begin.checked_add(size),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Paging::default()
    }
}

/// A relationship with many targets.
///
/// Always encoded as `{"paging": {...}, "items": [...]}`. Decoding also
/// accepts a bare array of items. An object with neither `paging` nor `items`
/// is rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemList<T = Reference> {
    /// Paging state; empty when the list arrived as a bare array
    pub paging: Paging,

    /// Items on this page
    pub items: Vec<T>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ItemListWire<T> {
    Bare(Vec<T>),
    Paged {
        #[serde(default)]
        paging: Paging,
        items: Vec<T>,
    },
    // An empty page may carry only the paging block
    PagingOnly {
        paging: Paging,
    },
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ItemList<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = ItemListWire::deserialize(deserializer).map_err(|_| {
            de::Error::custom("expected a reference list: an array or a {paging, items} object")
        })?;

        Ok(match wire {
            ItemListWire::Bare(items) => Self::new(items),
            ItemListWire::Paged { paging, items } => Self { paging, items },
            ItemListWire::PagingOnly { paging } => Self::with_paging(Vec::new(), paging),
        })
    }
}

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> ItemList<T> {
    /// Create an unpaged list.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            paging: Paging::default(),
            items,
        }
    }

    /// Create a list with paging state.
    pub fn with_paging(items: Vec<T>, paging: Paging) -> Self {
        Self { paging, items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Check if there are more pages to fetch.
    pub fn has_more(&self) -> bool {
        self.paging.has_more()
    }

    /// Whether every item of the relationship is present.
    ///
    /// A list without a total is complete unless paging says otherwise.
    pub fn is_complete(&self) -> bool {
        match self.paging.num_total {
            Some(total) => self.items.len() >= total,
            None => !self.has_more(),
        }
    }

    /// Offset the next page starts at, if there is one.
    pub fn next_begin(&self) -> Option<usize> {
        self.paging.next_begin()
    }
}

impl ItemList<Reference> {
    /// Ids of all referenced assets on this page
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().filter_map(|r| r.id.as_deref()).collect()
    }
}

impl<T> FromIterator<T> for ItemList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a ItemList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for ItemList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
