//! Request parameters derived from the schema classification
//!
//! Non-relational properties can be requested inline with a search; paged
//! relationships have to be fetched page by page. These helpers turn a type
//! schema into the query parameters for either case. They do not perform
//! any HTTP.

use crate::error::ModelError;
use crate::schema::TypeSchema;

/// Page size used when none is given.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Largest page size the catalog accepts.
pub const MAX_PAGE_SIZE: usize = 1000;

/// Properties and paging to request for one asset type.
///
/// # Example
/// ```ignore
/// let params = PropertyRequest::new(schema::lookup("database_table").unwrap())
///     .page_size(50)
///     .begin(100)
///     .to_query_params();
/// ```
#[derive(Debug, Clone)]
pub struct PropertyRequest {
    schema: &'static TypeSchema,
    properties: Vec<&'static str>,
    page_size: Option<usize>,
    begin: Option<usize>,
}

impl PropertyRequest {
    /// Request every non-relational property of the type.
    pub fn new(schema: &'static TypeSchema) -> Self {
        Self {
            schema,
            properties: schema.non_relational_properties(),
            page_size: None,
            begin: None,
        }
    }

    /// Request only the given properties.
    ///
    /// Fails on the first name the type does not declare.
    pub fn with_properties<S: AsRef<str>>(
        schema: &'static TypeSchema,
        names: &[S],
    ) -> Result<Self, ModelError> {
        let mut request = Self {
            properties: Vec::new(),
            ..Self::new(schema)
        };
        for name in names {
            request = request.property(name.as_ref())?;
        }
        Ok(request)
    }

    /// Add a property to the request.
    pub fn property(mut self, name: &str) -> Result<Self, ModelError> {
        let property = self
            .schema
            .property(name)
            .ok_or_else(|| ModelError::UnknownProperty {
                type_id: self.schema.type_id.to_string(),
                property: name.to_string(),
            })?;

        if !self.properties.contains(&property.name) {
            self.properties.push(property.name);
        }
        Ok(self)
    }

    /// Request every declared property, paged relationships included.
    pub fn all_properties(mut self) -> Self {
        self.properties = self.schema.all_properties();
        self
    }

    /// Set the page size; values above [`MAX_PAGE_SIZE`] are capped.
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size.min(MAX_PAGE_SIZE));
        self
    }

    /// Set the offset of the first result.
    pub fn begin(mut self, begin: usize) -> Self {
        self.begin = Some(begin);
        self
    }

    pub fn properties(&self) -> &[&'static str] {
        &self.properties
    }

    /// Requested properties that are paged relationships.
    ///
    /// The catalog returns only the first page of these inline.
    pub fn paged_properties(&self) -> Vec<&'static str> {
        self.properties
            .iter()
            .copied()
            .filter(|name| self.schema.is_paged(name))
            .collect()
    }

    /// Convert to query string parameters.
    ///
    /// - `types`: the type-id
    /// - `properties`: comma-separated wire names
    /// - `pageSize`: defaults to [`DEFAULT_PAGE_SIZE`]
    /// - `begin`: only when set
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("types", self.schema.type_id.to_string())];

        if !self.properties.is_empty() {
            params.push(("properties", self.properties.join(",")));
        }

        let size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        params.push(("pageSize", size.to_string()));

        if let Some(begin) = self.begin {
            params.push(("begin", begin.to_string()));
        }

        params
    }
}

/// Query parameters to fetch one page of a paged relationship.
pub fn relationship_page(
    schema: &TypeSchema,
    property: &str,
    begin: usize,
    page_size: Option<usize>,
) -> Result<Vec<(&'static str, String)>, ModelError> {
    let Some(prop) = schema.property(property) else {
        return Err(ModelError::UnknownProperty {
            type_id: schema.type_id.to_string(),
            property: property.to_string(),
        });
    };

    if !prop.kind.is_paged() {
        return Err(ModelError::NotPaged {
            type_id: schema.type_id.to_string(),
            property: property.to_string(),
        });
    }

    let size = page_size.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);
    Ok(vec![
        ("properties", prop.name.to_string()),
        ("begin", begin.to_string()),
        ("pageSize", size.to_string()),
    ])
}
