//! The read-only listing store.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::listing::property::Property;

/// Number of listings used as the featured subset when the document names none.
pub const DEFAULT_FEATURED_LIMIT: usize = 6;

/// On-disk shape of the listings document.
#[derive(Debug, Deserialize)]
struct ListingDocument {
    #[serde(alias = "propiedades")]
    properties: Vec<Property>,
    #[serde(default)]
    featured: Vec<u32>,
}

/// Immutable, ordered collection of listings.
///
/// Cloning is cheap: the listings live behind an `Arc` and are never mutated
/// after construction, so the search and carousel engines can share one
/// store freely.
#[derive(Debug, Clone)]
pub struct ListingStore {
    properties: Arc<[Property]>,
    featured: Arc<[u32]>,
    featured_limit: usize,
}

impl ListingStore {
    /// Builds a store from listings in display order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateId`] if two listings share an id.
    pub fn from_properties(properties: Vec<Property>) -> CoreResult<Self> {
        Self::build(properties, Vec::new())
    }

    /// Parses a listings document from a JSON string.
    ///
    /// # Errors
    ///
    /// - [`CoreError::ListingParse`] if the JSON is malformed.
    /// - [`CoreError::DuplicateId`] if two listings share an id.
    /// - [`CoreError::UnknownFeatured`] if `featured` names a missing id.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let doc: ListingDocument =
            serde_json::from_str(json).map_err(|e| CoreError::ListingParse(e.to_string()))?;
        Self::build(doc.properties, doc.featured)
    }

    /// Loads a listings document from `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - Any error of [`ListingStore::from_json_str`].
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CoreError::from_read(e, path))?;
        let store = Self::from_json_str(&content)?;
        tracing::info!(
            "loaded {} listings ({} featured) from {}",
            store.len(),
            store.featured.len(),
            path.display()
        );
        Ok(store)
    }

    fn build(properties: Vec<Property>, featured: Vec<u32>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(properties.len());
        for p in &properties {
            if !seen.insert(p.id()) {
                return Err(CoreError::DuplicateId(p.id()));
            }
        }
        if let Some(missing) = featured.iter().find(|id| !seen.contains(*id)) {
            return Err(CoreError::UnknownFeatured(*missing));
        }

        Ok(Self {
            properties: properties.into(),
            featured: featured.into(),
            featured_limit: DEFAULT_FEATURED_LIMIT,
        })
    }

    /// Returns a store whose fallback featured subset holds `limit` listings.
    ///
    /// Only used when the document has no explicit `featured` list.
    #[must_use]
    pub fn with_featured_limit(self, limit: usize) -> Self {
        Self {
            featured_limit: limit,
            ..self
        }
    }

    /// All listings in document order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    /// Looks up a listing by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Property> {
        self.properties.iter().find(|p| p.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// The showcase subset fed to the carousel.
    ///
    /// Uses the document's `featured` ids in their listed order; when there
    /// are none, falls back to the first `featured_limit` listings.
    #[must_use]
    pub fn featured(&self) -> Vec<Property> {
        if self.featured.is_empty() {
            return self
                .properties
                .iter()
                .take(self.featured_limit)
                .cloned()
                .collect();
        }
        self.featured
            .iter()
            .filter_map(|id| self.get(*id))
            .cloned()
            .collect()
    }
}
