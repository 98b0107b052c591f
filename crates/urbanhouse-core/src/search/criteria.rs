//! User-selected filter constraints.

use serde::{Deserialize, Serialize};

/// An inclusive range whose ends may each be unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    /// A range with no constraint on either end.
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    pub const fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    /// Returns `true` if neither end is set.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Checks a parsed value against the range.
    ///
    /// A value that could not be parsed (`None`) passes only when the range
    /// is fully unbounded; any set end rejects it.
    pub fn admits(&self, value: Option<T>) -> bool {
        match value {
            Some(v) => {
                self.min.map_or(true, |min| v >= min) && self.max.map_or(true, |max| v <= max)
            }
            None => self.is_unbounded(),
        }
    }
}

/// The filter state of one listings page.
///
/// Immutable: every `with_*` method returns a new `FilterCriteria`. The
/// default value has every constraint unset and matches every listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    query: String,
    kind: Option<String>,
    location: Option<String>,
    price: Bounds<u64>,
    rooms: Bounds<u32>,
}

impl FilterCriteria {
    /// Criteria with every constraint unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text query. An empty string clears it.
    #[must_use]
    pub fn with_query(self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self
        }
    }

    /// Selects a listing type. `None` or an empty string clears it.
    #[must_use]
    pub fn with_kind(self, kind: Option<String>) -> Self {
        Self {
            kind: kind.filter(|k| !k.is_empty()),
            ..self
        }
    }

    /// Selects a location. `None` or an empty string clears it.
    #[must_use]
    pub fn with_location(self, location: Option<String>) -> Self {
        Self {
            location: location.filter(|l| !l.is_empty()),
            ..self
        }
    }

    #[must_use]
    pub fn with_price(self, price: Bounds<u64>) -> Self {
        Self { price, ..self }
    }

    #[must_use]
    pub fn with_rooms(self, rooms: Bounds<u32>) -> Self {
        Self { rooms, ..self }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    #[must_use]
    pub fn price(&self) -> Bounds<u64> {
        self.price
    }

    #[must_use]
    pub fn rooms(&self) -> Bounds<u32> {
        self.rooms
    }

    /// Returns `true` if no constraint is set.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self == &Self::default()
    }
}
