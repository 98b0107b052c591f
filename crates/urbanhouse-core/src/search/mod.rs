//! Listing search for the properties page.
//!
//! Pure building blocks live in [`text`] (normalisation), [`criteria`]
//! (the constraint set), [`filter`] (matching) and [`options`] (selector
//! choices). [`ListingSearch`] ties them to one page instance: it owns the
//! criteria and keeps the derived result in sync.

pub mod criteria;
pub mod filter;
pub mod options;
pub mod text;

use crate::event::FilterCommand;
use crate::listing::property::Property;
use crate::listing::store::ListingStore;
use criteria::FilterCriteria;
use filter::filter_listings;
use options::FilterOptions;

/// Filter state of one listings page.
///
/// Immutable: [`ListingSearch::apply`] returns a new instance with the
/// result recomputed. The store is shared read-only; nothing here mutates it.
#[derive(Debug, Clone)]
pub struct ListingSearch {
    store: ListingStore,
    criteria: FilterCriteria,
    options: FilterOptions,
    results: Vec<Property>,
}

impl ListingSearch {
    /// Creates a page over `store` with default (unset) criteria.
    pub fn new(store: ListingStore) -> Self {
        let options = FilterOptions::from_listings(store.properties());
        let results = store.properties().to_vec();
        Self {
            store,
            criteria: FilterCriteria::default(),
            options,
            results,
        }
    }

    /// Returns a page with `criteria` in effect.
    #[must_use]
    pub fn with_criteria(self, criteria: FilterCriteria) -> Self {
        let results = filter_listings(self.store.properties(), &criteria);
        Self {
            criteria,
            results,
            ..self
        }
    }

    /// Applies a single control change.
    #[must_use]
    pub fn apply(self, command: FilterCommand) -> Self {
        let current = self.criteria.clone();
        let criteria = match command {
            FilterCommand::SetQuery(q) => current.with_query(q),
            FilterCommand::SetType(t) => current.with_kind(t),
            FilterCommand::SetLocation(l) => current.with_location(l),
            FilterCommand::SetPriceRange(b) => current.with_price(b),
            FilterCommand::SetRoomRange(b) => current.with_rooms(b),
            FilterCommand::Clear => FilterCriteria::default(),
        };
        if criteria == self.criteria {
            return self;
        }
        self.with_criteria(criteria)
    }

    /// Resets every constraint (the "clear filters" action).
    #[must_use]
    pub fn clear(self) -> Self {
        self.apply(FilterCommand::Clear)
    }

    /// Listings matching the current criteria, in store order.
    #[must_use]
    pub fn results(&self) -> &[Property] {
        &self.results
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Choice sets for the type and location selectors.
    #[must_use]
    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// `true` when the criteria exclude every listing.
    ///
    /// Front ends show a "no results" notice with a [`ListingSearch::clear`]
    /// action in this state.
    #[must_use]
    pub fn has_no_results(&self) -> bool {
        self.results.is_empty()
    }
}
