//! Listing data for Urban House.
//!
//! [`property::Property`] is a single immutable listing record and
//! [`store::ListingStore`] is the ordered, read-only collection loaded once
//! at startup and shared by the search and carousel engines.

pub mod property;
pub mod store;
