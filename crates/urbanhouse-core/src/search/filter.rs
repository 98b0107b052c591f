//! Multi-criterion filtering of listings.

use crate::listing::property::Property;
use crate::search::criteria::FilterCriteria;
use crate::search::text::{contains_normalized, normalize};

/// Returns the listings that satisfy every constraint in `criteria`.
///
/// Matching listings keep their original relative order. Returns a **new**
/// `Vec<Property>`; the input slice is never mutated. Filtering an
/// already-filtered result with the same criteria returns it unchanged.
pub fn filter_listings(listings: &[Property], criteria: &FilterCriteria) -> Vec<Property> {
    let needle = normalize(criteria.query());

    listings
        .iter()
        .filter(|p| matches_with(p, criteria, &needle))
        .cloned()
        .collect()
}

/// Returns `true` if `property` satisfies every constraint in `criteria`.
pub fn matches(property: &Property, criteria: &FilterCriteria) -> bool {
    matches_with(property, criteria, &normalize(criteria.query()))
}

fn matches_with(property: &Property, criteria: &FilterCriteria, needle: &str) -> bool {
    matches_query(property, needle)
        && matches_kind(property, criteria.kind())
        && matches_location(property, criteria.location())
        && criteria.price().admits(property.price_value())
        && criteria.rooms().admits(property.room_count())
}

/// Accent- and case-insensitive substring search over title, description
/// and location.
fn matches_query(property: &Property, needle: &str) -> bool {
    needle.is_empty()
        || contains_normalized(property.title(), needle)
        || contains_normalized(property.description(), needle)
        || contains_normalized(property.location(), needle)
}

/// Exact, case-sensitive type match.
fn matches_kind(property: &Property, kind: Option<&str>) -> bool {
    kind.map_or(true, |k| property.kind() == k)
}

// Raw substring: unlike the free-text query this is neither case- nor
// accent-folded, since the value comes from the derived location choices.
fn matches_location(property: &Property, location: Option<&str>) -> bool {
    location.map_or(true, |l| property.location().contains(l))
}
