//! Choice sets for the type and location selectors.

use serde::Serialize;

use crate::listing::property::Property;

/// Distinct values offered by the filter selectors.
///
/// Both lists are deduplicated and keep first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Distinct listing types, e.g. `["Venta", "Alquiler"]`.
    pub types: Vec<String>,
    /// Distinct neighbourhoods (first comma segment of each location).
    pub locations: Vec<String>,
}

impl FilterOptions {
    /// Derives the choice sets from `listings`.
    pub fn from_listings(listings: &[Property]) -> Self {
        let mut types: Vec<String> = Vec::new();
        let mut locations: Vec<String> = Vec::new();

        for p in listings {
            push_unique(&mut types, p.kind());
            push_unique(&mut locations, p.neighbourhood());
        }

        Self { types, locations }
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_owned());
    }
}
