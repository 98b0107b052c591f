use axum::extract::{Path, Query, State};
use axum::Json;
use urbanhouse_core::{FilterOptions, ListingSearch, Property};

use crate::dto::{SearchQuery, SearchResponse};
use crate::error::AppError;
use crate::state::AppState;

pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let criteria = query.to_criteria()?;
    let search = ListingSearch::new(state.store.clone()).with_criteria(criteria);

    tracing::debug!(
        "search {:?} matched {} of {} listings",
        search.criteria(),
        search.results().len(),
        state.store.len()
    );

    Ok(Json(SearchResponse {
        total: search.results().len(),
        no_results: search.has_no_results(),
        options: search.options().clone(),
        results: search.results().to_vec(),
    }))
}

pub async fn options(State(state): State<AppState>) -> Json<FilterOptions> {
    Json(FilterOptions::from_listings(state.store.properties()))
}

pub async fn get_property(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Property>, AppError> {
    let id: u32 = raw_id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid property id: {raw_id:?}")))?;
    state
        .store
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Property not found: {id}")))
}

pub async fn featured(State(state): State<AppState>) -> Json<Vec<Property>> {
    Json(state.store.featured())
}
