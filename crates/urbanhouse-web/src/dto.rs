use std::str::FromStr;

use serde::{Deserialize, Serialize};
use urbanhouse_core::{Bounds, CarouselView, FilterCriteria, FilterOptions, Property};

use crate::error::AppError;

/// Query string of `GET /api/properties`.
///
/// Every parameter arrives as raw text: an empty value means "not set",
/// which the form sends for untouched inputs.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub location: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_rooms: Option<String>,
    pub max_rooms: Option<String>,
}

impl SearchQuery {
    pub fn to_criteria(&self) -> Result<FilterCriteria, AppError> {
        let price = Bounds::new(
            parse_price_bound("minPrice", self.min_price.as_deref())?,
            parse_price_bound("maxPrice", self.max_price.as_deref())?,
        );
        let rooms = Bounds::new(
            parse_bound("minRooms", self.min_rooms.as_deref())?,
            parse_bound("maxRooms", self.max_rooms.as_deref())?,
        );

        Ok(FilterCriteria::new()
            .with_query(self.q.clone().unwrap_or_default())
            .with_kind(self.kind.clone())
            .with_location(self.location.clone())
            .with_price(price)
            .with_rooms(rooms))
    }
}

/// Parses an optional whole-number bound. Anything but ASCII digits is rejected.
fn parse_bound<T: FromStr>(name: &str, raw: Option<&str>) -> Result<Option<T>, AppError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_a_whole_number(name, raw));
    }
    raw.parse()
        .map(Some)
        .map_err(|_| not_a_whole_number(name, raw))
}

/// Like [`parse_bound`], but accepts `.` thousands separators in groups of
/// three (`450.000`), the way listing prices are written.
fn parse_price_bound(name: &str, raw: Option<&str>) -> Result<Option<u64>, AppError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    let mut groups = raw.split('.');
    let head_ok = groups.next().is_some_and(|g| (1..=3).contains(&g.len()));
    if raw.contains('.') && !(head_ok && groups.all(|g| g.len() == 3)) {
        return Err(not_a_whole_number(name, raw));
    }
    parse_bound(name, Some(raw.replace('.', "").as_str()))
}

fn not_a_whole_number(name: &str, raw: &str) -> AppError {
    AppError::BadRequest(format!("{name} must be a whole number, got {raw:?}"))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<Property>,
    pub total: usize,
    pub no_results: bool,
    pub options: FilterOptions,
}

#[derive(Debug, Deserialize)]
pub struct CarouselQuery {
    pub width: Option<u32>,
}

/// Messages pushed to carousel WebSocket clients.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    State {
        #[serde(flatten)]
        view: CarouselView,
        #[serde(rename = "visibleIds")]
        visible_ids: Vec<u32>,
    },
    Error {
        message: String,
    },
}

impl ServerMessage {
    /// Snapshot of `view` over the carousel's `items`.
    pub fn state(view: CarouselView, items: &[u32]) -> Self {
        let visible_ids = items
            .get(view.visible())
            .map(<[u32]>::to_vec)
            .unwrap_or_default();
        ServerMessage::State { view, visible_ids }
    }
}
