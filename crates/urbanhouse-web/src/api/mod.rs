pub mod properties;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/properties", get(properties::search))
        .route("/properties/options", get(properties::options))
        .route("/properties/{id}", get(properties::get_property))
        .route("/featured", get(properties::featured))
}
