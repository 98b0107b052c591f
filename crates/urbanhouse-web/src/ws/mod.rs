mod carousel;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/carousel", get(carousel::carousel_handler))
}
