use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    http::handlers::{
        create_viewer_handler, current_viewer_handler, get_all_series_handler, get_series_handler,
        list_feedback_handler, submit_feedback_handler, update_feedback_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/series", get(get_all_series_handler))
        .route("/series/{series_id}", get(get_series_handler))
        .route(
            "/series/{series_id}/feedback",
            get(list_feedback_handler)
                .post(submit_feedback_handler)
                .put(update_feedback_handler),
        )
        .route("/create-viewer", post(create_viewer_handler))
        .route("/current-viewer", get(current_viewer_handler))
        .with_state(state)
}
