use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    db::{
        feedback::get::{compute_aggregate, list_feedback_for_series},
        series::get::{get_all_series, get_series_by_id},
    },
    models::series::{SeriesDetail, SeriesSummary},
    state::AppState,
};

pub async fn get_all_series_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<SeriesSummary>>, (StatusCode, String)> {
    let series = get_all_series(state.postgres.clone()).await.map_err(|e| {
        tracing::error!("Error fetching web series: {}", e);
        e.to_response()
    })?;

    Ok(Json(series))
}

pub async fn get_series_handler(
    State(state): State<AppState>,
    Path(series_id): Path<String>,
) -> Result<Json<SeriesDetail>, (StatusCode, String)> {
    let series = get_series_by_id(series_id.clone(), state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching web series details: {}", e);
            e.to_response()
        })?;

    let feedback = list_feedback_for_series(series_id.clone(), state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching feedback: {}", e);
            e.to_response()
        })?;

    let rating = compute_aggregate(series_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error computing rating summary: {}", e);
            e.to_response()
        })?;

    Ok(Json(SeriesDetail {
        series,
        feedback,
        avg_rating: rating.avg_rating,
        review_count: rating.review_count,
    }))
}
