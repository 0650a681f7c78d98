use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::{
    auth::SessionClaims,
    db::{
        feedback::{get::list_feedback_for_series, post::submit_feedback, put::update_feedback},
        viewer::{get::get_viewer_by_user_id, post::ensure_viewer},
    },
    errors::AppError,
    models::feedback::FeedbackWithViewer,
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackPayload {
    pub rating: i16,
    pub feedback_txt: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeedbackPayload {
    pub feedback_id: String,
    pub rating: i16,
    pub feedback_txt: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackResponse {
    pub message: String,
    pub feedback_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeedbackResponse {
    pub message: String,
}

pub async fn list_feedback_handler(
    State(state): State<AppState>,
    Path(series_id): Path<String>,
) -> Result<Json<Vec<FeedbackWithViewer>>, (StatusCode, String)> {
    let feedback = list_feedback_for_series(series_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching feedback: {}", e);
            e.to_response()
        })?;

    Ok(Json(feedback))
}

pub async fn submit_feedback_handler(
    State(state): State<AppState>,
    Path(series_id): Path<String>,
    SessionClaims(claims): SessionClaims,
    Json(payload): Json<SubmitFeedbackPayload>,
) -> Result<(StatusCode, Json<SubmitFeedbackResponse>), (StatusCode, String)> {
    // First submission provisions the viewer account lazily.
    let (viewer, _) = ensure_viewer(
        claims.sub,
        claims.name,
        claims.email,
        state.default_country_id.clone(),
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error resolving viewer for feedback: {}", e);
        e.to_response()
    })?;

    match submit_feedback(
        series_id,
        viewer.viewer_id,
        payload.rating,
        payload.feedback_txt,
        state.postgres.clone(),
    )
    .await
    {
        Ok(feedback_id) => Ok((
            StatusCode::CREATED,
            Json(SubmitFeedbackResponse {
                message: "Feedback created successfully".to_string(),
                feedback_id,
            }),
        )),
        Err(err) => {
            tracing::error!("Error creating feedback: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn update_feedback_handler(
    State(state): State<AppState>,
    // series id is part of the route shape but the row is addressed by
    // feedback id alone
    Path(_series_id): Path<String>,
    SessionClaims(claims): SessionClaims,
    Json(payload): Json<UpdateFeedbackPayload>,
) -> Result<Json<UpdateFeedbackResponse>, (StatusCode, String)> {
    let viewer = get_viewer_by_user_id(claims.sub, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error resolving viewer for feedback update: {}", e);
            e.to_response()
        })?
        .ok_or_else(|| {
            AppError::NotFound("No viewer account found for user".into()).to_response()
        })?;

    match update_feedback(
        payload.feedback_id,
        viewer.viewer_id,
        payload.rating,
        payload.feedback_txt,
        state.postgres.clone(),
    )
    .await
    {
        Ok(()) => Ok(Json(UpdateFeedbackResponse {
            message: "Feedback updated successfully".to_string(),
        })),
        Err(err) => {
            tracing::error!("Error updating feedback: {}", err);
            Err(err.to_response())
        }
    }
}
