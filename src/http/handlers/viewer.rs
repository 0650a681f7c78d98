use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::{
    auth::SessionClaims,
    db::viewer::{get::get_viewer_by_user_id, post::ensure_viewer},
    errors::AppError,
    models::viewer::ViewerSummary,
    state::AppState,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateViewerResponse {
    pub message: String,
    pub viewer_id: String,
}

pub async fn create_viewer_handler(
    State(state): State<AppState>,
    SessionClaims(claims): SessionClaims,
) -> Result<(StatusCode, Json<CreateViewerResponse>), (StatusCode, String)> {
    match ensure_viewer(
        claims.sub,
        claims.name,
        claims.email,
        state.default_country_id.clone(),
        state.postgres.clone(),
    )
    .await
    {
        Ok((viewer, created)) => {
            let (status, message) = if created {
                (
                    StatusCode::CREATED,
                    "Viewer account created successfully".to_string(),
                )
            } else {
                (StatusCode::OK, "Viewer account already exists".to_string())
            };

            Ok((
                status,
                Json(CreateViewerResponse {
                    message,
                    viewer_id: viewer.viewer_id,
                }),
            ))
        }
        Err(err) => {
            tracing::error!("Error creating viewer account: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn current_viewer_handler(
    State(state): State<AppState>,
    SessionClaims(claims): SessionClaims,
) -> Result<Json<ViewerSummary>, (StatusCode, String)> {
    let viewer = get_viewer_by_user_id(claims.sub, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching current viewer: {}", e);
            e.to_response()
        })?
        .ok_or_else(|| {
            AppError::NotFound("No viewer account found for user".into()).to_response()
        })?;

    Ok(Json(viewer.into()))
}
