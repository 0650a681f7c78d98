use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::feedback::{Feedback, FeedbackWithViewer, RatingSummary},
};

pub async fn get_feedback_by_id(
    feedback_id: String,
    postgres: PgPool,
) -> Result<Feedback, AppError> {
    let feedback = sqlx::query_as::<_, Feedback>(
        "SELECT feedback_id, series_id, viewer_id, rating, feedback_txt, feedback_date
        FROM feedback
        WHERE feedback_id = $1",
    )
    .bind(&feedback_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to query feedback: {}", e)))?;

    feedback.ok_or_else(|| AppError::NotFound("Feedback not found".into()))
}

/// All feedback for a series, oldest first, with the author's name joined in
/// for display.
pub async fn list_feedback_for_series(
    series_id: String,
    postgres: PgPool,
) -> Result<Vec<FeedbackWithViewer>, AppError> {
    sqlx::query_as::<_, FeedbackWithViewer>(
        "SELECT f.feedback_id, f.rating, f.feedback_txt, f.feedback_date,
                v.first_name AS viewer_name, v.last_name AS viewer_last_name
        FROM feedback f
        LEFT JOIN viewer_accounts v ON f.viewer_id = v.viewer_id
        WHERE f.series_id = $1
        ORDER BY f.feedback_date",
    )
    .bind(&series_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch feedback: {}", e)))
}

/// Recomputes the mean rating and review count from the stored rows. Derived
/// on every read, never persisted.
pub async fn compute_aggregate(
    series_id: String,
    postgres: PgPool,
) -> Result<RatingSummary, AppError> {
    let ratings = sqlx::query_scalar::<_, i16>("SELECT rating FROM feedback WHERE series_id = $1")
        .bind(&series_id)
        .fetch_all(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch ratings: {}", e)))?;

    Ok(RatingSummary::from_ratings(&ratings))
}
