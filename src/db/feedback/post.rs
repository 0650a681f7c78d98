use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::series::get::series_exists,
    errors::AppError,
    models::feedback::{validate_feedback_text, validate_rating},
};

/// Inserts one feedback row for (series, viewer). Validation happens before
/// any write. A viewer may submit more than one feedback row for the same
/// series; no uniqueness is enforced.
pub async fn submit_feedback(
    series_id: String,
    viewer_id: String,
    rating: i16,
    feedback_txt: String,
    postgres: PgPool,
) -> Result<String, AppError> {
    validate_rating(rating)?;
    validate_feedback_text(&feedback_txt)?;

    series_exists(series_id.clone(), postgres.clone()).await?;

    let feedback_id = Uuid::new_v4().to_string();
    let feedback_date = Utc::now().date_naive();

    sqlx::query(
        "INSERT INTO feedback (feedback_id, series_id, viewer_id, rating, feedback_txt, feedback_date)
        VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(&feedback_id)
    .bind(&series_id)
    .bind(&viewer_id)
    .bind(rating)
    .bind(&feedback_txt)
    .bind(feedback_date)
    .execute(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create feedback: {}", e)))?;

    tracing::info!(
        "Feedback {} created for series {} by viewer {}",
        feedback_id,
        series_id,
        viewer_id
    );

    Ok(feedback_id)
}
