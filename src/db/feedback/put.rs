use chrono::Utc;
use sqlx::PgPool;

use crate::{
    db::feedback::get::get_feedback_by_id,
    errors::AppError,
    models::feedback::{check_ownership, validate_feedback_text, validate_rating},
};

/// Owner-only edit of a feedback row. The ownership check runs against the
/// stored row, not anything the client claims, and an edit re-stamps the
/// feedback date.
pub async fn update_feedback(
    feedback_id: String,
    requester_viewer_id: String,
    rating: i16,
    feedback_txt: String,
    postgres: PgPool,
) -> Result<(), AppError> {
    validate_rating(rating)?;
    validate_feedback_text(&feedback_txt)?;

    let stored = get_feedback_by_id(feedback_id.clone(), postgres.clone()).await?;
    check_ownership(&stored, &requester_viewer_id)?;

    let feedback_date = Utc::now().date_naive();

    sqlx::query(
        "UPDATE feedback
        SET rating = $1, feedback_txt = $2, feedback_date = $3
        WHERE feedback_id = $4",
    )
    .bind(rating)
    .bind(&feedback_txt)
    .bind(feedback_date)
    .bind(&feedback_id)
    .execute(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update feedback: {}", e)))?;

    tracing::info!(
        "Feedback {} updated by viewer {}",
        feedback_id,
        requester_viewer_id
    );

    Ok(())
}
