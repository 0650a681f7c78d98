use sqlx::PgPool;

use crate::{
    db::{country::get::resolve_default_country, viewer::get::get_viewer_by_user_id},
    errors::AppError,
    models::Viewer,
};

/// Guarantees a viewer account exists for the user and returns it along with
/// whether this call created it. Idempotent: an existing account is returned
/// unchanged, with no writes.
pub async fn ensure_viewer(
    user_id: String,
    display_name: Option<String>,
    email: Option<String>,
    default_country_id: Option<String>,
    postgres: PgPool,
) -> Result<(Viewer, bool), AppError> {
    if let Some(existing) = get_viewer_by_user_id(user_id.clone(), postgres.clone()).await? {
        return Ok((existing, false));
    }

    let country_id =
        resolve_default_country(default_country_id.as_deref(), postgres.clone()).await?;

    let display_name = display_name.unwrap_or_else(|| "Unknown User".to_string());
    let email = email.unwrap_or_else(|| "unknown@example.com".to_string());

    let viewer = Viewer::provision(&user_id, &display_name, &email, country_id);

    sqlx::query(
        "INSERT INTO viewer_accounts (viewer_id, user_id, account_id, first_name, last_name,
                street_addr, city, state, zip_code, open_date, email_addr, monthly_fee, country_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
    )
    .bind(&viewer.viewer_id)
    .bind(&viewer.user_id)
    .bind(&viewer.account_id)
    .bind(&viewer.first_name)
    .bind(&viewer.last_name)
    .bind(&viewer.street_addr)
    .bind(&viewer.city)
    .bind(&viewer.state)
    .bind(viewer.zip_code)
    .bind(viewer.open_date)
    .bind(&viewer.email_addr)
    .bind(viewer.monthly_fee)
    .bind(&viewer.country_id)
    .execute(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create viewer account: {}", e)))?;

    tracing::info!(
        "Provisioned viewer account {} for user {}",
        viewer.viewer_id,
        user_id
    );

    Ok((viewer, true))
}
