use sqlx::PgPool;

use crate::{errors::AppError, models::Viewer};

/// Pure lookup by external user id; never provisions. Read paths must not
/// create a viewer account as a side effect of a GET.
pub async fn get_viewer_by_user_id(
    user_id: String,
    postgres: PgPool,
) -> Result<Option<Viewer>, AppError> {
    sqlx::query_as::<_, Viewer>(
        "SELECT viewer_id, user_id, account_id, first_name, last_name,
                street_addr, city, state, zip_code, open_date, email_addr,
                monthly_fee, country_id
        FROM viewer_accounts
        WHERE user_id = $1",
    )
    .bind(&user_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to query viewer account: {}", e)))
}
