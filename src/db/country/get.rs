use sqlx::PgPool;

use crate::errors::AppError;

/// Resolves the country assigned to freshly provisioned viewer accounts.
/// An explicitly configured id must exist; without configuration the lowest
/// country_id on record is used so the choice stays deterministic.
pub async fn resolve_default_country(
    configured: Option<&str>,
    postgres: PgPool,
) -> Result<String, AppError> {
    if let Some(country_id) = configured {
        let existing =
            sqlx::query_scalar::<_, String>("SELECT country_id FROM countries WHERE country_id = $1")
                .bind(country_id)
                .fetch_optional(&postgres)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Failed to query country: {}", e)))?;

        return existing.ok_or_else(|| {
            AppError::ConfigError(format!(
                "Configured default country '{}' does not exist",
                country_id
            ))
        });
    }

    let first =
        sqlx::query_scalar::<_, String>("SELECT country_id FROM countries ORDER BY country_id LIMIT 1")
            .fetch_optional(&postgres)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to query countries: {}", e)))?;

    first.ok_or_else(|| AppError::ConfigError("No countries available in database".into()))
}
