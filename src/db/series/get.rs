use sqlx::PgPool;

use crate::{errors::AppError, models::series::SeriesSummary};

pub async fn get_all_series(postgres: PgPool) -> Result<Vec<SeriesSummary>, AppError> {
    sqlx::query_as::<_, SeriesSummary>(
        "SELECT ws.series_id, ws.series_name, ws.release_date, ws.episode_cnt,
                st.type_name, c.country_name
        FROM web_series ws
        LEFT JOIN series_types st ON ws.type_id = st.type_id
        LEFT JOIN countries c ON ws.country_id = c.country_id
        ORDER BY ws.series_name",
    )
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch web series: {}", e)))
}

pub async fn get_series_by_id(
    series_id: String,
    postgres: PgPool,
) -> Result<SeriesSummary, AppError> {
    let series = sqlx::query_as::<_, SeriesSummary>(
        "SELECT ws.series_id, ws.series_name, ws.release_date, ws.episode_cnt,
                st.type_name, c.country_name
        FROM web_series ws
        LEFT JOIN series_types st ON ws.type_id = st.type_id
        LEFT JOIN countries c ON ws.country_id = c.country_id
        WHERE ws.series_id = $1",
    )
    .bind(&series_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch web series: {}", e)))?;

    series.ok_or_else(|| AppError::NotFound("Web series not found".into()))
}

/// Existence check used before accepting feedback for a series.
pub async fn series_exists(series_id: String, postgres: PgPool) -> Result<(), AppError> {
    let found = sqlx::query_scalar::<_, String>("SELECT series_id FROM web_series WHERE series_id = $1")
        .bind(&series_id)
        .fetch_optional(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to query web series: {}", e)))?;

    if found.is_none() {
        return Err(AppError::NotFound("Web series not found".into()));
    }

    Ok(())
}
