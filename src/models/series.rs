use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::feedback::FeedbackWithViewer;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    pub series_id: String,
    pub series_name: String,
    pub release_date: Option<NaiveDate>,
    pub episode_cnt: Option<i32>,
    pub type_name: Option<String>,
    pub country_name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDetail {
    pub series: SeriesSummary,
    pub feedback: Vec<FeedbackWithViewer>,
    pub avg_rating: Option<String>,
    pub review_count: i64,
}
