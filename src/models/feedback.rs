use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub feedback_id: String,
    pub series_id: String,
    pub viewer_id: String,
    pub rating: i16,
    pub feedback_txt: String,
    pub feedback_date: NaiveDate,
}

/// Feedback row joined with the author's name for display. The viewer
/// columns are nullable because the join is a LEFT JOIN.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackWithViewer {
    pub feedback_id: String,
    pub rating: i16,
    pub feedback_txt: String,
    pub feedback_date: NaiveDate,
    pub viewer_name: Option<String>,
    pub viewer_last_name: Option<String>,
}

/// Derived aggregate over a series' feedback, recomputed on every read.
/// `avg_rating` is `None` for an unrated series, never "0.0".
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub avg_rating: Option<String>,
    pub review_count: i64,
}

impl RatingSummary {
    pub fn from_ratings(ratings: &[i16]) -> Self {
        if ratings.is_empty() {
            return Self {
                avg_rating: None,
                review_count: 0,
            };
        }

        let sum: i64 = ratings.iter().map(|r| *r as i64).sum();
        let mean = sum as f64 / ratings.len() as f64;
        // round half-up to one decimal place
        let rounded = (mean * 10.0).round() / 10.0;

        Self {
            avg_rating: Some(format!("{rounded:.1}")),
            review_count: ratings.len() as i64,
        }
    }
}

/// The one access-control invariant of the feedback lifecycle: only the
/// author may mutate a row. Compared against the stored row server-side.
pub fn check_ownership(stored: &Feedback, requester_viewer_id: &str) -> Result<(), AppError> {
    if stored.viewer_id != requester_viewer_id {
        return Err(AppError::Forbidden(
            "You can only edit your own feedback".into(),
        ));
    }
    Ok(())
}

pub fn validate_rating(rating: i16) -> Result<(), AppError> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::BadRequest("Rating must be between 1 and 5".into()));
    }
    Ok(())
}

pub fn validate_feedback_text(feedback_txt: &str) -> Result<(), AppError> {
    if feedback_txt.trim().is_empty() {
        return Err(AppError::BadRequest("Feedback text must not be empty".into()));
    }
    Ok(())
}
