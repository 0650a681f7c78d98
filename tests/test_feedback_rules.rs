use axum::http::StatusCode;
use chrono::NaiveDate;
use series_rate_be::models::feedback::{
    Feedback, RatingSummary, check_ownership, validate_feedback_text, validate_rating,
};

fn sample_feedback(viewer_id: &str) -> Feedback {
    Feedback {
        feedback_id: "fb-1".to_string(),
        series_id: "ws-1".to_string(),
        viewer_id: viewer_id.to_string(),
        rating: 3,
        feedback_txt: "Decent pacing".to_string(),
        feedback_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    }
}

#[test]
fn test_rating_bounds() {
    // Valid cases
    assert!(validate_rating(1).is_ok());
    assert!(validate_rating(3).is_ok());
    assert!(validate_rating(5).is_ok());

    // Invalid cases
    assert!(validate_rating(0).is_err());
    assert!(validate_rating(6).is_err());
    assert!(validate_rating(-2).is_err());

    // Check error message and status
    let err = validate_rating(0).unwrap_err();
    let (status, message) = err.to_response();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(message.contains("between 1 and 5"));
}

#[test]
fn test_feedback_text_must_not_be_empty() {
    // Valid cases
    assert!(validate_feedback_text("Great show").is_ok());
    assert!(validate_feedback_text("  padded but real  ").is_ok());

    // Invalid cases
    assert!(validate_feedback_text("").is_err());
    assert!(validate_feedback_text("   ").is_err());
    assert!(validate_feedback_text("\n\t").is_err());

    let err = validate_feedback_text("   ").unwrap_err();
    let (status, message) = err.to_response();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(message.contains("must not be empty"));
}

#[test]
fn test_ownership_check() {
    let stored = sample_feedback("viewer-a");

    assert!(check_ownership(&stored, "viewer-a").is_ok());

    let err = check_ownership(&stored, "viewer-b").unwrap_err();
    let (status, message) = err.to_response();
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(message.contains("your own feedback"));
}

#[test]
fn test_unrated_series_has_no_average() {
    let summary = RatingSummary::from_ratings(&[]);

    assert_eq!(summary.review_count, 0);
    // Reported as absent, never "0.0"
    assert_eq!(summary.avg_rating, None);
}

#[test]
fn test_average_is_mean_to_one_decimal() {
    let summary = RatingSummary::from_ratings(&[5, 4, 3]);
    assert_eq!(summary.avg_rating.as_deref(), Some("4.0"));
    assert_eq!(summary.review_count, 3);

    let summary = RatingSummary::from_ratings(&[5]);
    assert_eq!(summary.avg_rating.as_deref(), Some("5.0"));
    assert_eq!(summary.review_count, 1);

    let summary = RatingSummary::from_ratings(&[4, 4, 5]);
    assert_eq!(summary.avg_rating.as_deref(), Some("4.3"));

    let summary = RatingSummary::from_ratings(&[1, 1, 2]);
    assert_eq!(summary.avg_rating.as_deref(), Some("1.3"));
}

#[test]
fn test_average_rounds_half_up() {
    // 17 / 4 = 4.25 -> 4.3
    let summary = RatingSummary::from_ratings(&[4, 4, 4, 5]);
    assert_eq!(summary.avg_rating.as_deref(), Some("4.3"));

    // 3 / 2 = 1.5, exact at one decimal
    let summary = RatingSummary::from_ratings(&[1, 2]);
    assert_eq!(summary.avg_rating.as_deref(), Some("1.5"));
}

#[test]
fn test_rating_summary_wire_shape() {
    let unrated = serde_json::to_value(RatingSummary::from_ratings(&[])).unwrap();
    assert_eq!(unrated["avgRating"], serde_json::Value::Null);
    assert_eq!(unrated["reviewCount"], 0);

    let rated = serde_json::to_value(RatingSummary::from_ratings(&[5, 4, 3])).unwrap();
    assert_eq!(rated["avgRating"], "4.0");
    assert_eq!(rated["reviewCount"], 3);
}

#[test]
fn test_feedback_serializes_camel_case() {
    let value = serde_json::to_value(sample_feedback("viewer-a")).unwrap();

    assert_eq!(value["feedbackId"], "fb-1");
    assert_eq!(value["seriesId"], "ws-1");
    assert_eq!(value["viewerId"], "viewer-a");
    assert_eq!(value["feedbackTxt"], "Decent pacing");
    assert_eq!(value["feedbackDate"], "2026-01-15");
}
