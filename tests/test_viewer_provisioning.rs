use series_rate_be::models::viewer::{Viewer, ViewerSummary, split_display_name};
use uuid::Uuid;

#[test]
fn test_split_display_name() {
    // First whitespace splits first/last
    assert_eq!(
        split_display_name("Jane Doe"),
        ("Jane".to_string(), "Doe".to_string())
    );

    // Everything after the first word becomes the last name
    assert_eq!(
        split_display_name("Mary Jane Watson"),
        ("Mary".to_string(), "Jane Watson".to_string())
    );

    // Single-word names fall back to "User"
    assert_eq!(
        split_display_name("Madonna"),
        ("Madonna".to_string(), "User".to_string())
    );

    // Missing names fall back entirely
    assert_eq!(
        split_display_name(""),
        ("Unknown".to_string(), "User".to_string())
    );
    assert_eq!(
        split_display_name("   "),
        ("Unknown".to_string(), "User".to_string())
    );

    // Surrounding and repeated whitespace is tolerated
    assert_eq!(
        split_display_name("  Ada   Lovelace "),
        ("Ada".to_string(), "Lovelace".to_string())
    );
}

#[test]
fn test_provisioned_viewer_defaults() {
    let viewer = Viewer::provision(
        "user-12345678-extra",
        "Jane Doe",
        "jane@example.com",
        "IN".to_string(),
    );

    assert_eq!(viewer.user_id, "user-12345678-extra");
    assert_eq!(viewer.first_name, "Jane");
    assert_eq!(viewer.last_name, "Doe");
    assert_eq!(viewer.email_addr, "jane@example.com");
    assert_eq!(viewer.country_id, "IN");

    // Synthesized id is a real UUID
    assert!(Uuid::parse_str(&viewer.viewer_id).is_ok());

    // Account id is derived from the first 8 chars of the user id
    assert_eq!(viewer.account_id, "acc_user-123");

    // Placeholder fields satisfy the storage-level checks
    assert_eq!(viewer.street_addr, "Address not provided");
    assert_eq!(viewer.city, "City not provided");
    assert_eq!(viewer.state, "State not provided");
    assert!(viewer.zip_code > 0);
    assert_eq!(viewer.monthly_fee, 0);
}

#[test]
fn test_provision_handles_short_user_id() {
    let viewer = Viewer::provision("u1", "Solo", "solo@example.com", "US".to_string());

    assert_eq!(viewer.account_id, "acc_u1");
    assert_eq!(viewer.first_name, "Solo");
    assert_eq!(viewer.last_name, "User");
}

#[test]
fn test_two_provisioned_viewers_get_distinct_ids() {
    let a = Viewer::provision("user-a", "A One", "a@example.com", "US".to_string());
    let b = Viewer::provision("user-b", "B Two", "b@example.com", "US".to_string());

    assert_ne!(a.viewer_id, b.viewer_id);
}

#[test]
fn test_viewer_summary_projection() {
    let viewer = Viewer::provision("user-42", "Jane Doe", "jane@example.com", "US".to_string());
    let viewer_id = viewer.viewer_id.clone();

    let summary = ViewerSummary::from(viewer);
    assert_eq!(summary.viewer_id, viewer_id);
    assert_eq!(summary.first_name, "Jane");
    assert_eq!(summary.last_name, "Doe");
}

#[test]
fn test_viewer_serializes_camel_case() {
    let viewer = Viewer::provision("user-42", "Jane Doe", "jane@example.com", "US".to_string());
    let value = serde_json::to_value(&viewer).unwrap();

    assert_eq!(value["userId"], "user-42");
    assert_eq!(value["firstName"], "Jane");
    assert_eq!(value["lastName"], "Doe");
    assert_eq!(value["emailAddr"], "jane@example.com");
    assert_eq!(value["zipCode"], 10001);
    assert_eq!(value["monthlyFee"], 0);
    assert!(value["viewerId"].is_string());
}
