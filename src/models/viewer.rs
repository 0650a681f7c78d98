use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A rating identity, bound 1:1 to an authenticated user via `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Viewer {
    pub viewer_id: String,
    pub user_id: String,
    pub account_id: String,
    pub first_name: String,
    pub last_name: String,
    pub street_addr: String,
    pub city: String,
    pub state: String,
    pub zip_code: i32,
    pub open_date: NaiveDate,
    pub email_addr: String,
    pub monthly_fee: i32,
    pub country_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerSummary {
    pub viewer_id: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<Viewer> for ViewerSummary {
    fn from(viewer: Viewer) -> Self {
        Self {
            viewer_id: viewer.viewer_id,
            first_name: viewer.first_name,
            last_name: viewer.last_name,
        }
    }
}

impl Viewer {
    /// Synthesizes a fresh viewer account for a user that has none yet.
    /// Address fields get placeholders; zip_code must satisfy the
    /// storage-level "greater than zero" check.
    pub fn provision(user_id: &str, display_name: &str, email: &str, country_id: String) -> Self {
        let (first_name, last_name) = split_display_name(display_name);
        let account_id = format!("acc_{}", user_id.chars().take(8).collect::<String>());

        Self {
            viewer_id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            account_id,
            first_name,
            last_name,
            street_addr: "Address not provided".to_string(),
            city: "City not provided".to_string(),
            state: "State not provided".to_string(),
            zip_code: 10001,
            open_date: Utc::now().date_naive(),
            email_addr: email.to_string(),
            monthly_fee: 0,
            country_id,
        }
    }
}

/// Splits a display name on the first whitespace into (first, last),
/// falling back to "Unknown"/"User" for missing parts.
pub fn split_display_name(display_name: &str) -> (String, String) {
    let trimmed = display_name.trim();
    if trimmed.is_empty() {
        return ("Unknown".to_string(), "User".to_string());
    }

    match trimmed.split_once(char::is_whitespace) {
        Some((first, rest)) => (first.to_string(), rest.trim_start().to_string()),
        None => (trimmed.to_string(), "User".to_string()),
    }
}
