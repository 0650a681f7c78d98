use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,           // user ID from the identity provider
    pub name: Option<String>,  // display name, used to derive viewer names
    pub email: Option<String>,
    pub is_admin: bool,
    pub exp: usize, // expiration time
}
