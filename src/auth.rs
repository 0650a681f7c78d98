use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use axum_extra::TypedHeader;
use chrono::{Duration, Utc};
use headers::{Authorization, authorization::Bearer};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::{errors::AppError, models::session::Claims};

/// Verified session identity. Token issuance lives in the external auth
/// service; this side only checks the shared-secret signature and expiry.
#[derive(Debug)]
pub struct SessionClaims(pub Claims);

impl<S> FromRequestParts<S> for SessionClaims
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, _state)
                .await
                .map_err(|_| {
                    AppError::Unauthorized("Missing or invalid Authorization header".into())
                        .to_response()
                })?;

        SessionClaims::from_token(bearer.token()).map_err(|e| e.to_response())
    }
}

impl SessionClaims {
    pub fn from_token(token: &str) -> Result<Self, AppError> {
        let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|_| AppError::Unauthorized("Invalid or expired session token".into()))?;

        Ok(Self(token_data.claims))
    }
}

pub fn generate_session_token(
    user_id: &str,
    name: Option<String>,
    email: Option<String>,
    is_admin: bool,
) -> Result<String, AppError> {
    let expiration = (Utc::now() + Duration::hours(24)).timestamp() as usize;
    let claims = Claims {
        sub: user_id.to_string(),
        name,
        email,
        is_admin,
        exp: expiration,
    };

    let secret = std::env::var("JWT_SECRET").map_err(|e| AppError::EnvError(e.to_string()))?;
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(AppError::JwtError)
}
