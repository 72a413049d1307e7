use crate::{error::ApiError, state::AppState};
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

const TOKEN_TTL_HOURS: i64 = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub role: String,
    pub exp: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct StaticUser {
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub role: &'static str,
}

// Demo account list; credential storage is a known gap and stays out of the
// core design
pub const USERS: &[StaticUser] = &[
    StaticUser {
        name: "Admin",
        email: "admin@clinicflow.com",
        password: "admin",
        role: "admin",
    },
    StaticUser {
        name: "Dra. Helena",
        email: "helena@clinicflow.com",
        password: "123",
        role: "professional",
    },
];

pub fn issue_token(secret: &str, user: &StaticUser) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user.email.to_string(),
        name: user.name.to_string(),
        role: user.role.to_string(),
        exp: (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn verify_token(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

/// Bearer gate for everything under `/api` except the login route
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(ApiError::Unauthorized("missing bearer token"))?;

    let claims = verify_token(&state.jwt_secret, token)
        .map_err(|_| ApiError::Unauthorized("invalid token"))?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
