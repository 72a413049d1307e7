use crate::auth::{self, USERS};
use crate::dtos::auth::{LoginRequest, LoginResponse, UserResponse};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{Json, extract::State};

/// Issues a bearer token for one of the demo accounts
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login succeeded", body = LoginResponse),
        (status = 401, description = "Invalid email or password")
    ),
    tag = "Authentication"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = USERS
        .iter()
        .find(|user| user.email == payload.email && user.password == payload.password)
        .ok_or(ApiError::Unauthorized("invalid email or password"))?;

    let token = auth::issue_token(&state.jwt_secret, user)
        .map_err(|_| ApiError::Internal("failed to sign token"))?;

    Ok(Json(LoginResponse {
        token,
        user: UserResponse {
            name: user.name.to_string(),
            email: user.email.to_string(),
            role: user.role.to_string(),
        },
    }))
}
