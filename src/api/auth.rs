//! Authentication endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::user::LoginRequest, AppState};

use super::ApiJson;

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Verify an email/password pair
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = MessageResponse),
        (status = 400, description = "Email or password missing", body = crate::error::ErrorResponse),
        (status = 401, description = "Unknown email or wrong password", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> AppResult<Json<MessageResponse>> {
    state.services.auth.login(&request)?;

    Ok(Json(MessageResponse {
        message: "Authentication successful".to_string(),
    }))
}
