//! User account recovery endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::user::PublicUser,
    AppState,
};

use super::ApiJson;

#[derive(Serialize, ToSchema)]
pub struct ResetResponse {
    pub message: String,
    pub user: PublicUser,
}

/// Reset a password by answering the account's security questions in order
#[utoipa::path(
    post,
    path = "/users/{email}/verify-security-question",
    tag = "users",
    params(
        ("email" = String, Path, description = "Account email (case-sensitive)")
    ),
    request_body = crate::models::user::PasswordReset,
    responses(
        (status = 200, description = "Password replaced", body = ResetResponse),
        (status = 400, description = "Payload does not match the schema", body = crate::error::ErrorResponse),
        (status = 401, description = "Answers do not match", body = crate::error::ErrorResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn verify_security_question(
    State(state): State<AppState>,
    Path(email): Path<String>,
    ApiJson(payload): ApiJson<Value>,
) -> AppResult<Json<ResetResponse>> {
    let user = state.services.reset.reset_password(&email, &payload)?;

    Ok(Json(ResetResponse {
        message: "Password reset successful".to_string(),
        user,
    }))
}
