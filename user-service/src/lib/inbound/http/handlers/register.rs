use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::ProfileData;
use crate::domain::user::models::RegisterUserCommand;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<ApiSuccess<ProfileData>, ApiError> {
    let command = RegisterUserCommand::new(
        body.first_name,
        body.last_name,
        body.email,
        body.phone,
        body.password,
    )?;

    state
        .user_service
        .register(command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for registration (raw JSON)
#[derive(Deserialize)]
pub struct RegisterRequest {
    first_name: String,
    last_name: String,
    email: String,
    #[serde(default)]
    phone: String,
    password: String,
}
