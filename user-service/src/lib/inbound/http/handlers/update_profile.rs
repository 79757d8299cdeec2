use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::ProfileData;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::PhoneNumber;
use crate::domain::user::models::UpdateProfileCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// HTTP request body for a partial profile update (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UpdateProfileRequest {
    fn try_into_command(self) -> Result<UpdateProfileCommand, UserError> {
        let email = self.email.map(EmailAddress::new).transpose()?;
        // An empty phone leaves the stored number untouched.
        let phone = match self.phone {
            Some(phone) => PhoneNumber::parse_optional(phone)?,
            None => None,
        };

        Ok(UpdateProfileCommand {
            first_name: self.first_name,
            last_name: self.last_name,
            email,
            phone,
        })
    }
}

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<ApiSuccess<ProfileData>, ApiError> {
    let command = req.try_into_command()?;

    state
        .user_service
        .update_profile(&caller.user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
