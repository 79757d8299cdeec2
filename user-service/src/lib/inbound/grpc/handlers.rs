use tonic::metadata::MetadataMap;
use tonic::Status;

use crate::domain::user::models::PublicProfile;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::INTERNAL_ERROR_MESSAGE;
use crate::user::errors::ErrorKind;
use crate::user::errors::UserError;

pub mod change_password;
pub mod get_profile;
pub mod get_public_profiles;
pub mod login;
pub mod register;
pub mod update_profile;
pub mod verify_token;

impl From<UserError> for Status {
    fn from(err: UserError) -> Self {
        match err.kind() {
            ErrorKind::NotFound => Status::not_found(err.to_string()),
            ErrorKind::AlreadyExists => Status::already_exists(err.to_string()),
            ErrorKind::Unauthenticated => Status::unauthenticated(err.to_string()),
            ErrorKind::InvalidArgument => Status::invalid_argument(err.to_string()),
            ErrorKind::Internal => {
                tracing::error!(error = %err, "rpc failed with internal error");
                Status::internal(INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}

impl From<User> for crate::proto::Profile {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email.as_str().to_string(),
            phone: user
                .phone
                .map(|p| p.as_str().to_string())
                .unwrap_or_default(),
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}

impl From<PublicProfile> for crate::proto::PublicProfile {
    fn from(profile: PublicProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            first_name: profile.first_name,
            last_name: profile.last_name,
        }
    }
}

/// Resolve the caller from the `authorization: Bearer <token>` metadata entry.
pub(crate) async fn authenticate(
    service: &dyn UserServicePort,
    metadata: &MetadataMap,
) -> Result<UserId, Status> {
    let header = metadata
        .get("authorization")
        .ok_or_else(|| Status::unauthenticated("missing authorization metadata"))?
        .to_str()
        .map_err(|_| Status::unauthenticated("invalid authorization metadata"))?;

    let token = header.strip_prefix("Bearer ").ok_or_else(|| {
        Status::unauthenticated("invalid authorization format, expected: Bearer <token>")
    })?;

    let claims = service
        .verify_token(token, auth::TokenKind::Access)
        .await
        .map_err(|e| Status::unauthenticated(e.to_string()))?;

    UserId::from_string(&claims.user_id)
        .map_err(|_| Status::unauthenticated("invalid token subject"))
}
