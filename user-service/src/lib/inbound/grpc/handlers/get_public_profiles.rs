use std::sync::Arc;

use tonic::Status;

use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::proto::GetPublicProfilesRequest;
use crate::proto::GetPublicProfilesResponse;
use crate::user::errors::UserError;

pub async fn get_public_profiles(
    service: Arc<dyn UserServicePort>,
    request: GetPublicProfilesRequest,
) -> Result<GetPublicProfilesResponse, Status> {
    let ids = request
        .user_ids
        .iter()
        .map(|id| UserId::from_string(id).map_err(UserError::from))
        .collect::<Result<Vec<_>, _>>()?;

    let profiles = service.get_public_profiles(&ids).await?;

    Ok(GetPublicProfilesResponse {
        profiles: profiles.into_iter().map(Into::into).collect(),
    })
}
