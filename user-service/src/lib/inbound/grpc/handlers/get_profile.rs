use std::sync::Arc;

use tonic::Request;
use tonic::Status;

use super::authenticate;
use crate::domain::user::ports::UserServicePort;
use crate::proto::GetProfileRequest;
use crate::proto::Profile;

pub async fn get_profile(
    service: Arc<dyn UserServicePort>,
    request: Request<GetProfileRequest>,
) -> Result<Profile, Status> {
    let user_id = authenticate(service.as_ref(), request.metadata()).await?;
    let user = service.get_profile(&user_id).await?;
    Ok(user.into())
}
