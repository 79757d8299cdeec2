use std::sync::Arc;

use tonic::Request;
use tonic::Status;

use super::authenticate;
use crate::domain::user::credential::Password;
use crate::domain::user::ports::UserServicePort;
use crate::proto::ChangePasswordRequest;
use crate::proto::ChangePasswordResponse;
use crate::user::errors::UserError;

pub async fn change_password(
    service: Arc<dyn UserServicePort>,
    request: Request<ChangePasswordRequest>,
) -> Result<ChangePasswordResponse, Status> {
    let user_id = authenticate(service.as_ref(), request.metadata()).await?;
    let request = request.into_inner();

    let new_password = Password::new(request.new_password).map_err(UserError::from)?;
    service
        .change_password(&user_id, &request.current_password, new_password)
        .await?;

    Ok(ChangePasswordResponse { success: true })
}
