use std::sync::Arc;

use tonic::Request;
use tonic::Status;

use super::authenticate;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::PhoneNumber;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::ports::UserServicePort;
use crate::proto::Profile;
use crate::proto::UpdateProfileRequest;
use crate::user::errors::UserError;

impl TryFrom<UpdateProfileRequest> for UpdateProfileCommand {
    type Error = UserError;

    fn try_from(request: UpdateProfileRequest) -> Result<Self, Self::Error> {
        let email = request.email.map(EmailAddress::new).transpose()?;
        let phone = match request.phone {
            Some(phone) => PhoneNumber::parse_optional(phone)?,
            None => None,
        };

        Ok(UpdateProfileCommand {
            first_name: request.first_name,
            last_name: request.last_name,
            email,
            phone,
        })
    }
}

pub async fn update_profile(
    service: Arc<dyn UserServicePort>,
    request: Request<UpdateProfileRequest>,
) -> Result<Profile, Status> {
    let user_id = authenticate(service.as_ref(), request.metadata()).await?;
    let command = UpdateProfileCommand::try_from(request.into_inner())?;

    let user = service.update_profile(&user_id, command).await?;
    Ok(user.into())
}
