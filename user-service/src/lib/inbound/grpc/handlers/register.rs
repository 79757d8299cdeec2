use std::sync::Arc;

use tonic::Status;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::ports::UserServicePort;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

pub async fn register(
    service: Arc<dyn UserServicePort>,
    request: RegisterRequest,
) -> Result<RegisterResponse, Status> {
    let command = RegisterUserCommand::new(
        request.first_name,
        request.last_name,
        request.email,
        request.phone,
        request.password,
    )?;

    service.register(command).await?;

    Ok(RegisterResponse { success: true })
}
