use std::sync::Arc;

use tonic::Status;

use crate::domain::user::ports::UserServicePort;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login(
    service: Arc<dyn UserServicePort>,
    request: LoginRequest,
) -> Result<LoginResponse, Status> {
    let pair = service.login(&request.email, &request.password).await?;

    Ok(LoginResponse {
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
        expires_in: pair.expires_in,
    })
}
