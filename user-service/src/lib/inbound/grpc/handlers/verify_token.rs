use std::sync::Arc;

use auth::TokenKind;
use tonic::Status;

use crate::domain::user::ports::UserServicePort;
use crate::proto;
use crate::proto::VerifyTokenRequest;
use crate::proto::VerifyTokenResponse;

pub async fn verify_token(
    service: Arc<dyn UserServicePort>,
    request: VerifyTokenRequest,
) -> Result<VerifyTokenResponse, Status> {
    let kind = match proto::TokenKind::try_from(request.kind) {
        Ok(proto::TokenKind::Access) => TokenKind::Access,
        Ok(proto::TokenKind::Refresh) => TokenKind::Refresh,
        Err(_) => {
            return Err(Status::invalid_argument(format!(
                "unknown token kind: {}",
                request.kind
            )))
        }
    };

    let claims = service.verify_token(&request.token, kind).await?;

    Ok(VerifyTokenResponse {
        user_id: claims.user_id,
        token_id: claims.token_id,
    })
}
