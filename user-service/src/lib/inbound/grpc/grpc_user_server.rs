use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tonic::Request;
use tonic::Response;
use tonic::Status;

use super::handlers::change_password;
use super::handlers::get_profile;
use super::handlers::get_public_profiles;
use super::handlers::login;
use super::handlers::register;
use super::handlers::update_profile;
use super::handlers::verify_token;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::panic_message;
use crate::inbound::INTERNAL_ERROR_MESSAGE;
use crate::proto::user_service_server::UserService as UserServiceProto;
use crate::proto::ChangePasswordRequest;
use crate::proto::ChangePasswordResponse;
use crate::proto::GetProfileRequest;
use crate::proto::GetPublicProfilesRequest;
use crate::proto::GetPublicProfilesResponse;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;
use crate::proto::Profile;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;
use crate::proto::UpdateProfileRequest;
use crate::proto::VerifyTokenRequest;
use crate::proto::VerifyTokenResponse;

pub struct UserGrpcService {
    service: Arc<dyn UserServicePort>,
}

impl UserGrpcService {
    pub fn new(service: Arc<dyn UserServicePort>) -> Self {
        Self { service }
    }
}

/// Run an RPC body, turning a panic into `INTERNAL` so one bad request
/// cannot take the server task down.
async fn guarded<T, F>(rpc: &'static str, body: F) -> Result<Response<T>, Status>
where
    F: Future<Output = Result<T, Status>>,
{
    match AssertUnwindSafe(body).catch_unwind().await {
        Ok(result) => result.map(Response::new),
        Err(payload) => {
            tracing::error!(rpc, message = %panic_message(&*payload), "rpc handler panicked");
            Err(Status::internal(INTERNAL_ERROR_MESSAGE))
        }
    }
}

#[tonic::async_trait]
impl UserServiceProto for UserGrpcService {
    async fn register(
        &self,
        request: Request<RegisterRequest>,
    ) -> Result<Response<RegisterResponse>, Status> {
        guarded(
            "Register",
            register::register(self.service.clone(), request.into_inner()),
        )
        .await
    }

    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<LoginResponse>, Status> {
        guarded(
            "Login",
            login::login(self.service.clone(), request.into_inner()),
        )
        .await
    }

    async fn verify_token(
        &self,
        request: Request<VerifyTokenRequest>,
    ) -> Result<Response<VerifyTokenResponse>, Status> {
        guarded(
            "VerifyToken",
            verify_token::verify_token(self.service.clone(), request.into_inner()),
        )
        .await
    }

    async fn get_profile(
        &self,
        request: Request<GetProfileRequest>,
    ) -> Result<Response<Profile>, Status> {
        guarded(
            "GetProfile",
            get_profile::get_profile(self.service.clone(), request),
        )
        .await
    }

    async fn update_profile(
        &self,
        request: Request<UpdateProfileRequest>,
    ) -> Result<Response<Profile>, Status> {
        guarded(
            "UpdateProfile",
            update_profile::update_profile(self.service.clone(), request),
        )
        .await
    }

    async fn change_password(
        &self,
        request: Request<ChangePasswordRequest>,
    ) -> Result<Response<ChangePasswordResponse>, Status> {
        guarded(
            "ChangePassword",
            change_password::change_password(self.service.clone(), request),
        )
        .await
    }

    async fn get_public_profiles(
        &self,
        request: Request<GetPublicProfilesRequest>,
    ) -> Result<Response<GetPublicProfilesResponse>, Status> {
        guarded(
            "GetPublicProfiles",
            get_public_profiles::get_public_profiles(self.service.clone(), request.into_inner()),
        )
        .await
    }
}
