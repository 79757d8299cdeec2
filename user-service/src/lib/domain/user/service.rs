use std::sync::Arc;

use async_trait::async_trait;
use auth::TokenClaims;
use auth::TokenKind;
use auth::TokenPair;
use auth::TokenService;
use chrono::Utc;

use crate::domain::user::credential::Password;
use crate::domain::user::models::PublicProfile;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
/// Holds no mutable state; share it behind an `Arc`.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    token_service: Arc<TokenService>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    pub fn new(repository: Arc<UR>, token_service: Arc<TokenService>) -> Self {
        Self {
            repository,
            token_service,
        }
    }

    async fn find_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }
}

/// Run CPU-heavy credential work on the blocking pool so it does not stall
/// other requests on the async workers.
async fn run_blocking<F, T>(work: F) -> Result<T, UserError>
where
    F: FnOnce() -> Result<T, UserError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| UserError::Unknown(format!("credential task failed: {}", e)))?
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let RegisterUserCommand {
            first_name,
            last_name,
            email,
            phone,
            password,
        } = command;

        let password_hash = run_blocking(move || password.hash().map_err(UserError::from)).await?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            first_name,
            last_name,
            email,
            phone,
            password_hash,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(user).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, UserError> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| UserError::NotFoundByEmail(email.to_string()))?;

        let password_hash = user.password_hash.clone();
        let candidate = password.to_string();
        run_blocking(move || password_hash.compare(&candidate).map_err(UserError::from)).await?;

        self.token_service
            .issue(&user.id.to_string())
            .map_err(|e| UserError::TokenIssuance(e.to_string()))
    }

    async fn verify_token(&self, token: &str, kind: TokenKind) -> Result<TokenClaims, UserError> {
        self.token_service
            .verify_kind(token, kind)
            .map_err(UserError::from)
    }

    async fn get_profile(&self, id: &UserId) -> Result<User, UserError> {
        self.find_user(id).await
    }

    async fn get_public_profiles(&self, ids: &[UserId]) -> Result<Vec<PublicProfile>, UserError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.repository.find_public_profiles(ids).await
    }

    async fn update_profile(
        &self,
        id: &UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, UserError> {
        let mut user = self.find_user(id).await?;

        if let Some(first_name) = command.first_name {
            user.first_name = first_name;
        }

        if let Some(last_name) = command.last_name {
            user.last_name = last_name;
        }

        if let Some(email) = command.email {
            user.email = email;
        }

        if let Some(phone) = command.phone {
            user.phone = Some(phone);
        }

        user.updated_at = Utc::now();

        if self.repository.update(&user).await? == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(user)
    }

    async fn change_password(
        &self,
        id: &UserId,
        current_password: &str,
        new_password: Password,
    ) -> Result<(), UserError> {
        let user = self.find_user(id).await?;

        let current_hash = user.password_hash;
        let candidate = current_password.to_string();
        let new_hash = run_blocking(move || {
            current_hash.compare(&candidate)?;
            new_password.hash().map_err(UserError::from)
        })
        .await?;

        if self.repository.change_password(id, &new_hash).await? == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
