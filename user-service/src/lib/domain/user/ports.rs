use async_trait::async_trait;

use crate::domain::user::credential::Password;
use crate::domain::user::credential::PasswordHash;
use crate::domain::user::models::PublicProfile;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user from a validated command.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password(HashingFailed)` - Password could not be hashed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Authenticate by email and password and issue a token pair.
    ///
    /// # Errors
    /// * `NotFoundByEmail` - No user with this email
    /// * `Password(Mismatch | VerificationFailed)` - Password check failed
    /// * `TokenIssuance` - Signing failed
    async fn login(&self, email: &str, password: &str) -> Result<auth::TokenPair, UserError>;

    /// Verify a token of the expected kind and return its identity.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is malformed, mis-signed, expired or not yet valid
    async fn verify_token(
        &self,
        token: &str,
        kind: auth::TokenKind,
    ) -> Result<auth::TokenClaims, UserError>;

    /// Retrieve a user by identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_profile(&self, id: &UserId) -> Result<User, UserError>;

    /// Retrieve public profiles; unknown IDs are skipped without error.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn get_public_profiles(&self, ids: &[UserId]) -> Result<Vec<PublicProfile>, UserError>;

    /// Apply a partial profile update.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update_profile(
        &self,
        id: &UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, UserError>;

    /// Replace the password after checking the current one.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Password(Mismatch | VerificationFailed)` - Current password is wrong
    /// * `DatabaseError` - Database operation failed
    async fn change_password(
        &self,
        id: &UserId,
        current_password: &str,
        new_password: Password,
    ) -> Result<(), UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Unique constraint on email violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Update profile fields of an existing user.
    ///
    /// # Returns
    /// Number of rows affected
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, user: &User) -> Result<u64, UserError>;

    /// Store a new password hash.
    ///
    /// # Returns
    /// Number of rows affected
    async fn change_password(
        &self,
        id: &UserId,
        password_hash: &PasswordHash,
    ) -> Result<u64, UserError>;

    /// Retrieve public profiles for the given identifiers.
    ///
    /// # Returns
    /// Profiles of the users that exist (missing IDs are skipped)
    async fn find_public_profiles(&self, ids: &[UserId]) -> Result<Vec<PublicProfile>, UserError>;
}
