use thiserror::Error;

/// Stable classification attached to every domain error.
///
/// This is the only granularity that crosses the transport boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    Unauthenticated,
    InvalidArgument,
    Internal,
}

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for PhoneNumber validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhoneError {
    #[error("phone number must be between {min} and {max} characters long")]
    InvalidLength { min: usize, max: usize },
}

/// Error for password (credential) operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("password must be at least {min} characters long")]
    TooShort { min: usize },

    #[error("password hashing failed: {0}")]
    HashingFailed(String),

    #[error("password does not match")]
    Mismatch,

    #[error("password verification failed: {0}")]
    VerificationFailed(String),
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid phone: {0}")]
    InvalidPhone(#[from] PhoneError),

    #[error("{0}")]
    Password(#[from] PasswordError),

    // Domain-level errors
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("User not found with email: {0}")]
    NotFoundByEmail(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("{0}")]
    InvalidToken(String),

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl UserError {
    /// Classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::NotFound(_) | UserError::NotFoundByEmail(_) => ErrorKind::NotFound,
            UserError::EmailAlreadyExists(_) => ErrorKind::AlreadyExists,
            UserError::Password(PasswordError::Mismatch)
            | UserError::Password(PasswordError::VerificationFailed(_)) => {
                ErrorKind::Unauthenticated
            }
            UserError::Password(PasswordError::TooShort { .. })
            | UserError::InvalidUserId(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidPhone(_)
            | UserError::InvalidToken(_) => ErrorKind::InvalidArgument,
            UserError::Password(PasswordError::HashingFailed(_))
            | UserError::TokenIssuance(_)
            | UserError::DatabaseError(_)
            | UserError::Unknown(_) => ErrorKind::Internal,
        }
    }
}

impl From<auth::JwtError> for UserError {
    /// Verification failures collapse into one message, except for a rejected
    /// algorithm which is named.
    fn from(err: auth::JwtError) -> Self {
        match err {
            auth::JwtError::UnexpectedAlgorithm(alg) => {
                UserError::InvalidToken(format!("unexpected signing method: {}", alg))
            }
            auth::JwtError::EncodingFailed(msg) | auth::JwtError::InvalidConfiguration(msg) => {
                UserError::TokenIssuance(msg)
            }
            _ => UserError::InvalidToken(
                "invalid token claims or token is not valid".to_string(),
            ),
        }
    }
}
