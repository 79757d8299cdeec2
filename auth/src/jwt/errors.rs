use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Failed to decode token: {0}")]
    DecodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token is not valid yet")]
    TokenNotYetValid,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("unexpected signing method: {0}")]
    UnexpectedAlgorithm(String),

    #[error("Token claims are invalid: {0}")]
    InvalidClaims(String),

    #[error("Missing required claim: {0}")]
    MissingClaim(String),

    #[error("Invalid token configuration: {0}")]
    InvalidConfiguration(String),
}

impl From<jsonwebtoken::errors::Error> for JwtError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::ExpiredSignature => JwtError::TokenExpired,
            ErrorKind::ImmatureSignature => JwtError::TokenNotYetValid,
            ErrorKind::InvalidSignature => JwtError::InvalidSignature,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                JwtError::UnexpectedAlgorithm(err.to_string())
            }
            ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience | ErrorKind::InvalidSubject => {
                JwtError::InvalidClaims(err.to_string())
            }
            ErrorKind::MissingRequiredClaim(claim) => JwtError::MissingClaim(claim.clone()),
            _ => JwtError::DecodingFailed(err.to_string()),
        }
    }
}
