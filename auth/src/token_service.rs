use std::time::Duration;

use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::TokenClaims;

/// Issuer written into, and required from, every token.
pub const ISSUER: &str = "UserService";

/// Which of the two secrets a token is expected to be signed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Construction-time settings for [`TokenService`].
#[derive(Clone)]
pub struct TokenConfig {
    pub access_secret: Vec<u8>,
    pub refresh_secret: Vec<u8>,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
    pub audience: Option<String>,
}

/// Freshly issued access/refresh token pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

/// Stateless issuer and verifier of access/refresh token pairs.
///
/// Holds only immutable keys and lifetimes, so one instance can be shared
/// across any number of concurrent requests.
pub struct TokenService {
    access: JwtHandler,
    refresh: JwtHandler,
    access_ttl: Duration,
    refresh_ttl: Duration,
    audience: Option<String>,
}

impl TokenService {
    /// Create a token service.
    ///
    /// # Errors
    /// * `InvalidConfiguration` - A secret is empty, both secrets are equal,
    ///   or a lifetime is zero or too large
    pub fn new(config: TokenConfig) -> Result<Self, JwtError> {
        if config.access_secret.is_empty() || config.refresh_secret.is_empty() {
            return Err(JwtError::InvalidConfiguration(
                "token secrets must not be empty".to_string(),
            ));
        }
        if config.access_secret == config.refresh_secret {
            return Err(JwtError::InvalidConfiguration(
                "access and refresh secrets must differ".to_string(),
            ));
        }
        for (name, ttl) in [("access", config.access_ttl), ("refresh", config.refresh_ttl)] {
            if ttl.is_zero() || i64::try_from(ttl.as_secs()).is_err() {
                return Err(JwtError::InvalidConfiguration(format!(
                    "{} token lifetime must be a positive number of seconds",
                    name
                )));
            }
        }

        Ok(Self {
            access: Self::handler(&config.access_secret, config.audience.as_deref()),
            refresh: Self::handler(&config.refresh_secret, config.audience.as_deref()),
            access_ttl: config.access_ttl,
            refresh_ttl: config.refresh_ttl,
            audience: config.audience,
        })
    }

    fn handler(secret: &[u8], audience: Option<&str>) -> JwtHandler {
        JwtHandler::new(secret)
            .with_issuer(ISSUER)
            .with_audience(audience)
    }

    /// Issue an access/refresh pair for `user_id`.
    ///
    /// Both tokens share one creation timestamp and carry distinct token IDs.
    /// If either signature fails, no pair is returned.
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing either token failed
    pub fn issue(&self, user_id: &str) -> Result<TokenPair, JwtError> {
        let created_at = Utc::now();

        let access_claims = Claims::new(user_id, ISSUER, created_at, self.access_ttl)
            .with_audience(self.audience.clone());
        let refresh_claims = Claims::new(user_id, ISSUER, created_at, self.refresh_ttl)
            .with_audience(self.audience.clone());

        let access_token = self.access.encode(&access_claims)?;
        let refresh_token = self.refresh.encode(&refresh_claims)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: self.access_ttl.as_secs() as i64,
        })
    }

    /// Verify `token` against a caller-supplied `secret`.
    ///
    /// The secret is never derived from the token. Non-HMAC headers, bad
    /// signatures, expired or not-yet-valid tokens and foreign issuers are all
    /// rejected.
    pub fn verify(&self, token: &str, secret: &[u8]) -> Result<TokenClaims, JwtError> {
        let handler = Self::handler(secret, self.audience.as_deref());
        let claims: Claims = handler.decode(token)?;

        Ok(claims.token_claims())
    }

    /// Verify `token` as the given kind, using the matching configured secret.
    pub fn verify_kind(&self, token: &str, kind: TokenKind) -> Result<TokenClaims, JwtError> {
        let handler = match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        };
        let claims: Claims = handler.decode(token)?;

        Ok(claims.token_claims())
    }
}
