use std::time::Duration;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Claims carried by access and refresh tokens.
///
/// Standard RFC 7519 registered claims plus the `user_id` the token is bound to.
/// Timestamps are Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Identifier of the user the token was issued for
    pub user_id: String,

    /// Subject (same value as `user_id`)
    pub sub: String,

    /// Issuer
    pub iss: String,

    /// Audience
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,

    /// Expiration time
    pub exp: i64,

    /// Not before
    pub nbf: i64,

    /// Issued at
    pub iat: i64,

    /// JWT ID, unique per signed token
    pub jti: String,
}

/// Identity extracted from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub user_id: String,
    pub token_id: String,
}

impl Claims {
    /// Build claims for `user_id`, valid from `issued_at` for `lifetime`.
    ///
    /// A fresh random token ID is generated on every call.
    pub fn new(
        user_id: impl ToString,
        issuer: impl ToString,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Self {
        let user_id = user_id.to_string();
        let now = issued_at.timestamp();
        let lifetime = i64::try_from(lifetime.as_secs()).unwrap_or(i64::MAX);

        Self {
            sub: user_id.clone(),
            user_id,
            iss: issuer.to_string(),
            aud: None,
            exp: now.saturating_add(lifetime),
            nbf: now,
            iat: now,
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Set audience.
    pub fn with_audience(mut self, aud: Option<String>) -> Self {
        self.aud = aud;
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = exp;
        self
    }

    /// Identity portion of the claims.
    pub fn token_claims(&self) -> TokenClaims {
        TokenClaims {
            user_id: self.user_id.clone(),
            token_id: self.jti.clone(),
        }
    }
}
