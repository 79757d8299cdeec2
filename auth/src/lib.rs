//! Authentication primitives shared by the identity service.
//!
//! - Password hashing (Argon2id)
//! - HMAC-signed JWT encoding and decoding
//! - Stateless access/refresh token pairs
//!
//! Services wrap these in their own domain types and error taxonomy.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Token Pairs
//! ```
//! use std::time::Duration;
//!
//! use auth::{TokenConfig, TokenKind, TokenService};
//!
//! let service = TokenService::new(TokenConfig {
//!     access_secret: b"access_secret_at_least_32_bytes_long".to_vec(),
//!     refresh_secret: b"refresh_secret_at_least_32_bytes_lon".to_vec(),
//!     access_ttl: Duration::from_secs(30 * 60),
//!     refresh_ttl: Duration::from_secs(7 * 24 * 60 * 60),
//!     audience: None,
//! })
//! .unwrap();
//!
//! let pair = service.issue("user123").unwrap();
//! let claims = service.verify_kind(&pair.access_token, TokenKind::Access).unwrap();
//! assert_eq!(claims.user_id, "user123");
//! ```

pub mod jwt;
pub mod password;
pub mod token_service;

pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenClaims;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token_service::TokenConfig;
pub use token_service::TokenKind;
pub use token_service::TokenPair;
pub use token_service::TokenService;
pub use token_service::ISSUER;
