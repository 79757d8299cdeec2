use std::fmt;

use crate::user::errors::PasswordError;

/// Plaintext password as supplied by a client.
///
/// Only obtainable through [`Password::new`], so every instance satisfies the
/// length policy. Never persisted; `Debug` output is redacted.
pub struct Password(String);

impl Password {
    pub const MIN_LENGTH: usize = 8;

    /// Validate and wrap a raw password.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 8 characters
    pub fn new(raw: String) -> Result<Self, PasswordError> {
        Self::validate(&raw)?;
        Ok(Self(raw))
    }

    /// Check the length policy without taking ownership.
    pub fn validate(raw: &str) -> Result<(), PasswordError> {
        if raw.chars().count() < Self::MIN_LENGTH {
            return Err(PasswordError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }
        Ok(())
    }

    /// Produce a salted one-way hash. Each call uses a new salt.
    ///
    /// CPU-heavy; callers on an async runtime should run it on the blocking pool.
    ///
    /// # Errors
    /// * `HashingFailed` - The hasher could not produce a digest
    pub fn hash(&self) -> Result<PasswordHash, PasswordError> {
        auth::PasswordHasher::new()
            .hash(&self.0)
            .map(PasswordHash)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Persisted form of a password: an Argon2id PHC string.
///
/// Only [`compare`](Self::compare) checks a hash; two hashes are never compared
/// with each other.
///
/// ```compile_fail
/// use user_service::domain::user::credential::PasswordHash;
///
/// let stored = PasswordHash::from_stored("$argon2id$...".to_string());
/// let _ = stored == stored.clone();
/// ```
#[derive(Clone)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Rebuild from a stored hash. The string is parsed lazily by [`compare`](Self::compare).
    pub fn from_stored(hash: String) -> Self {
        Self(hash)
    }

    /// Verify `candidate` against this hash.
    ///
    /// # Errors
    /// * `Mismatch` - The candidate is not the original password
    /// * `VerificationFailed` - The stored hash is malformed or unusable
    pub fn compare(&self, candidate: &str) -> Result<(), PasswordError> {
        match auth::PasswordHasher::new().verify(candidate, &self.0) {
            Ok(true) => Ok(()),
            Ok(false) => Err(PasswordError::Mismatch),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(***)")
    }
}
