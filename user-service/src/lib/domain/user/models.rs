use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::credential::Password;
use crate::user::credential::PasswordHash;
use crate::user::errors::EmailError;
use crate::user::errors::PhoneError;
use crate::user::errors::UserError;
use crate::user::errors::UserIdError;

/// User aggregate entity.
///
/// Represents a registered account. The password is only ever held in hashed form.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub phone: Option<PhoneNumber>,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Public projection served to other services.
    pub fn public_profile(&self) -> PublicProfile {
        PublicProfile {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Subset of a user that other services may see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicProfile {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Phone number type
///
/// 10 to 15 characters. An empty input means "no phone number" and is
/// represented as `None` by [`PhoneNumber::parse_optional`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    const MIN_LENGTH: usize = 10;
    const MAX_LENGTH: usize = 15;

    /// # Errors
    /// * `InvalidLength` - Outside the 10..=15 character range
    pub fn new(phone: String) -> Result<Self, PhoneError> {
        let length = phone.chars().count();
        if (Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
            Ok(Self(phone))
        } else {
            Err(PhoneError::InvalidLength {
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
            })
        }
    }

    /// Empty string maps to `None`, anything else must be a valid number.
    pub fn parse_optional(phone: String) -> Result<Option<Self>, PhoneError> {
        if phone.is_empty() {
            Ok(None)
        } else {
            Self::new(phone).map(Some)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub phone: Option<PhoneNumber>,
    pub password: Password,
}

impl RegisterUserCommand {
    /// Validate raw registration input.
    ///
    /// Checks email, then password, then phone, and returns the first failure.
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        phone: String,
        password: String,
    ) -> Result<Self, UserError> {
        let email = EmailAddress::new(email)?;
        let password = Password::new(password)?;
        let phone = PhoneNumber::parse_optional(phone)?;

        Ok(Self {
            first_name,
            last_name,
            email,
            phone,
            password,
        })
    }
}

/// Command to update an existing user's profile.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug, Default)]
pub struct UpdateProfileCommand {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<EmailAddress>,
    pub phone: Option<PhoneNumber>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::errors::PasswordError;

    fn register(email: &str, phone: &str, password: &str) -> Result<RegisterUserCommand, UserError> {
        RegisterUserCommand::new(
            "Ada".to_string(),
            "Lovelace".to_string(),
            email.to_string(),
            phone.to_string(),
            password.to_string(),
        )
    }

    #[test]
    fn test_register_command_valid() {
        let command = register("ada@example.com", "", "analytical").unwrap();

        assert_eq!(command.email.as_str(), "ada@example.com");
        assert!(command.phone.is_none());
        assert_eq!(command.password.as_str(), "analytical");
    }

    #[test]
    fn test_register_command_reports_first_failure() {
        // Email is checked before password and phone.
        let err = register("not-an-email", "123", "short").unwrap_err();
        assert!(matches!(err, UserError::InvalidEmail(_)));

        let err = register("ada@example.com", "123", "short").unwrap_err();
        assert!(matches!(
            err,
            UserError::Password(PasswordError::TooShort { .. })
        ));

        let err = register("ada@example.com", "123", "long enough").unwrap_err();
        assert!(matches!(err, UserError::InvalidPhone(_)));
    }

    #[test]
    fn test_phone_number_bounds() {
        assert!(PhoneNumber::new("123456789".to_string()).is_err());
        assert!(PhoneNumber::new("1234567890".to_string()).is_ok());
        assert!(PhoneNumber::new("123456789012345".to_string()).is_ok());
        assert!(PhoneNumber::new("1234567890123456".to_string()).is_err());
        assert_eq!(PhoneNumber::parse_optional(String::new()), Ok(None));
    }

    #[test]
    fn test_user_id_round_trip() {
        let id = UserId::new();
        assert_eq!(UserId::from_string(&id.to_string()), Ok(id));
        assert!(UserId::from_string("nope").is_err());
    }
}
