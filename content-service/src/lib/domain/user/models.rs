use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::UserIdError;
use crate::domain::user::errors::UsernameError;

/// Registered account.
///
/// `password_hash` never leaves the service: response types copy the public fields only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Store-assigned user key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl UserId {
    /// Parse a `/users/{id}` path segment. Zero and negatives are rejected.
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        s.parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .map(UserId)
            .ok_or_else(|| UserIdError(s.to_string()))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Login name, unique across the store.
///
/// 3 to 32 characters drawn from letters, digits, `_` and `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub const LENGTH: RangeInclusive<usize> = 3..=32;

    pub fn new(raw: String) -> Result<Self, UsernameError> {
        let actual = raw.chars().count();
        if !Self::LENGTH.contains(&actual) {
            return Err(UsernameError::Length {
                min: *Self::LENGTH.start(),
                max: *Self::LENGTH.end(),
                actual,
            });
        }

        match raw
            .chars()
            .find(|c| !(c.is_alphanumeric() || matches!(c, '_' | '-')))
        {
            Some(bad) => Err(UsernameError::Character(bad)),
            None => Ok(Self(raw)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Syntactically valid email address. Deliverability is not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(raw: String) -> Result<Self, EmailError> {
        match email_address::EmailAddress::from_str(&raw) {
            Ok(_) => Ok(Self(raw)),
            Err(e) => Err(EmailError {
                address: raw,
                reason: e.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// User that has not been stored yet; the store assigns id and creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
}

/// Registration request after field validation. The password is still plaintext here.
#[derive(Debug)]
pub struct CreateUserCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: String,
}

impl CreateUserCommand {
    pub fn new(username: Username, email: EmailAddress, password: String) -> Self {
        Self {
            username,
            email,
            password,
        }
    }
}
