use crate::domain::{email::Email, username::Username, validation::ValidationError};

/// Login identifier: accounts can be looked up by username or email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginId {
    Username(Username),
    Email(Email),
}

impl LoginId {
    /// Parse a raw identifier field. Anything containing an `@` is treated
    /// as an email address, everything else as a username.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyLoginIdentifier);
        }

        if trimmed.contains('@') {
            Ok(Self::Email(Email::try_from(trimmed.to_string())?))
        } else {
            Ok(Self::Username(Username::try_from(trimmed.to_string())?))
        }
    }
}
