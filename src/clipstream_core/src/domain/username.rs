use serde::{Deserialize, Serialize};

use crate::domain::validation::ValidationError;

/// Case-normalized unique account handle.
///
/// Stored and compared lowercase so `Alice` and `alice` resolve to the same
/// account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        let normalized = raw.trim().to_lowercase();

        let len = normalized.chars().count();
        if !(3..=30).contains(&len) {
            return Err(ValidationError::InvalidUsername);
        }

        if !normalized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        {
            return Err(ValidationError::InvalidUsername);
        }

        Ok(Self(normalized))
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
