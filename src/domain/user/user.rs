//! User entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{UserId, ValidationError};

/// Longest accepted user name, in characters.
pub const MAX_NAME_LEN: usize = 255;

/// A person who can be responsible for tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Option<String>,
    pub created_timestamp: DateTime<Utc>,
}

/// Input for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: Option<String>,
}

impl NewUser {
    /// Trims and validates the name and email.
    pub fn validated(self) -> Result<Self, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(ValidationError::out_of_range(
                "name",
                1,
                MAX_NAME_LEN as i64,
                len as i64,
            ));
        }

        let email = match self.email.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(email) => {
                validate_email(email)?;
                Some(email.to_string())
            }
        };

        Ok(Self {
            name: name.to_string(),
            email,
        })
    }
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::invalid_format(
            "email",
            "expected exactly one '@' between non-empty parts",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str, email: Option<&str>) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.map(str::to_string),
        }
    }

    #[test]
    fn trims_name() {
        let user = new_user("  Ada  ", None).validated().unwrap();
        assert_eq!(user.name, "Ada");
    }

    #[test]
    fn rejects_blank_name() {
        let err = new_user("   ", None).validated().unwrap_err();
        assert_eq!(err, ValidationError::empty_field("name"));
    }

    #[test]
    fn accepts_simple_email() {
        let user = new_user("Ada", Some("ada@example.com"))
            .validated()
            .unwrap();
        assert_eq!(user.email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn blank_email_becomes_none() {
        let user = new_user("Ada", Some("  ")).validated().unwrap();
        assert!(user.email.is_none());
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["ada", "@example.com", "ada@", "a@b@c"] {
            let err = new_user("Ada", Some(email)).validated().unwrap_err();
            assert_eq!(err.field(), "email", "email {email} should be rejected");
        }
    }
}
