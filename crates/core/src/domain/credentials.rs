use std::fmt;

use super::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub const MAX_LEN: usize = 100;

    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(DomainError::EmptyUsername);
        }

        let len = trimmed.chars().count();
        if len > Self::MAX_LEN {
            return Err(DomainError::InvalidUsernameLength(len));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompanyName(String);

impl CompanyName {
    pub const MAX_LEN: usize = 100;

    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(DomainError::EmptyCompanyName);
        }

        let len = trimmed.chars().count();
        if len > Self::MAX_LEN {
            return Err(DomainError::InvalidCompanyNameLength(len));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A password as received from a client. Never trimmed, never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct PlainPassword(String);

impl PlainPassword {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::EmptyPassword);
        }

        Ok(Self(value))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlainPassword([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::{CompanyName, DomainError, PlainPassword, Username};

    #[test]
    fn username_is_trimmed() {
        let username = Username::new("  alice ").expect("alice should be valid");

        assert_eq!(username.as_str(), "alice");
    }

    #[test]
    fn blank_username_is_rejected() {
        assert_eq!(Username::new("   "), Err(DomainError::EmptyUsername));
    }

    #[test]
    fn overlong_company_name_is_rejected() {
        let err = CompanyName::new("x".repeat(101)).expect_err("101 chars should be rejected");

        assert_eq!(
            err.to_string(),
            "invalid company name length: 101. company name must be at most 100 characters"
        );
    }

    #[test]
    fn password_keeps_surrounding_whitespace() {
        let password = PlainPassword::new(" secret ").expect("password should be valid");

        assert_eq!(password.expose(), " secret ");
    }

    #[test]
    fn password_debug_is_redacted() {
        let password = PlainPassword::new("hunter2").expect("password should be valid");

        assert!(!format!("{password:?}").contains("hunter2"));
    }

    #[test]
    fn empty_password_is_rejected() {
        assert_eq!(PlainPassword::new(""), Err(DomainError::EmptyPassword));
    }
}
