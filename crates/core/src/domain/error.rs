use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("invalid username length: {0}. username must be at most 100 characters")]
    InvalidUsernameLength(usize),
    #[error("company name must not be empty")]
    EmptyCompanyName,
    #[error("invalid company name length: {0}. company name must be at most 100 characters")]
    InvalidCompanyNameLength(usize),
    #[error("password must not be empty")]
    EmptyPassword,
    #[error("problem description must not be empty")]
    EmptyProblemDescription,
}
