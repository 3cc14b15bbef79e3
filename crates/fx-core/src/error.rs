use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid profile type: {0}")]
    InvalidProfile(String),

    #[error("{0} must not be null")]
    MissingField(&'static str),
}
