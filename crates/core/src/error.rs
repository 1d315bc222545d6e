//! Errors raised by invoice, client and status operations.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Why an invoicing operation was refused.
///
/// Raised by client registration, status commands and identifier parsing.
/// Aggregation never produces one; snapshot and output failures are the
/// CLI's to report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Rejected input, such as a blank client name or an `overdue` status request.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The command does not apply to this invoice (wrong id, not past due).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// Text that is not a numeric record id.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// No record with the requested identifier.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            DomainError::not_found("invoice 42").to_string(),
            "not found: invoice 42"
        );
        assert_eq!(
            DomainError::validation("client name cannot be empty").to_string(),
            "validation failed: client name cannot be empty"
        );
    }
}
