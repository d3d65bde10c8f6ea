//! Domain-level error types.

use std::fmt;

use thiserror::Error;

use crate::validation::FieldErrors;

/// Things a lookup can fail to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    Post,
    Comment,
    Profile,
    Experience,
    Education,
}

impl Missing {
    /// Response key the failure is reported under.
    pub fn key(self) -> &'static str {
        match self {
            Missing::Post => "postNotFound",
            Missing::Comment => "commentNotExists",
            Missing::Profile => "noProfile",
            Missing::Experience => "experienceNotFound",
            Missing::Education => "educationNotFound",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Missing::Post => "No post found with that ID",
            Missing::Comment => "Comment does not exist",
            Missing::Profile => "There is no profile for this user",
            Missing::Experience => "Experience entry does not exist",
            Missing::Education => "Education entry does not exist",
        }
    }
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("{0}")]
    NotFound(Missing),

    #[error("User already liked this post")]
    AlreadyLiked,

    #[error("You have not yet liked this post")]
    NotLiked,

    #[error("User not authorized")]
    NotOwner,

    #[error("{message}")]
    Duplicate {
        field: &'static str,
        message: String,
    },
}

impl DomainError {
    /// Response key the failure is reported under.
    pub fn key(&self) -> &'static str {
        match self {
            DomainError::Validation(_) => "validation",
            DomainError::NotFound(missing) => missing.key(),
            DomainError::AlreadyLiked => "alreadyLiked",
            DomainError::NotLiked => "notLiked",
            DomainError::NotOwner => "notAuthorized",
            DomainError::Duplicate { field, .. } => field,
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
