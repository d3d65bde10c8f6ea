//! # DevConnect Core
//!
//! The domain layer of the DevConnect backend: aggregates and their nested
//! collections, input validation, and the ports infrastructure implements.
//! No infrastructure dependencies live here.

pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

pub use error::{DomainError, Missing, RepoError};
