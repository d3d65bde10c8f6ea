//! Input validation.
//!
//! Every validator takes a [`RawInput`], normalizes the fields it governs to
//! strings, runs its rules over all of them, and returns a
//! [`ValidationResult`]. Each validator has a companion function that returns
//! the typed fields the domain needs, or [`DomainError::Validation`].
//!
//! [`DomainError::Validation`]: crate::error::DomainError::Validation

mod education;
mod empty;
mod experience;
mod input;
mod login;
mod post;
mod profile;
mod register;
mod result;
mod rules;

pub use education::{education_fields, validate_education};
pub use empty::{Emptiness, is_empty};
pub use experience::{experience_fields, validate_experience};
pub use input::RawInput;
pub use login::{Credentials, credentials, validate_login};
pub use post::{TEXT_MAX, TEXT_MIN, post_content, validate_post};
pub use profile::{profile_fields, validate_profile};
pub use register::{Registration, registration, validate_register};
pub use result::{FieldErrors, Normalized, ValidationResult};
