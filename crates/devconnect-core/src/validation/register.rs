//! Registration input validation.

use super::input::RawInput;
use super::result::ValidationResult;
use super::rules::{is_email, is_length};
use crate::error::DomainError;

/// A validated registration request.
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub fn validate_register(input: &RawInput) -> ValidationResult {
    let mut result =
        ValidationResult::normalize(input, &["name", "email", "password", "confirm_password"]);

    let name_ok = is_length(result.field("name"), 2, 30);
    result.check("name", name_ok, "Name must be between 2 and 30 characters");
    result.require("name", "Name field is required");

    result.require("email", "Email field is required");
    let email_ok = is_email(result.field("email"));
    result.check("email", email_ok, "Email is invalid");

    result.require("password", "Password field is required");
    let password_ok = is_length(result.field("password"), 6, 30);
    result.check(
        "password",
        password_ok,
        "Password must be between 6 and 30 characters",
    );

    result.require("confirm_password", "Confirm password field is required");
    let matches = result.field("password") == result.field("confirm_password");
    result.check("confirm_password", matches, "Passwords must match");

    result
}

pub fn registration(input: &RawInput) -> Result<Registration, DomainError> {
    let mut fields = validate_register(input).into_result()?;
    Ok(Registration {
        name: fields.take("name"),
        email: fields.take("email"),
        password: fields.take("password"),
    })
}
