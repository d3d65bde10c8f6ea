//! Login input validation.

use super::input::RawInput;
use super::result::ValidationResult;
use super::rules::is_email;
use crate::error::DomainError;

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

pub fn validate_login(input: &RawInput) -> ValidationResult {
    let mut result = ValidationResult::normalize(input, &["email", "password"]);

    let email_ok = is_email(result.field("email"));
    result.check("email", email_ok, "Email is invalid");
    result.require("email", "Email field is required");
    result.require("password", "Password field is required");

    result
}

pub fn credentials(input: &RawInput) -> Result<Credentials, DomainError> {
    let mut fields = validate_login(input).into_result()?;
    Ok(Credentials {
        email: fields.take("email"),
        password: fields.take("password"),
    })
}
