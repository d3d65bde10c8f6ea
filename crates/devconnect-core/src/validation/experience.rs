//! Experience entry validation.

use super::input::RawInput;
use super::result::ValidationResult;
use crate::domain::ExperienceFields;
use crate::error::DomainError;

pub fn validate_experience(input: &RawInput) -> ValidationResult {
    let mut result = ValidationResult::normalize(input, &["title", "company", "from"]);

    result.require("title", "Job title field is required");
    result.require("company", "Company field is required");
    result.require("from", "From date field is required");

    result
}

pub fn experience_fields(input: &RawInput) -> Result<ExperienceFields, DomainError> {
    let mut fields = validate_experience(input).into_result()?;
    Ok(ExperienceFields {
        title: fields.take("title"),
        company: fields.take("company"),
        location: input.text("location"),
        from: fields.take("from"),
        to: input.text("to"),
        current: input.flag("current"),
        description: input.text("description"),
    })
}
