//! Education entry validation.

use super::input::RawInput;
use super::result::ValidationResult;
use crate::domain::EducationFields;
use crate::error::DomainError;

pub fn validate_education(input: &RawInput) -> ValidationResult {
    let mut result =
        ValidationResult::normalize(input, &["school", "degree", "field_of_study", "from"]);

    result.require("school", "School field is required");
    result.require("degree", "Degree field is required");
    result.require("field_of_study", "Field of study field is required");
    result.require("from", "From date field is required");

    result
}

pub fn education_fields(input: &RawInput) -> Result<EducationFields, DomainError> {
    let mut fields = validate_education(input).into_result()?;
    Ok(EducationFields {
        school: fields.take("school"),
        degree: fields.take("degree"),
        field_of_study: fields.take("field_of_study"),
        from: fields.take("from"),
        to: input.text("to"),
        current: input.flag("current"),
        description: input.text("description"),
    })
}
