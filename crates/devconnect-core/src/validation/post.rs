//! Post and comment text validation.

use super::input::RawInput;
use super::result::ValidationResult;
use super::rules::is_length;
use crate::domain::PostContent;
use crate::error::DomainError;

pub const TEXT_MIN: usize = 10;
pub const TEXT_MAX: usize = 5000;

/// Validate the body of a post or a comment.
///
/// When the text is missing both rules fail; the "required" message is checked
/// last and therefore is the one reported.
pub fn validate_post(input: &RawInput) -> ValidationResult {
    let mut result = ValidationResult::normalize(input, &["text"]);

    let in_range = is_length(result.field("text"), TEXT_MIN, TEXT_MAX);
    result.check(
        "text",
        in_range,
        "Post must be between 10 and 5000 characters",
    );
    result.require("text", "Text field is required");

    result
}

/// Validate and extract the content of a new post or comment.
pub fn post_content(input: &RawInput) -> Result<PostContent, DomainError> {
    let mut fields = validate_post(input).into_result()?;
    Ok(PostContent {
        text: fields.take("text"),
        name: input.text("name"),
        avatar: input.text("avatar"),
    })
}
