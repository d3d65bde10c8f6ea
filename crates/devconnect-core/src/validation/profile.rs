//! Profile input validation.

use serde_json::Value;

use super::empty::is_empty;
use super::input::RawInput;
use super::result::ValidationResult;
use super::rules::{is_length, is_url};
use crate::domain::{ProfileFields, SocialLinks};
use crate::error::DomainError;

const LINK_FIELDS: [&str; 6] = [
    "website",
    "youtube",
    "twitter",
    "facebook",
    "linkedin",
    "instagram",
];

pub fn validate_profile(input: &RawInput) -> ValidationResult {
    let mut result = ValidationResult::normalize(
        input,
        &[
            "handle",
            "status",
            "skillset",
            "website",
            "youtube",
            "twitter",
            "facebook",
            "linkedin",
            "instagram",
        ],
    );

    let handle_ok = is_length(result.field("handle"), 2, 40);
    result.check(
        "handle",
        handle_ok,
        "Handle needs to be between 2 and 40 characters",
    );
    result.require("handle", "Profile handle is required");
    result.require("status", "Status field is required");
    result.require("skillset", "Skillset field is required");

    for field in LINK_FIELDS {
        let value = result.field(field);
        let ok = is_empty(value) || is_url(value);
        result.check(field, ok, "Not a valid URL");
    }

    result
}

/// Validate and extract the fields of a profile create/update.
pub fn profile_fields(input: &RawInput) -> Result<ProfileFields, DomainError> {
    let mut fields = validate_profile(input).into_result()?;
    Ok(ProfileFields {
        handle: fields.take("handle"),
        status: fields.take("status"),
        skillset: skills(input, &fields.take("skillset")),
        company: input.text("company"),
        website: input.text("website"),
        location: input.text("location"),
        bio: input.text("bio"),
        github_username: input.text("github_username"),
        social: SocialLinks {
            youtube: input.text("youtube"),
            twitter: input.text("twitter"),
            facebook: input.text("facebook"),
            instagram: input.text("instagram"),
            linkedin: input.text("linkedin"),
        },
    })
}

/// Skills arrive either as a list of strings or as one comma separated string.
fn skills(input: &RawInput, normalized: &str) -> Vec<String> {
    match input.get("skillset") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(str::to_string)
            .collect(),
        _ => normalized
            .split(',')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> RawInput {
        RawInput::new()
            .with("handle", "ada")
            .with("status", "Developer")
            .with("skillset", "Rust, SQL,  ,Go")
    }

    #[test]
    fn test_valid_profile() {
        assert!(validate_profile(&valid_input()).is_valid());
    }

    #[test]
    fn test_required_fields() {
        let result = validate_profile(&RawInput::new());
        assert_eq!(
            result.errors().get("handle"),
            Some("Profile handle is required")
        );
        assert_eq!(result.errors().get("status"), Some("Status field is required"));
        assert_eq!(
            result.errors().get("skillset"),
            Some("Skillset field is required")
        );
        assert_eq!(result.errors().len(), 3);
    }

    #[test]
    fn test_handle_length() {
        let result = validate_profile(&valid_input().with("handle", "h".repeat(41)));
        assert_eq!(
            result.errors().get("handle"),
            Some("Handle needs to be between 2 and 40 characters")
        );
    }

    #[test]
    fn test_links_are_checked_only_when_supplied() {
        let result = validate_profile(
            &valid_input()
                .with("website", "not a url")
                .with("twitter", "https://twitter.com/ada")
                .with("youtube", ""),
        );
        assert_eq!(result.errors().get("website"), Some("Not a valid URL"));
        assert_eq!(result.errors().len(), 1);
    }

    #[test]
    fn test_profile_fields_split_skills() {
        let fields = profile_fields(&valid_input().with("bio", "Hi")).unwrap();
        assert_eq!(fields.skillset, vec!["Rust", "SQL", "Go"]);
        assert_eq!(fields.bio.as_deref(), Some("Hi"));
        assert_eq!(fields.company, None);
        assert_eq!(fields.social, SocialLinks::default());
    }

    #[test]
    fn test_profile_fields_accept_skill_list() {
        let input = valid_input().with("skillset", serde_json::json!([" rust", "sql ", "", 7]));
        let fields = profile_fields(&input).unwrap();
        assert_eq!(fields.skillset, vec!["rust", "sql"]);
    }
}
