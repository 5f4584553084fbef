//! Submission forms and their structural validation.
//!
//! Every field deserializes with a default so that a missing field surfaces
//! as a field error from validation rather than as a rejected request.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

const REQUIRED: &str = "This field is required.";
const INVALID_EMAIL: &str = "Enter a valid email address.";

fn required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(REQUIRED.into());
        return Err(error);
    }
    Ok(())
}

/// Required email field: a blank value reports only the missing value.
fn email_address(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    if !value.to_string().validate_email() {
        let mut error = ValidationError::new("email");
        error.message = Some(INVALID_EMAIL.into());
        return Err(error);
    }
    Ok(())
}

/// Validate a cleaned form, collecting per-field messages on failure.
pub fn check<F: Validate>(form: &F) -> Result<(), FormErrors> {
    form.validate().map_err(FormErrors::from)
}

/// Comment submission form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CommentForm {
    #[serde(default)]
    #[validate(
        custom(function = "required"),
        length(max = 80, message = "Ensure this value has at most 80 characters.")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "email_address"))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "required"))]
    pub body: String,
}

impl CommentForm {
    /// Strip surrounding whitespace the way text inputs are normalized.
    pub fn clean(&mut self) {
        trim_in_place(&mut self.name);
        trim_in_place(&mut self.email);
        trim_in_place(&mut self.body);
    }
}

/// "Share this post by email" form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct EmailPostForm {
    #[serde(default)]
    #[validate(
        custom(function = "required"),
        length(max = 25, message = "Ensure this value has at most 25 characters.")
    )]
    pub name: String,

    /// The sender's own address.
    #[serde(default)]
    #[validate(custom(function = "email_address"))]
    pub email: String,

    /// Recipient address.
    #[serde(default)]
    #[validate(custom(function = "email_address"))]
    pub to: String,

    #[serde(default)]
    pub comments: Option<String>,
}

impl EmailPostForm {
    pub fn clean(&mut self) {
        trim_in_place(&mut self.name);
        trim_in_place(&mut self.email);
        trim_in_place(&mut self.to);
        self.comments = self
            .comments
            .take()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
    }
}

/// Query string of the post listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

/// Field name -> error messages, in field-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Messages for one field; empty when the field is valid.
    pub fn field(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = BTreeMap::new();
        for (field, errs) in errors.field_errors() {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            fields.insert(field.to_string(), messages);
        }
        Self(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(name: &str, email: &str, body: &str) -> CommentForm {
        CommentForm {
            name: name.to_string(),
            email: email.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_valid_comment() {
        assert!(check(&comment("Alice", "a@example.com", "Nice post")).is_ok());
    }

    #[test]
    fn test_comment_with_empty_name() {
        let errors = check(&comment("", "a@example.com", "Nice post")).unwrap_err();
        assert!(errors.has("name"));
        assert_eq!(errors.field("name"), [REQUIRED.to_string()]);
        assert!(!errors.has("email"));
    }

    #[test]
    fn test_whitespace_only_name_is_empty_after_clean() {
        let mut form = comment("   ", "a@example.com", "Nice post");
        form.clean();
        assert!(check(&form).unwrap_err().has("name"));
    }

    #[test]
    fn test_comment_name_too_long() {
        let errors = check(&comment(&"a".repeat(81), "a@example.com", "x")).unwrap_err();
        assert!(errors.has("name"));
    }

    #[test]
    fn test_missing_fields_deserialize_to_errors() {
        let form: CommentForm = serde_json::from_str(r#"{"name": "Alice"}"#).unwrap();
        let errors = check(&form).unwrap_err();
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["body", "email"]);
    }

    #[test]
    fn test_share_form_rejects_malformed_recipient() {
        let mut form = EmailPostForm {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            to: "not-an-email".to_string(),
            comments: Some("  ".to_string()),
        };
        form.clean();
        assert_eq!(form.comments, None);

        let errors = check(&form).unwrap_err();
        assert!(errors.has("to"));
        assert!(!errors.has("email"));
    }

    #[test]
    fn test_blank_addresses_are_required() {
        let errors = check(&comment("Alice", "", "Nice post")).unwrap_err();
        assert_eq!(errors.field("email"), [REQUIRED.to_string()]);

        let share = EmailPostForm {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            to: String::new(),
            comments: None,
        };
        let errors = check(&share).unwrap_err();
        assert_eq!(errors.field("to"), [REQUIRED.to_string()]);

        let errors = check(&comment("Alice", "nope", "Nice post")).unwrap_err();
        assert_eq!(errors.field("email"), [INVALID_EMAIL.to_string()]);
    }
}
