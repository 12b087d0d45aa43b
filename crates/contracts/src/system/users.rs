use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub email_verified_at: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub name: String,
    pub email: String,
    /// `None` keeps the current password.
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

/// Body of an HTTP 422 response: an optional top-level message plus
/// per-field validation messages keyed by input name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// First message reported for a field, if any.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_field_errors() {
        let body = r#"{
            "message": "The given data was invalid.",
            "errors": {
                "email": ["The email has already been taken.", "The email must be valid."],
                "password": ["The password confirmation does not match."]
            }
        }"#;

        let parsed: ValidationErrors = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.first("email"),
            Some("The email has already been taken.")
        );
        assert_eq!(
            parsed.first("password"),
            Some("The password confirmation does not match.")
        );
        assert_eq!(parsed.first("name"), None);
        assert!(!parsed.is_empty());
    }

    #[test]
    fn parses_message_only_body() {
        let parsed: ValidationErrors =
            serde_json::from_str(r#"{"message": "Unprocessable entity"}"#).unwrap();
        assert_eq!(parsed.message.as_deref(), Some("Unprocessable entity"));
        assert!(parsed.is_empty());
    }
}
