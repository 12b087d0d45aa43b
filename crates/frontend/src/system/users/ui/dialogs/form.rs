//! Form records for the create/edit dialogs.
//!
//! One explicit field per input keeps the validation-error keys and the
//! inputs in sync at compile time instead of going through ad hoc maps.

use contracts::system::users::{CreateUserDto, UpdateUserDto, User, ValidationErrors};

/// Current value of every input in the user form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFormData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl UserFormData {
    /// Empty defaults for the create dialog.
    pub fn for_create() -> Self {
        Self::default()
    }

    /// Seeded from the target user; password fields start blank (blank
    /// means "keep the current password").
    pub fn for_edit(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            password: String::new(),
            password_confirmation: String::new(),
        }
    }

    pub fn create_dto(&self) -> CreateUserDto {
        CreateUserDto {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            password_confirmation: self.password_confirmation.clone(),
        }
    }

    /// Update payload; blank password fields are omitted so the server
    /// keeps the current password.
    pub fn update_dto(&self) -> UpdateUserDto {
        UpdateUserDto {
            name: self.name.clone(),
            email: self.email.clone(),
            password: if self.password.is_empty() {
                None
            } else {
                Some(self.password.clone())
            },
            password_confirmation: if self.password_confirmation.is_empty() {
                None
            } else {
                Some(self.password_confirmation.clone())
            },
        }
    }
}

/// Server-reported message per input, populated from a 422 response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFormErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

impl UserFormErrors {
    pub fn from_response(errors: &ValidationErrors) -> Self {
        let first = |field: &str| errors.first(field).map(str::to_string);
        Self {
            name: first("name"),
            email: first("email"),
            password: first("password"),
            password_confirmation: first("password_confirmation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 7,
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            created_at: Some("2024-03-15T14:02:26Z".to_string()),
            updated_at: Some("2024-04-01T09:00:00Z".to_string()),
            email_verified_at: None,
            role: None,
        }
    }

    #[test]
    fn create_form_starts_empty() {
        assert_eq!(UserFormData::for_create(), UserFormData::default());
    }

    #[test]
    fn edit_form_seeds_values_and_blank_passwords() {
        let form = UserFormData::for_edit(&user());
        assert_eq!(form.name, "Jane Doe");
        assert_eq!(form.email, "jane@example.com");
        assert!(form.password.is_empty());
        assert!(form.password_confirmation.is_empty());
    }

    #[test]
    fn update_dto_omits_blank_passwords() {
        let mut form = UserFormData::for_edit(&user());
        let dto = form.update_dto();
        assert_eq!(dto.password, None);
        assert_eq!(dto.password_confirmation, None);

        form.password = "new-secret".to_string();
        let dto = form.update_dto();
        assert_eq!(dto.password.as_deref(), Some("new-secret"));
        assert_eq!(dto.password_confirmation, None);
    }

    #[test]
    fn errors_map_by_exact_field_name() {
        let body = r#"{
            "errors": {
                "email": ["The email has already been taken."],
                "password_confirmation": ["The password confirmation does not match."],
                "unknown_field": ["ignored"]
            }
        }"#;
        let response: ValidationErrors = serde_json::from_str(body).unwrap();

        let errors = UserFormErrors::from_response(&response);
        assert_eq!(
            errors.email.as_deref(),
            Some("The email has already been taken.")
        );
        assert_eq!(
            errors.password_confirmation.as_deref(),
            Some("The password confirmation does not match.")
        );
        assert_eq!(errors.name, None);
        assert_eq!(errors.password, None);
    }
}
