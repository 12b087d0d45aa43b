use contracts::system::users::{CreateUserDto, UpdateUserDto, User, ValidationErrors};
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::api_base;

/// How a user-management request can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport or serialization failure; there is no response to read.
    Network(String),
    /// The server rejected the submitted fields (HTTP 422).
    Validation(ValidationErrors),
    /// Any other non-success status.
    Server { status: u16 },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "{}", e),
            ApiError::Validation(v) => match &v.message {
                Some(message) => write!(f, "{}", message),
                None => write!(f, "The given data was invalid"),
            },
            ApiError::Server { status } => write!(f, "Server error: {}", status),
        }
    }
}

async fn error_from(response: Response) -> ApiError {
    let status = response.status();
    if status == 422 {
        if let Ok(text) = response.text().await {
            if let Ok(errors) = serde_json::from_str::<ValidationErrors>(&text) {
                return ApiError::Validation(errors);
            }
        }
    }
    ApiError::Server { status }
}

/// Fetch all users
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    let response = Request::get(&format!("{}/api/users", api_base()))
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    response
        .json::<Vec<User>>()
        .await
        .map_err(|e| ApiError::Network(format!("Failed to parse response: {}", e)))
}

/// Create new user
pub async fn create_user(dto: CreateUserDto) -> Result<(), ApiError> {
    let response = Request::post(&format!("{}/api/users", api_base()))
        .json(&dto)
        .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    Ok(())
}

/// Update user
pub async fn update_user(id: i64, dto: UpdateUserDto) -> Result<(), ApiError> {
    let response = Request::put(&format!("{}/api/users/{}", api_base(), id))
        .json(&dto)
        .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    Ok(())
}

/// Delete user
pub async fn delete_user(id: i64) -> Result<(), ApiError> {
    let response = Request::delete(&format!("{}/api/users/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    Ok(())
}
