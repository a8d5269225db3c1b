use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

use crate::domain::errors::DomainError;

// ============================================================================
// HTTP Error Mapping
// ============================================================================
//
// Validation           -> 400 with the field->message map as the body
// InvalidReference     -> 400
// NotFound / NoOrders /
//   NotInOrder         -> 404
// AlreadyInOrder       -> 409
// Storage / Internal   -> 500, logged, message not leaked verbatim
//
// ============================================================================

#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    Internal(String),
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(err) => write!(f, "{}", err),
            Self::Internal(message) => write!(f, "{}", message),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Domain(DomainError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Domain(DomainError::InvalidReference { .. }) => StatusCode::BAD_REQUEST,
            Self::Domain(DomainError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Domain(DomainError::NoOrders(_)) => StatusCode::NOT_FOUND,
            Self::Domain(DomainError::NotInOrder { .. }) => StatusCode::NOT_FOUND,
            Self::Domain(DomainError::AlreadyInOrder { .. }) => StatusCode::CONFLICT,
            Self::Domain(DomainError::Storage(_)) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());

        match self {
            Self::Domain(DomainError::Validation(errors)) => builder.json(errors),
            Self::Domain(DomainError::InvalidReference { entity, id }) => {
                builder.json(json!({ "message": format!("Invalid {} id: {}", entity, id) }))
            }
            Self::Domain(DomainError::NotFound { entity, .. }) => {
                builder.json(json!({ "error": format!("{} not found", capitalize(entity)) }))
            }
            Self::Domain(DomainError::NoOrders(_)) => {
                builder.json(json!({ "message": "No orders found for this customer" }))
            }
            Self::Domain(DomainError::NotInOrder { .. }) => {
                builder.json(json!({ "error": "Product not found in the order" }))
            }
            Self::Domain(DomainError::AlreadyInOrder { .. }) => {
                builder.json(json!({ "message": "Item is already included in this order" }))
            }
            Self::Domain(DomainError::Storage(err)) => {
                tracing::error!(error = %err, "Storage failure");
                builder.json(json!({ "error": "internal storage error" }))
            }
            Self::Internal(message) => {
                tracing::error!(error = %message, "Internal error");
                builder.json(json!({ "error": "internal error" }))
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
