use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

// ============================================================================
// Error Taxonomy
// ============================================================================
//
// Every failure a request can produce, as a typed outcome. Raw storage errors
// are wrapped in Storage and never cross the presentation boundary
// unclassified.
//
// ============================================================================

/// Field-level validation failures, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// Malformed or missing input fields, with per-field detail
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// The requested primary entity does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// A foreign key in the request does not resolve to an existing row
    #[error("invalid {entity} id: {id}")]
    InvalidReference { entity: &'static str, id: i64 },

    /// Compatibility shape: an empty customer-orders listing is a failure,
    /// not an empty-list success
    #[error("no orders found for customer {0}")]
    NoOrders(i64),

    /// Duplicate association insert (idempotent-by-rejection)
    #[error("product {product_id} is already included in order {order_id}")]
    AlreadyInOrder { order_id: i64, product_id: i64 },

    /// Association removal for a pair that is not present
    #[error("product {product_id} is not in order {order_id}")]
    NotInOrder { order_id: i64, product_id: i64 },

    /// Anything the store could not classify; the transaction has already
    /// been rolled back when this surfaces
    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn invalid_reference(entity: &'static str, id: i64) -> Self {
        Self::InvalidReference { entity, id }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
