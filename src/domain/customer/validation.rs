use serde::Deserialize;

use crate::domain::errors::{DomainError, ValidationErrors};

// ============================================================================
// Customer Validation
// ============================================================================

/// Raw customer input as it arrives from the outside. Every field is
/// optional here so presence checking is ours, not the deserializer's.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// Fully validated customer fields. Used for both create and full-replace
/// update.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerFields {
    pub name: String,
    pub email: String,
    /// Opaque string, format deliberately unvalidated
    pub address: String,
}

impl CustomerDraft {
    /// Structural validation only: presence and shape. Referential checks
    /// happen in the services.
    pub fn validate(self) -> Result<CustomerFields, DomainError> {
        let mut errors = ValidationErrors::new();

        let name = match self.name {
            Some(name) if !name.trim().is_empty() => Some(name),
            Some(_) => {
                errors.push("name", "must not be empty");
                None
            }
            None => {
                errors.push("name", "missing required field");
                None
            }
        };

        let email = match self.email {
            Some(email) => Some(email),
            None => {
                errors.push("email", "missing required field");
                None
            }
        };

        let address = match self.address {
            Some(address) => Some(address),
            None => {
                errors.push("address", "missing required field");
                None
            }
        };

        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        // All three are Some once errors is empty
        Ok(CustomerFields {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            address: address.unwrap_or_default(),
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
