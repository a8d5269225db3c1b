use serde::Deserialize;

use crate::domain::errors::{DomainError, ValidationErrors};
use crate::models::Product;

// ============================================================================
// Product Validation
// ============================================================================

/// Raw product input for creation: both fields required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub price: Option<f64>,
}

/// Raw product input for update: both fields optional, absent means
/// "keep the current value". This asymmetry with Customer is deliberate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
}

/// Fully validated product fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
}

fn check_name(name: &str, errors: &mut ValidationErrors) -> bool {
    if name.trim().is_empty() {
        errors.push("name", "must not be empty");
        return false;
    }
    true
}

fn check_price(price: f64, errors: &mut ValidationErrors) -> bool {
    if !price.is_finite() || price < 0.0 {
        errors.push("price", "must be a non-negative number");
        return false;
    }
    true
}

impl ProductDraft {
    pub fn validate(self) -> Result<ProductFields, DomainError> {
        let mut errors = ValidationErrors::new();

        match &self.name {
            Some(name) => {
                check_name(name, &mut errors);
            }
            None => errors.push("name", "missing required field"),
        }

        match self.price {
            Some(price) => {
                check_price(price, &mut errors);
            }
            None => errors.push("price", "missing required field"),
        }

        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        Ok(ProductFields {
            name: self.name.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
        })
    }
}

impl ProductPatch {
    /// Merge the patch over the current row, validating only the fields
    /// that were supplied.
    pub fn merge_into(self, current: &Product) -> Result<ProductFields, DomainError> {
        let mut errors = ValidationErrors::new();

        if let Some(name) = &self.name {
            check_name(name, &mut errors);
        }
        if let Some(price) = self.price {
            check_price(price, &mut errors);
        }

        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        Ok(ProductFields {
            name: self.name.unwrap_or_else(|| current.name.clone()),
            price: self.price.unwrap_or(current.price),
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
