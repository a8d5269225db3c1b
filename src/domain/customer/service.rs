use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::models::Customer;
use crate::store::EntityStore;

use super::validation::CustomerDraft;

// ============================================================================
// Customer Service
// ============================================================================
//
// Orchestrates: draft -> validation -> entity store. Update is a full
// replace and requires all three fields; absence of the target row wins
// over validation problems, matching the route behavior.
//
// ============================================================================

#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn EntityStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Customer>, DomainError> {
        self.store.list_customers().await
    }

    pub async fn get(&self, id: i64) -> Result<Customer, DomainError> {
        self.store
            .get_customer(id)
            .await?
            .ok_or_else(|| DomainError::not_found("customer", id))
    }

    pub async fn create(&self, draft: CustomerDraft) -> Result<Customer, DomainError> {
        let fields = draft.validate()?;
        let customer = self.store.insert_customer(fields).await?;

        tracing::info!(customer_id = customer.id, "✅ Customer created");
        Ok(customer)
    }

    /// Full-field replace. Fails NotFound before validation when the row is
    /// absent.
    pub async fn update(&self, id: i64, draft: CustomerDraft) -> Result<Customer, DomainError> {
        self.get(id).await?;

        let fields = draft.validate()?;
        if !self.store.update_customer(id, fields).await? {
            return Err(DomainError::not_found("customer", id));
        }

        tracing::info!(customer_id = id, "Customer updated");
        self.get(id).await
    }

    /// Deleting a customer cascades: its orders and their association rows
    /// go with it.
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.store.delete_customer(id).await? {
            return Err(DomainError::not_found("customer", id));
        }

        tracing::info!(customer_id = id, "Customer deleted");
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
