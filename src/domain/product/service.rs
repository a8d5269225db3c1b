use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::models::Product;
use crate::store::EntityStore;

use super::validation::{ProductDraft, ProductPatch};

// ============================================================================
// Product Service
// ============================================================================

#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn EntityStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Product>, DomainError> {
        self.store.list_products().await
    }

    pub async fn get(&self, id: i64) -> Result<Product, DomainError> {
        self.store
            .get_product(id)
            .await?
            .ok_or_else(|| DomainError::not_found("product", id))
    }

    pub async fn create(&self, draft: ProductDraft) -> Result<Product, DomainError> {
        let fields = draft.validate()?;
        let product = self.store.insert_product(fields).await?;

        tracing::info!(product_id = product.id, "✅ Product created");
        Ok(product)
    }

    /// Partial merge: fields absent from the patch retain the stored value.
    pub async fn update(&self, id: i64, patch: ProductPatch) -> Result<Product, DomainError> {
        let current = self.get(id).await?;
        let fields = patch.merge_into(&current)?;

        let updated = self
            .store
            .update_product(id, fields)
            .await?
            .ok_or_else(|| DomainError::not_found("product", id))?;

        tracing::info!(product_id = id, "Product updated");
        Ok(updated)
    }

    /// Deleting a product removes any association rows that reference it.
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.store.delete_product(id).await? {
            return Err(DomainError::not_found("product", id));
        }

        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
