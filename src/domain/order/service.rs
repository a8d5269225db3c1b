use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::models::{Order, Product};
use crate::store::EntityStore;

use super::validation::OrderDraft;

// ============================================================================
// Order Service - the Relationship Manager
// ============================================================================
//
// Enforces the invariants governing which products belong to which order:
// parents must exist, and a (order, product) pair is unique. Membership
// checks happen here; the store's pair constraint backs them up so two
// concurrent adds can never both succeed.
//
// ============================================================================

#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn EntityStore>,
}

impl OrderService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Create an order for an existing customer. No products are attached
    /// yet; nothing is written when the customer reference does not resolve.
    pub async fn create(&self, draft: OrderDraft) -> Result<Order, DomainError> {
        let fields = draft.validate()?;

        if self.store.get_customer(fields.customer_id).await?.is_none() {
            return Err(DomainError::invalid_reference(
                "customer",
                fields.customer_id,
            ));
        }

        let order = self
            .store
            .insert_order(fields.order_date, fields.customer_id)
            .await?;

        tracing::info!(
            order_id = order.id,
            customer_id = order.customer_id,
            "✅ Order placed"
        );
        Ok(order)
    }

    /// Attach a product to an order. A pair that already exists is a
    /// Conflict: the second identical call fails, it is not ignored.
    pub async fn add_product(&self, order_id: i64, product_id: i64) -> Result<(), DomainError> {
        if self.store.get_order(order_id).await?.is_none() {
            return Err(DomainError::invalid_reference("order", order_id));
        }
        if self.store.get_product(product_id).await?.is_none() {
            return Err(DomainError::invalid_reference("product", product_id));
        }

        if self.store.order_contains_product(order_id, product_id).await? {
            return Err(DomainError::AlreadyInOrder {
                order_id,
                product_id,
            });
        }

        // The store insert is atomic under the pair constraint, so a
        // concurrent attach that slipped past the check above still loses
        if !self.store.attach_product(order_id, product_id).await? {
            return Err(DomainError::AlreadyInOrder {
                order_id,
                product_id,
            });
        }

        tracing::info!(order_id, product_id, "Product added to order");
        Ok(())
    }

    /// Detach a product from an order. Absent parents and an absent pair
    /// are both NotFound-shaped.
    pub async fn remove_product(&self, order_id: i64, product_id: i64) -> Result<(), DomainError> {
        if self.store.get_order(order_id).await?.is_none() {
            return Err(DomainError::not_found("order", order_id));
        }
        if self.store.get_product(product_id).await?.is_none() {
            return Err(DomainError::not_found("product", product_id));
        }

        if !self.store.detach_product(order_id, product_id).await? {
            return Err(DomainError::NotInOrder {
                order_id,
                product_id,
            });
        }

        tracing::info!(order_id, product_id, "Product removed from order");
        Ok(())
    }

    /// Products attached to an order. An existing order with no products
    /// returns an empty list.
    pub async fn products_for_order(&self, order_id: i64) -> Result<Vec<Product>, DomainError> {
        if self.store.get_order(order_id).await?.is_none() {
            return Err(DomainError::not_found("order", order_id));
        }

        self.store.products_for_order(order_id).await
    }

    /// Orders placed by a customer. An empty result set is reported as
    /// "no orders found" rather than an empty-list success; kept for
    /// compatibility with the original interface.
    pub async fn orders_for_customer(&self, customer_id: i64) -> Result<Vec<Order>, DomainError> {
        if self.store.get_customer(customer_id).await?.is_none() {
            return Err(DomainError::not_found("customer", customer_id));
        }

        let orders = self.store.orders_for_customer(customer_id).await?;
        if orders.is_empty() {
            return Err(DomainError::NoOrders(customer_id));
        }

        Ok(orders)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
