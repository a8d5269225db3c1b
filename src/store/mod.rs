use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::customer::CustomerFields;
use crate::domain::errors::DomainError;
use crate::domain::product::ProductFields;
use crate::models::{Customer, Order, Product};

pub mod postgres;

#[cfg(test)]
pub mod memory;

pub use postgres::PgEntityStore;

#[cfg(test)]
pub use memory::MemoryStore;

// ============================================================================
// Entity Store
// ============================================================================
//
// The single write path to the relational store, injected into every
// service. Absence is expressed in-band (Option / bool); an Err from any
// method means the storage layer itself failed and nothing partial is
// visible.
//
// Association contract:
// - attach_product is atomic under the (order_id, product_id) uniqueness
//   constraint and returns false when the pair already exists, so two
//   concurrent attaches can never both return true
// - detach_product returns false when the pair was not present
//
// ============================================================================

#[async_trait]
pub trait EntityStore: Send + Sync {
    // --- customers ---
    async fn list_customers(&self) -> Result<Vec<Customer>, DomainError>;
    async fn get_customer(&self, id: i64) -> Result<Option<Customer>, DomainError>;
    async fn insert_customer(&self, fields: CustomerFields) -> Result<Customer, DomainError>;
    /// Full replace; returns false when the row does not exist
    async fn update_customer(&self, id: i64, fields: CustomerFields)
        -> Result<bool, DomainError>;
    /// Cascades to the customer's orders and their association rows
    async fn delete_customer(&self, id: i64) -> Result<bool, DomainError>;

    // --- products ---
    async fn list_products(&self) -> Result<Vec<Product>, DomainError>;
    async fn get_product(&self, id: i64) -> Result<Option<Product>, DomainError>;
    async fn insert_product(&self, fields: ProductFields) -> Result<Product, DomainError>;
    /// Receives the already-merged full field set; None when the row does
    /// not exist
    async fn update_product(
        &self,
        id: i64,
        fields: ProductFields,
    ) -> Result<Option<Product>, DomainError>;
    /// Cascades to any association rows referencing the product
    async fn delete_product(&self, id: i64) -> Result<bool, DomainError>;

    // --- orders ---
    async fn get_order(&self, id: i64) -> Result<Option<Order>, DomainError>;
    async fn insert_order(
        &self,
        order_date: NaiveDate,
        customer_id: i64,
    ) -> Result<Order, DomainError>;
    async fn orders_for_customer(&self, customer_id: i64) -> Result<Vec<Order>, DomainError>;

    // --- order/product association ---
    async fn products_for_order(&self, order_id: i64) -> Result<Vec<Product>, DomainError>;
    async fn order_contains_product(
        &self,
        order_id: i64,
        product_id: i64,
    ) -> Result<bool, DomainError>;
    async fn attach_product(&self, order_id: i64, product_id: i64) -> Result<bool, DomainError>;
    async fn detach_product(&self, order_id: i64, product_id: i64) -> Result<bool, DomainError>;
}
