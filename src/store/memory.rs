use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::customer::CustomerFields;
use crate::domain::errors::DomainError;
use crate::domain::product::ProductFields;
use crate::models::{Customer, Order, Product};

use super::EntityStore;

// ============================================================================
// In-Memory Entity Store (test-only)
// ============================================================================
//
// Mirrors the PostgreSQL store's contract: sequential surrogate ids,
// cascading deletes, and an atomic check-and-insert on the association set.
// The single mutex plays the role of the pair uniqueness constraint.
//
// ============================================================================

#[derive(Default)]
struct Tables {
    customers: BTreeMap<i64, Customer>,
    products: BTreeMap<i64, Product>,
    orders: BTreeMap<i64, Order>,
    order_products: BTreeSet<(i64, i64)>,
    next_customer_id: i64,
    next_product_id: i64,
    next_order_id: i64,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    // --- customers ---

    async fn list_customers(&self) -> Result<Vec<Customer>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.customers.values().cloned().collect())
    }

    async fn get_customer(&self, id: i64) -> Result<Option<Customer>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.customers.get(&id).cloned())
    }

    async fn insert_customer(&self, fields: CustomerFields) -> Result<Customer, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        tables.next_customer_id += 1;
        let customer = Customer {
            id: tables.next_customer_id,
            name: fields.name,
            email: fields.email,
            address: fields.address,
        };
        tables.customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn update_customer(
        &self,
        id: i64,
        fields: CustomerFields,
    ) -> Result<bool, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        match tables.customers.get_mut(&id) {
            Some(customer) => {
                customer.name = fields.name;
                customer.email = fields.email;
                customer.address = fields.address;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_customer(&self, id: i64) -> Result<bool, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.customers.remove(&id).is_none() {
            return Ok(false);
        }

        // Cascade: the customer's orders and their association rows
        let order_ids: Vec<i64> = tables
            .orders
            .values()
            .filter(|order| order.customer_id == id)
            .map(|order| order.id)
            .collect();
        for order_id in order_ids {
            tables.orders.remove(&order_id);
            tables.order_products.retain(|(o, _)| *o != order_id);
        }

        Ok(true)
    }

    // --- products ---

    async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.products.values().cloned().collect())
    }

    async fn get_product(&self, id: i64) -> Result<Option<Product>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.products.get(&id).cloned())
    }

    async fn insert_product(&self, fields: ProductFields) -> Result<Product, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        tables.next_product_id += 1;
        let product = Product {
            id: tables.next_product_id,
            name: fields.name,
            price: fields.price,
        };
        tables.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        id: i64,
        fields: ProductFields,
    ) -> Result<Option<Product>, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        match tables.products.get_mut(&id) {
            Some(product) => {
                product.name = fields.name;
                product.price = fields.price;
                Ok(Some(product.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_product(&self, id: i64) -> Result<bool, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.products.remove(&id).is_none() {
            return Ok(false);
        }

        // Cascade: association rows referencing the product
        tables.order_products.retain(|(_, p)| *p != id);
        Ok(true)
    }

    // --- orders ---

    async fn get_order(&self, id: i64) -> Result<Option<Order>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.orders.get(&id).cloned())
    }

    async fn insert_order(
        &self,
        order_date: NaiveDate,
        customer_id: i64,
    ) -> Result<Order, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        tables.next_order_id += 1;
        let order = Order {
            id: tables.next_order_id,
            order_date,
            customer_id,
        };
        tables.orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn orders_for_customer(&self, customer_id: i64) -> Result<Vec<Order>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .orders
            .values()
            .filter(|order| order.customer_id == customer_id)
            .cloned()
            .collect())
    }

    // --- order/product association ---

    async fn products_for_order(&self, order_id: i64) -> Result<Vec<Product>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .order_products
            .iter()
            .filter(|(o, _)| *o == order_id)
            .filter_map(|(_, p)| tables.products.get(p).cloned())
            .collect())
    }

    async fn order_contains_product(
        &self,
        order_id: i64,
        product_id: i64,
    ) -> Result<bool, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.order_products.contains(&(order_id, product_id)))
    }

    async fn attach_product(&self, order_id: i64, product_id: i64) -> Result<bool, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        // Atomic check-and-insert under the lock
        Ok(tables.order_products.insert((order_id, product_id)))
    }

    async fn detach_product(&self, order_id: i64, product_id: i64) -> Result<bool, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        Ok(tables.order_products.remove(&(order_id, product_id)))
    }
}
