use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::customer::CustomerFields;
use crate::domain::errors::DomainError;
use crate::domain::product::ProductFields;
use crate::models::{Customer, Order, Product};

use super::EntityStore;

// ============================================================================
// PostgreSQL Entity Store
// ============================================================================
//
// Every method is a single statement, so each one is atomic on its own.
// The cascading foreign keys declared in db::SCHEMA carry the delete
// policy, and the pair primary key on order_product makes attach_product
// safe under concurrency: ON CONFLICT DO NOTHING reports the losing insert
// through rows_affected.
//
// ============================================================================

pub struct PgEntityStore {
    pool: PgPool,
}

impl PgEntityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore for PgEntityStore {
    // --- customers ---

    async fn list_customers(&self) -> Result<Vec<Customer>, DomainError> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT id, name, email, address FROM customer ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    async fn get_customer(&self, id: i64) -> Result<Option<Customer>, DomainError> {
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT id, name, email, address FROM customer WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn insert_customer(&self, fields: CustomerFields) -> Result<Customer, DomainError> {
        let customer = sqlx::query_as::<_, Customer>(
            "INSERT INTO customer (name, email, address) VALUES ($1, $2, $3)
             RETURNING id, name, email, address",
        )
        .bind(fields.name)
        .bind(fields.email)
        .bind(fields.address)
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn update_customer(
        &self,
        id: i64,
        fields: CustomerFields,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "UPDATE customer SET name = $2, email = $3, address = $4 WHERE id = $1",
        )
        .bind(id)
        .bind(fields.name)
        .bind(fields.email)
        .bind(fields.address)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_customer(&self, id: i64) -> Result<bool, DomainError> {
        // Orders and association rows go with it (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM customer WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // --- products ---

    async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        let products =
            sqlx::query_as::<_, Product>("SELECT id, name, price FROM product ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(products)
    }

    async fn get_product(&self, id: i64) -> Result<Option<Product>, DomainError> {
        let product =
            sqlx::query_as::<_, Product>("SELECT id, name, price FROM product WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(product)
    }

    async fn insert_product(&self, fields: ProductFields) -> Result<Product, DomainError> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO product (name, price) VALUES ($1, $2)
             RETURNING id, name, price",
        )
        .bind(fields.name)
        .bind(fields.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    async fn update_product(
        &self,
        id: i64,
        fields: ProductFields,
    ) -> Result<Option<Product>, DomainError> {
        let product = sqlx::query_as::<_, Product>(
            "UPDATE product SET name = $2, price = $3 WHERE id = $1
             RETURNING id, name, price",
        )
        .bind(id)
        .bind(fields.name)
        .bind(fields.price)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn delete_product(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM product WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // --- orders ---

    async fn get_order(&self, id: i64) -> Result<Option<Order>, DomainError> {
        let order = sqlx::query_as::<_, Order>(
            "SELECT id, order_date, customer_id FROM orders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    async fn insert_order(
        &self,
        order_date: NaiveDate,
        customer_id: i64,
    ) -> Result<Order, DomainError> {
        let order = sqlx::query_as::<_, Order>(
            "INSERT INTO orders (order_date, customer_id) VALUES ($1, $2)
             RETURNING id, order_date, customer_id",
        )
        .bind(order_date)
        .bind(customer_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(order)
    }

    async fn orders_for_customer(&self, customer_id: i64) -> Result<Vec<Order>, DomainError> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT id, order_date, customer_id FROM orders WHERE customer_id = $1 ORDER BY id",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    // --- order/product association ---

    async fn products_for_order(&self, order_id: i64) -> Result<Vec<Product>, DomainError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT p.id, p.name, p.price
             FROM product p
             JOIN order_product op ON op.product_id = p.id
             WHERE op.order_id = $1
             ORDER BY p.id",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn order_contains_product(
        &self,
        order_id: i64,
        product_id: i64,
    ) -> Result<bool, DomainError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                 SELECT 1 FROM order_product WHERE order_id = $1 AND product_id = $2
             )",
        )
        .bind(order_id)
        .bind(product_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn attach_product(&self, order_id: i64, product_id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "INSERT INTO order_product (order_id, product_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(order_id)
        .bind(product_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn detach_product(&self, order_id: i64, product_id: i64) -> Result<bool, DomainError> {
        let result =
            sqlx::query("DELETE FROM order_product WHERE order_id = $1 AND product_id = $2")
                .bind(order_id)
                .bind(product_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}

// Note: these queries require integration testing against a real PostgreSQL
// instance. The store's behavioral contract (cascades, attach/detach
// semantics, id assignment) is covered by the unit tests running on the
// in-memory implementation of the same trait.
