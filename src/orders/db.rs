//! Order store
//!
//! CRUD access to orders, always scoped by owner. The ownership filter
//! is part of every statement, so at this boundary a row belonging to
//! another user is indistinguishable from a missing one.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::orders::model::Order;

/// Fields for a new or updated order, owner and total already resolved
/// by the handler
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_amount: Decimal,
}

/// Order store capability
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert a new order for the owner; returns it with its assigned id
    async fn create(&self, owner: &str, record: OrderRecord) -> Result<Order, StoreError>;

    /// Fetch one order if it exists and belongs to the owner
    async fn find_by_id_and_owner(
        &self,
        id: i64,
        owner: &str,
    ) -> Result<Option<Order>, StoreError>;

    /// All orders belonging to the owner, store order, no pagination
    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Order>, StoreError>;

    /// Overwrite an owned order's fields; `None` when no owned row matched
    async fn update(
        &self,
        id: i64,
        owner: &str,
        record: OrderRecord,
    ) -> Result<Option<Order>, StoreError>;

    /// Delete an owned order; `false` when no owned row matched
    async fn delete(&self, id: i64, owner: &str) -> Result<bool, StoreError>;
}

/// Postgres-backed order store
#[derive(Clone)]
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn create(&self, owner: &str, record: OrderRecord) -> Result<Order, StoreError> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (product_name, quantity, unit_price, total_amount, user_name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, product_name, quantity, unit_price, total_amount, user_name
            "#,
        )
        .bind(&record.product_name)
        .bind(record.quantity)
        .bind(record.unit_price)
        .bind(record.total_amount)
        .bind(owner)
        .fetch_one(&self.pool)
        .await?;

        Ok(order)
    }

    async fn find_by_id_and_owner(
        &self,
        id: i64,
        owner: &str,
    ) -> Result<Option<Order>, StoreError> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, product_name, quantity, unit_price, total_amount, user_name
            FROM orders
            WHERE id = $1 AND user_name = $2
            "#,
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Order>, StoreError> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, product_name, quantity, unit_price, total_amount, user_name
            FROM orders
            WHERE user_name = $1
            "#,
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    async fn update(
        &self,
        id: i64,
        owner: &str,
        record: OrderRecord,
    ) -> Result<Option<Order>, StoreError> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET product_name = $1, quantity = $2, unit_price = $3, total_amount = $4
            WHERE id = $5 AND user_name = $6
            RETURNING id, product_name, quantity, unit_price, total_amount, user_name
            "#,
        )
        .bind(&record.product_name)
        .bind(record.quantity)
        .bind(record.unit_price)
        .bind(record.total_amount)
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    async fn delete(&self, id: i64, owner: &str) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM orders
            WHERE id = $1 AND user_name = $2
            "#,
        )
        .bind(id)
        .bind(owner)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
