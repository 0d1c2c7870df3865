//! In-memory store implementations
//!
//! Behave like the Postgres stores — including the ownership filter,
//! monotonic order ids, and duplicate detection — while keeping the
//! suite free of external services. A low bcrypt cost keeps the tests
//! fast; production uses the default cost.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use ordermgmt::auth::users::{User, UserStore};
use ordermgmt::error::StoreError;
use ordermgmt::orders::db::{OrderRecord, OrderStore};
use ordermgmt::orders::model::Order;
use uuid::Uuid;

const TEST_BCRYPT_COST: u32 = 4;

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, email: &str, password: &str) -> Result<User, StoreError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == email) {
            return Err(StoreError::Duplicate);
        }

        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: bcrypt::hash(password, TEST_BCRYPT_COST)?,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn verify_password(&self, user: &User, password: &str) -> Result<bool, StoreError> {
        Ok(bcrypt::verify(password, &user.password_hash)?)
    }
}

#[derive(Default)]
struct OrderTable {
    next_id: i64,
    rows: Vec<Order>,
}

#[derive(Default)]
pub struct MemoryOrderStore {
    inner: Mutex<OrderTable>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn create(&self, owner: &str, record: OrderRecord) -> Result<Order, StoreError> {
        let mut table = self.inner.lock().unwrap();
        table.next_id += 1;

        let order = Order {
            id: table.next_id,
            product_name: record.product_name,
            quantity: record.quantity,
            unit_price: record.unit_price,
            total_amount: record.total_amount,
            user_name: owner.to_string(),
        };
        table.rows.push(order.clone());
        Ok(order)
    }

    async fn find_by_id_and_owner(
        &self,
        id: i64,
        owner: &str,
    ) -> Result<Option<Order>, StoreError> {
        let table = self.inner.lock().unwrap();
        Ok(table
            .rows
            .iter()
            .find(|o| o.id == id && o.user_name == owner)
            .cloned())
    }

    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Order>, StoreError> {
        let table = self.inner.lock().unwrap();
        Ok(table
            .rows
            .iter()
            .filter(|o| o.user_name == owner)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: i64,
        owner: &str,
        record: OrderRecord,
    ) -> Result<Option<Order>, StoreError> {
        let mut table = self.inner.lock().unwrap();
        let Some(order) = table
            .rows
            .iter_mut()
            .find(|o| o.id == id && o.user_name == owner)
        else {
            return Ok(None);
        };

        order.product_name = record.product_name;
        order.quantity = record.quantity;
        order.unit_price = record.unit_price;
        order.total_amount = record.total_amount;
        Ok(Some(order.clone()))
    }

    async fn delete(&self, id: i64, owner: &str) -> Result<bool, StoreError> {
        let mut table = self.inner.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|o| !(o.id == id && o.user_name == owner));
        Ok(table.rows.len() < before)
    }
}
